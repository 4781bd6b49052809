//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns the state and serializes user commands with timer
//! firings, so the engine only ever sees one event at a time.

mod session;

pub use session::{Command, SessionWorker};
