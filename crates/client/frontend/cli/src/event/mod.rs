//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator that coordinates runtime
//! events, user input, and UI updates.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
