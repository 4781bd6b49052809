//! Plain data types composing the session state.
mod common;
mod session;
mod target;

pub use common::{Bounds, Point, SessionTime, TargetId};
pub use session::{ReloadState, SessionPhase};
pub use target::{Flight, SpriteKind, Target, ease_both};
