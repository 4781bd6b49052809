//! Events the engine reacts to.

use crate::env::Timer;
use crate::state::{Point, TargetId};

/// External event delivered to [`super::SessionEngine::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionCommand {
    /// Play / Play Again.
    Start,
    Tick,
    /// Primary click at an arena position.
    Fire(Point),
    /// Reload key.
    RequestReload,
    ReloadFinished,
    FlightFinished(TargetId),
}

impl SessionCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionCommand::Start => "start",
            SessionCommand::Tick => "tick",
            SessionCommand::Fire(_) => "fire",
            SessionCommand::RequestReload => "request_reload",
            SessionCommand::ReloadFinished => "reload_finished",
            SessionCommand::FlightFinished(_) => "flight_finished",
        }
    }
}

impl From<Timer> for SessionCommand {
    fn from(timer: Timer) -> Self {
        match timer {
            Timer::SessionTick => SessionCommand::Tick,
            Timer::ReloadFinished => SessionCommand::ReloadFinished,
            Timer::FlightFinished(id) => SessionCommand::FlightFinished(id),
        }
    }
}
