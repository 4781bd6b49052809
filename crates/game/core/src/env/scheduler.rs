//! Timer and clock ports.

use core::time::Duration;

use crate::state::{SessionTime, TargetId};

/// Callback the host delivers back to the engine when a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timer {
    /// Repeating countdown tick.
    SessionTick,
    /// One-shot reload completion.
    ReloadFinished,
    /// One-shot end of a target's flight animation.
    FlightFinished(TargetId),
}

impl Timer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timer::SessionTick => "session_tick",
            Timer::ReloadFinished => "reload_finished",
            Timer::FlightFinished(_) => "flight_finished",
        }
    }
}

/// Schedules timer callbacks on the host's event loop.
///
/// Callbacks are never run inline; the host delivers them later as separate
/// events on the same thread of control that drives the engine.
pub trait Scheduler {
    /// Fires `timer` once after `delay`. One-shot timers cannot be cancelled.
    fn schedule_once(&mut self, delay: Duration, timer: Timer);

    /// Fires `timer` every `period`, first after one full period.
    fn schedule_repeating(&mut self, period: Duration, timer: Timer);

    /// Stops a repeating timer. A firing already in flight must not be delivered.
    fn cancel_repeating(&mut self, timer: Timer);
}

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> SessionTime;
}
