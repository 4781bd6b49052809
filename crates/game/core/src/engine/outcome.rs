//! Results reported by the engine handlers.

use crate::state::{Target, TargetId};

/// Why an event was dropped without touching the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    /// The session is in the menu or already over.
    NotPlaying,
    /// Start requested while a session is running.
    AlreadyPlaying,
    OutOfAmmo,
    /// Fire requested during a reload.
    Reloading,
    /// Reload requested during a reload.
    AlreadyReloading,
    /// Reload completion without a reload in flight.
    NotReloading,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Result of an accepted shot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// The first target under the crosshair was removed.
    Hit { target: Target, points: u32 },
    Miss,
}

/// Result of one countdown tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickOutcome {
    pub spawned_static: Vec<TargetId>,
    pub spawned_flying: Option<TargetId>,
    pub time_remaining: i32,
    /// The countdown reached zero and the session ended on this tick.
    pub ended: bool,
}

/// Outcome of any engine handler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Started,
    Ticked(TickOutcome),
    Fired(FireOutcome),
    ReloadStarted,
    Reloaded,
    /// A flight animation finished; `removed` is false when the target was
    /// already gone (shot down, or cleared by a restart).
    FlightEnded { target: TargetId, removed: bool },
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}
