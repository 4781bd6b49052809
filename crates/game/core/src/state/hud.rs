//! Display strings exposed to the presentation layer.
use std::fmt;

use super::SessionState;

/// Snapshot of the three HUD labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hud {
    pub score: u32,
    pub time_remaining: i32,
    /// `None` while a reload is in flight.
    pub ammo: Option<u32>,
}

impl Hud {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            score: state.score,
            time_remaining: state.time_remaining,
            ammo: (!state.is_reloading()).then_some(state.ammo),
        }
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn time_label(&self) -> String {
        format!("Time: {}", self.time_remaining)
    }

    pub fn ammo_label(&self) -> String {
        match self.ammo {
            Some(ammo) => format!("Ammo: {ammo}"),
            None => "Ammo: Reloading...".to_string(),
        }
    }
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.score_label(),
            self.time_label(),
            self.ammo_label()
        )
    }
}

/// Label shown on the end screen.
pub fn final_score_label(score: u32) -> String {
    format!("Final Score: {score}")
}
