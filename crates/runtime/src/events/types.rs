//! Event types for different topics.

use game_core::{Flight, Hud, Outcome, SessionCommand, SessionTime, Target, TargetId};
use serde::{Deserialize, Serialize};

/// Events describing what the session did with each command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A command (user input or timer) went through the engine
    CommandApplied {
        command: SessionCommand,
        outcome: Outcome,
        at: SessionTime,
    },
}

/// Scene updates, one per call the engine makes on its stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StageEvent {
    SpriteSpawned { target: Target },
    SpriteRemoved { id: TargetId },
    FlightStarted { id: TargetId, flight: Flight },
    HudUpdated(Hud),
    /// Play is over; show the final score with Play Again and Quit
    EndScreenShown { final_score: u32 },
    Cleared,
}
