//! Deterministic rules for a timed target-shooting session.
//!
//! `game-core` defines the session state machine, target placement and
//! scoring, and exposes pure APIs with no I/O. All state mutation flows
//! through [`engine::SessionEngine`]; drawing, timers, time and randomness
//! are reached through the traits in [`env`] so hosts can supply their own.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::{ArenaConfig, GameConfig, ScoringConfig, SessionConfig, TargetConfig};
pub use engine::{
    FireOutcome, IgnoreReason, Outcome, SessionCommand, SessionEngine, TickOutcome,
};
pub use env::{
    Clock, GameEnv, NullStage, PcgRng, RngOracle, Scheduler, Stage, Timer, compute_seed,
};
pub use error::ConfigError;
pub use state::{
    Bounds, Flight, Hud, Point, ReloadState, SessionPhase, SessionState, SessionTime, SpriteKind,
    Target, TargetId, TargetList, ease_both, final_score_label,
};
