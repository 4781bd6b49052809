//! Traits connecting the session rules to their host.
//!
//! The engine consumes four services it does not implement itself: a
//! [`Stage`] to draw into, a [`Scheduler`] for timer callbacks, a [`Clock`]
//! and an [`RngOracle`]. [`GameEnv`] bundles them with the configuration so
//! each handler receives everything through one argument.
mod rng;
mod scheduler;
mod stage;

pub use rng::{PcgRng, RngOracle, compute_seed};
pub use scheduler::{Clock, Scheduler, Timer};
pub use stage::{NullStage, Stage};

use crate::config::GameConfig;

/// Host services handed to every engine handler.
pub struct GameEnv<'a> {
    pub config: &'a GameConfig,
    pub rng: &'a dyn RngOracle,
    pub clock: &'a dyn Clock,
    pub stage: &'a mut dyn Stage,
    pub scheduler: &'a mut dyn Scheduler,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        config: &'a GameConfig,
        rng: &'a dyn RngOracle,
        clock: &'a dyn Clock,
        stage: &'a mut dyn Stage,
        scheduler: &'a mut dyn Scheduler,
    ) -> Self {
        Self {
            config,
            rng,
            clock,
            stage,
            scheduler,
        }
    }
}
