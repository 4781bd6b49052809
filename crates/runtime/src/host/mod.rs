//! Tokio-backed implementations of the `game-core` host traits.
//!
//! [`HostServices`] bundles the clock, the event-publishing stage and the
//! timer scheduler with the game configuration, and lends them to the engine
//! as a [`game_core::GameEnv`] for one command at a time.
mod clock;
mod scheduler;
mod stage;

use game_core::{GameConfig, GameEnv, PcgRng};

pub use clock::RuntimeClock;
pub use scheduler::{TimerFired, TokioScheduler};
pub use stage::BusStage;

/// Everything the engine needs from its host, owned by the session worker
pub struct HostServices {
    pub(crate) config: GameConfig,
    pub(crate) clock: RuntimeClock,
    pub(crate) stage: BusStage,
    pub(crate) scheduler: TokioScheduler,
    pub(crate) rng: PcgRng,
}

impl HostServices {
    pub fn new(
        config: GameConfig,
        clock: RuntimeClock,
        stage: BusStage,
        scheduler: TokioScheduler,
    ) -> Self {
        Self {
            config,
            clock,
            stage,
            scheduler,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Lends the services to the engine for one command
    pub fn as_game_env(&mut self) -> GameEnv<'_> {
        GameEnv::new(
            &self.config,
            &self.rng,
            &self.clock,
            &mut self.stage,
            &mut self.scheduler,
        )
    }

    pub fn clock(&self) -> &RuntimeClock {
        &self.clock
    }

    pub fn scheduler(&self) -> &TokioScheduler {
        &self.scheduler
    }
}
