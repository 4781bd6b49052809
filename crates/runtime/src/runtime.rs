//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/timer/event channels,
//! and exposes a builder-based API for clients to drive the session.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::{GameConfig, SessionState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::host::{BusStage, HostServices, RuntimeClock, TokioScheduler};
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for every random draw of the session.
    pub seed: u64,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: 0,
            event_buffer_size: 256,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the session
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Build a runtime from a config with no further customisation
    pub async fn start(config: RuntimeConfig) -> Result<Runtime> {
        Self::builder().config(config).build().await
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker, which stops once every handle clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<SessionState>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the game rules
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Set the RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Provide initial session state (defaults to the menu)
    pub fn initial_state(mut self, state: SessionState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the runtime
    ///
    /// Must be called inside a tokio runtime; the worker is spawned here.
    pub async fn build(self) -> Result<Runtime> {
        let RuntimeConfig {
            game_config,
            seed,
            event_buffer_size,
            command_buffer_size,
        } = self.config;

        game_config.validate()?;

        let state = self
            .state
            .unwrap_or_else(|| SessionState::new(&game_config, seed));

        let (command_tx, command_rx) = mpsc::channel::<Command>(command_buffer_size.max(1));
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let event_bus = EventBus::with_capacity(event_buffer_size);
        let clock = RuntimeClock::start();

        let host = HostServices::new(
            game_config.clone(),
            clock.clone(),
            BusStage::new(event_bus.clone()),
            TokioScheduler::new(timer_tx),
        );

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), clock, game_config);

        let worker = SessionWorker::new(state, host, command_rx, timer_rx, event_bus);
        let worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
