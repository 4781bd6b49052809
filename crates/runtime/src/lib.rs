//! Runtime orchestration for the shooting session.
//!
//! This crate owns the authoritative [`game_core::SessionState`] on a
//! background worker, drives its timers on tokio, and publishes everything
//! the engine draws as events. Consumers embed [`Runtime`] and interact with
//! the session through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`host`] implements the `game-core` host traits on top of tokio
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod host;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, SessionEvent, StageEvent, Topic};
pub use host::RuntimeClock;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
