//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the session or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{GameConfig, Outcome, Point, SessionCommand, SessionState};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::host::RuntimeClock;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    clock: RuntimeClock,
    config: GameConfig,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        clock: RuntimeClock,
        config: GameConfig,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            clock,
            config,
        }
    }

    /// Start a session from the menu or the end screen (Play / Play Again)
    pub async fn start_session(&self) -> Result<Outcome> {
        self.apply(SessionCommand::Start).await
    }

    /// Fire at an arena position
    pub async fn fire(&self, at: Point) -> Result<Outcome> {
        self.apply(SessionCommand::Fire(at)).await
    }

    /// Begin the fixed-delay reload
    pub async fn request_reload(&self) -> Result<Outcome> {
        self.apply(SessionCommand::RequestReload).await
    }

    async fn apply(&self, command: SessionCommand) -> Result<Outcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Apply {
                command,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current session state (read-only snapshot)
    pub async fn query_state(&self) -> Result<SessionState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Session` - Every command applied and its outcome
    /// - `Topic::Stage` - Sprites, flights, HUD and end screen updates
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut stage_rx = handle.subscribe(Topic::Stage);
    /// while let Ok(event) = stage_rx.recv().await {
    ///     // Redraw
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Session clock shared with the worker, for placing flying targets
    pub fn clock(&self) -> &RuntimeClock {
        &self.clock
    }

    /// Configuration the session was built with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
