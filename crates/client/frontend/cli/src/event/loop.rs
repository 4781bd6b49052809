//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Runtime event consumption (stage draws and command outcomes)
//! - Keyboard and mouse input, forwarded to the runtime as commands
//! - Rendering, including per-frame redraws while a flyer is in the air

use std::collections::HashMap;

use anyhow::Result;
use game_core::Point;
use runtime::{Event as RuntimeEvent, RuntimeClock, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError, mpsc},
    time::{self, Duration},
};

use crate::{
    config::CliConfig,
    input::{InputHandler, UserCommand},
    presentation::{terminal::Tui, ui::UiLayout},
    state::{AppMode, AppState},
};
use client_frontend_core::EventConsumer;

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the consumer and the CLI's own UI state.
///
/// The consumer holds the view model rebuilt from stage events; the loop only
/// adds what the terminal needs on top: the menu highlight, the crosshair, and
/// the layout of the last frame for mouse hit-testing.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) tx_input: mpsc::Sender<UserCommand>,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
    /// Shared with the runtime so flyers are drawn where they are hit-tested.
    pub(crate) clock: RuntimeClock,
    pub(crate) layout: UiLayout,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        tx_input: mpsc::Sender<UserCommand>,
        consumer: C,
        cli_config: CliConfig,
        clock: RuntimeClock,
    ) -> Self {
        Self {
            subscriptions,
            tx_input,
            input: InputHandler::new(cli_config.ui.aim_step),
            consumer,
            app_state: AppState::new(),
            cli_config,
            clock,
            layout: UiLayout::default(),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut stage_rx = self.subscriptions.remove(&Topic::Stage);
        let mut session_rx = self.subscriptions.remove(&Topic::Session);

        loop {
            tokio::select! {
                result = recv(&mut stage_rx) => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                result = recv(&mut session_rx) => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                    self.handle_frame_tick(terminal)?;
                }
            }
        }

        Ok(self.consumer)
    }

    /// Feeds a runtime event to the consumer and follows overlay changes.
    fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);
                let mode_changed = self
                    .app_state
                    .sync_with(self.consumer.view_model().overlay);

                if mode_changed && self.app_state.mode == AppMode::Playing {
                    self.center_crosshair_if_unset();
                }

                if impact.requires_redraw || mode_changed {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                Ok(false)
            }
        }
    }

    /// Redraws while something is moving so flights animate smoothly.
    fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<()> {
        if self.app_state.mode == AppMode::Playing && self.consumer.view_model().has_flying() {
            self.render(terminal)?;
        }
        Ok(())
    }

    fn center_crosshair_if_unset(&mut self) {
        if self.app_state.crosshair.is_some() {
            return;
        }
        let view = self.consumer.view_model();
        let (width, height) = (view.arena_width, view.arena_height);
        self.app_state
            .aim_at(Point::new(width / 2.0, height / 2.0), width, height);
    }
}

/// Receives from an optional subscription; pends forever when absent.
async fn recv(
    rx: &mut Option<broadcast::Receiver<RuntimeEvent>>,
) -> Result<RuntimeEvent, RecvError> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
