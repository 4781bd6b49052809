//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use runtime::{RuntimeHandle, Topic};

use crate::{
    config::CliConfig,
    event::EventLoop,
    input::{UserCommand, spawn_forwarder},
    presentation::terminal,
};
use client_frontend_core::{EventConsumer, Frontend, FrontendConfig, SessionEventConsumer};

/// Terminal frontend; owns only UI configuration.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI client starting...");

        // Subscribe before anything can be submitted so no draw is missed.
        let subscriptions = handle.subscribe_multiple(&[Topic::Session, Topic::Stage]);

        let mut consumer = SessionEventConsumer::new(
            handle.config(),
            self.frontend_config.messages.capacity,
        );
        consumer
            .message_log_mut()
            .push_text("Welcome to Chicken Hunt. Click Play to start.");

        let (tx_input, rx_input) =
            mpsc::channel::<UserCommand>(self.frontend_config.channels.input_buffer);
        let forwarder = spawn_forwarder(handle.clone(), rx_input);

        let event_loop = EventLoop::new(
            subscriptions,
            tx_input,
            consumer,
            self.cli_config.clone(),
            handle.clock().clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        // The loop owned the only sender; the forwarder drains and stops.
        if let Err(e) = forwarder.await {
            tracing::warn!("Input forwarder ended abnormally: {}", e);
        }

        terminal::restore()?;
        tracing::info!("CLI client exiting");

        result.map(|_consumer| ())
    }
}
