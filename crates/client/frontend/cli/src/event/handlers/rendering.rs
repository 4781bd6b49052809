//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;
use game_core::Clock;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render current state and remember the layout for mouse hit-testing.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: self.consumer.view_model(),
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
            now: self.clock.now(),
        };

        self.layout = ui::render(terminal, &ctx)?;
        Ok(())
    }
}
