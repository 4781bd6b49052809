//! UI rendering entry point composing all widgets.
use anyhow::Result;
use client_frontend_core::{MessageLog, ViewModel};
use game_core::SessionTime;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, viewport::Viewport, widgets},
    state::{AppMode, AppState},
};

const HUD_HEIGHT: u16 = 3;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
    /// Clock reading used to place flying sprites.
    pub now: SessionTime,
}

/// Screen regions from the last frame, used to hit-test mouse input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiLayout {
    pub hud: Rect,
    pub arena: Rect,
    pub messages: Rect,
}

impl UiLayout {
    pub fn compute(area: Rect, message_panel_height: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HUD_HEIGHT),           // HUD
                Constraint::Min(0),                       // Arena
                Constraint::Length(message_panel_height), // Messages
            ])
            .split(area);

        Self {
            hud: chunks[0],
            arena: chunks[1],
            messages: chunks[2],
        }
    }

    /// Arena cells inside the border.
    pub fn viewport(&self, view_model: &ViewModel) -> Viewport {
        let inner = Block::default().borders(Borders::ALL).inner(self.arena);
        Viewport::new(inner, view_model.arena_width, view_model.arena_height)
    }

    pub fn menu(&self) -> widgets::menu::MenuLayout {
        widgets::menu::layout(self.arena)
    }
}

/// Draws one frame and returns the layout it used.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<UiLayout> {
    let mut layout = UiLayout::default();
    terminal.draw(|frame| layout = draw(frame, ctx))?;
    Ok(layout)
}

fn draw(frame: &mut Frame, ctx: &RenderContext) -> UiLayout {
    let theme = RatatuiTheme::new();
    let layout = UiLayout::compute(frame.area(), ctx.message_panel_height);

    widgets::hud::render(frame, layout.hud, &ctx.view_model.hud, &theme);

    let crosshair = match ctx.app_state.mode {
        AppMode::Playing => ctx.app_state.crosshair,
        _ => None,
    };
    widgets::arena::render(
        frame,
        layout.arena,
        ctx.view_model,
        crosshair,
        ctx.now,
        &theme,
    );

    if ctx.app_state.mode.has_menu() {
        widgets::menu::render(frame, layout.arena, &ctx.app_state.mode, &theme);
    }

    widgets::messages::render(frame, layout.messages, ctx.messages, &theme);

    layout
}
