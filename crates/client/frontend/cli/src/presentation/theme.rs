//! Colors and glyphs for the terminal UI.
use client_frontend_core::MessageLevel;
use game_core::SpriteKind;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Fill glyph and style for a sprite's body.
    pub fn sprite(&self, kind: SpriteKind) -> (char, Style) {
        match kind {
            SpriteKind::Perched => ('o', Style::default().fg(Color::Black).bg(Color::Yellow)),
            SpriteKind::Pecking => ('v', Style::default().fg(Color::Black).bg(Color::LightYellow)),
            SpriteKind::Strutting => ('>', Style::default().fg(Color::Black).bg(Color::Rgb(230, 160, 60))),
            SpriteKind::FlyingLeft => (
                '<',
                Style::default()
                    .fg(Color::White)
                    .bg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            SpriteKind::FlyingRight => (
                '>',
                Style::default()
                    .fg(Color::White)
                    .bg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    pub fn sky(&self) -> Style {
        Style::default().bg(Color::Rgb(110, 170, 220))
    }

    pub fn ground(&self) -> Style {
        Style::default().bg(Color::Rgb(70, 120, 50))
    }

    pub fn crosshair(&self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn hud_time(&self, remaining: i32) -> Style {
        let color = if remaining <= 5 {
            Color::LightRed
        } else {
            Color::Yellow
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flyers_point_where_they_head() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.sprite(SpriteKind::FlyingLeft).0, '<');
        assert_eq!(theme.sprite(SpriteKind::FlyingRight).0, '>');
    }
}
