//! HUD line with score, time, and ammo.
use game_core::Hud;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, hud: &Hud, theme: &RatatuiTheme) {
    let ammo_style = match hud.ammo {
        Some(0) => Style::default().fg(Color::LightRed),
        Some(_) => Style::default().fg(Color::LightCyan),
        None => Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    };

    let line = Line::from(vec![
        Span::styled(
            hud.score_label(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(hud.time_label(), theme.hud_time(hud.time_remaining)),
        Span::raw("   "),
        Span::styled(hud.ammo_label(), ammo_style),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
