//! Message panel listing recent session messages, newest at the bottom.
use client_frontend_core::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &RatatuiTheme) {
    if area.height == 0 {
        return;
    }

    let block = Block::default().borders(Borders::ALL).title("Messages");
    let visible = usize::from(block.inner(area).height);

    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.style_message(entry.level))))
        .collect();
    lines.reverse();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
