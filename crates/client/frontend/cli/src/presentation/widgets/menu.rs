//! Title menu and end screen drawn over the arena.
//!
//! Button rectangles come from [`layout`], which the input handlers share with
//! the renderer so clicks land on exactly what was drawn.
use game_core::final_score_label;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    presentation::theme::RatatuiTheme,
    state::{AppMode, MenuChoice},
};

const POPUP_WIDTH: u16 = 32;
const POPUP_HEIGHT: u16 = 9;
const BUTTON_WIDTH: u16 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub popup: Rect,
    /// Indexed like [`MenuChoice::ALL`].
    pub buttons: [Rect; 2],
}

impl MenuLayout {
    /// Button under a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<MenuChoice> {
        MenuChoice::ALL
            .into_iter()
            .zip(self.buttons)
            .find(|(_, rect)| rect.contains((column, row).into()))
            .map(|(choice, _)| choice)
    }
}

pub fn layout(area: Rect) -> MenuLayout {
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let button_width = BUTTON_WIDTH.min(popup.width.saturating_sub(2));
    let x = popup.x + (popup.width - button_width) / 2;
    let button = |offset: u16| Rect::new(x, popup.y + offset, button_width, 1).intersection(popup);

    MenuLayout {
        popup,
        buttons: [button(4), button(6)],
    }
}

pub fn render(frame: &mut Frame, area: Rect, mode: &AppMode, theme: &RatatuiTheme) {
    let (title, play_label, selected) = match *mode {
        AppMode::Menu { selected } => ("Chicken Hunt".to_string(), "Play", selected),
        AppMode::Ended {
            final_score,
            selected,
        } => (final_score_label(final_score), "Play Again", selected),
        AppMode::Playing => return,
    };

    let menu = layout(area);
    frame.render_widget(Clear, menu.popup);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(menu.popup);
    frame.render_widget(block, menu.popup);

    let heading = Paragraph::new(vec![
        Line::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw("Enter/click to choose"),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, Rect::new(inner.x, inner.y, inner.width, inner.height.min(2)));

    for (choice, rect) in MenuChoice::ALL.into_iter().zip(menu.buttons) {
        if rect.is_empty() {
            continue;
        }
        let label = match choice {
            MenuChoice::Play => play_label,
            MenuChoice::Quit => "Quit",
        };
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(theme.button(choice == selected));
        frame.render_widget(button, rect);
    }
}
