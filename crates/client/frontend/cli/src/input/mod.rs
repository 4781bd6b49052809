//! Input processing for the CLI client.
//!
//! This module owns the keyboard and mouse mapping so the rest of the
//! application can remain agnostic about concrete bindings or the specifics
//! of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::state::AppMode;

pub mod forwarder;
pub use forwarder::{UserCommand, spawn_forwarder};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the menu highlight.
    ToggleSelection,
    /// Activate the highlighted menu button.
    Confirm,
    /// Start a session directly from a menu.
    Start,
    Reload,
    /// Move the crosshair by whole cells.
    Aim { dx: i16, dy: i16 },
    /// Fire at the crosshair.
    Fire,
    /// No meaningful command was produced.
    None,
}

/// High-level outcome of processing a mouse event, in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseAction {
    /// Primary button pressed.
    Click { column: u16, row: u16 },
    /// Pointer moved, with or without the primary button held.
    Hover { column: u16, row: u16 },
    None,
}

/// Translates terminal events into UI commands.
pub struct InputHandler {
    aim_step: i16,
}

impl InputHandler {
    pub fn new(aim_step: u16) -> Self {
        Self {
            aim_step: i16::try_from(aim_step).unwrap_or(i16::MAX),
        }
    }

    /// Converts a raw key event into a higher-level command for the current mode.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Menu { .. } | AppMode::Ended { .. } => self.menu_key(key),
            AppMode::Playing => self.play_key(key),
        }
    }

    fn menu_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                KeyAction::ToggleSelection
            }
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Confirm,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'j' | 'k' | 'w' | 's' => KeyAction::ToggleSelection,
                'p' => KeyAction::Start,
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn play_key(&self, key: KeyEvent) -> KeyAction {
        let step = self.aim_step;
        match key.code {
            KeyCode::Left => KeyAction::Aim { dx: -step, dy: 0 },
            KeyCode::Right => KeyAction::Aim { dx: step, dy: 0 },
            KeyCode::Up => KeyAction::Aim { dx: 0, dy: -step },
            KeyCode::Down => KeyAction::Aim { dx: 0, dy: step },
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Fire,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'r' => KeyAction::Reload,
                'f' => KeyAction::Fire,
                'h' | 'a' => KeyAction::Aim { dx: -step, dy: 0 },
                'l' | 'd' => KeyAction::Aim { dx: step, dy: 0 },
                'k' | 'w' => KeyAction::Aim { dx: 0, dy: -step },
                'j' | 's' => KeyAction::Aim { dx: 0, dy: step },
                'q' => KeyAction::Quit,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    /// Only the primary button fires; other buttons are ignored.
    pub fn handle_mouse(&self, mouse: MouseEvent) -> MouseAction {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => MouseAction::Click { column, row },
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                MouseAction::Hover { column, row }
            }
            _ => MouseAction::None,
        }
    }
}
