//! Application state for mode management and UI context.

use client_frontend_core::Overlay;
use game_core::Point;

/// Button on the title menu or the end screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuChoice {
    /// "Play" on the title menu, "Play Again" on the end screen.
    #[default]
    Play,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 2] = [MenuChoice::Play, MenuChoice::Quit];

    pub fn toggled(self) -> Self {
        match self {
            MenuChoice::Play => MenuChoice::Quit,
            MenuChoice::Quit => MenuChoice::Play,
        }
    }
}

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Title menu before the first session.
    Menu { selected: MenuChoice },
    /// Session running; clicks fire.
    Playing,
    /// End screen with the final score.
    Ended {
        final_score: u32,
        selected: MenuChoice,
    },
}

impl AppMode {
    pub fn selected(&self) -> Option<MenuChoice> {
        match self {
            AppMode::Menu { selected } | AppMode::Ended { selected, .. } => Some(*selected),
            AppMode::Playing => None,
        }
    }

    pub fn has_menu(&self) -> bool {
        self.selected().is_some()
    }
}

/// Mutable application state tracking current mode and crosshair.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Crosshair in arena coordinates; `None` until the pointer is seen.
    pub crosshair: Option<Point>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Menu {
                selected: MenuChoice::Play,
            },
            crosshair: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows the overlay the runtime last drew. Returns true if the mode changed.
    pub fn sync_with(&mut self, overlay: Overlay) -> bool {
        let next = match (overlay, self.mode) {
            (Overlay::Menu, AppMode::Menu { .. }) => self.mode,
            (Overlay::Menu, _) => AppMode::Menu {
                selected: MenuChoice::Play,
            },
            (Overlay::None, _) => AppMode::Playing,
            (Overlay::EndScreen { final_score }, AppMode::Ended { selected, .. }) => {
                AppMode::Ended {
                    final_score,
                    selected,
                }
            }
            (Overlay::EndScreen { final_score }, _) => AppMode::Ended {
                final_score,
                selected: MenuChoice::Play,
            },
        };
        let changed = next != self.mode;
        self.mode = next;
        changed
    }

    /// Moves the menu highlight. No effect while playing.
    pub fn toggle_selection(&mut self) {
        match &mut self.mode {
            AppMode::Menu { selected } | AppMode::Ended { selected, .. } => {
                *selected = selected.toggled();
            }
            AppMode::Playing => {}
        }
    }

    pub fn select(&mut self, choice: MenuChoice) {
        match &mut self.mode {
            AppMode::Menu { selected } | AppMode::Ended { selected, .. } => *selected = choice,
            AppMode::Playing => {}
        }
    }

    /// Moves the crosshair, clamped to the arena.
    pub fn aim_at(&mut self, point: Point, arena_width: f64, arena_height: f64) {
        self.crosshair = Some(Point::new(
            point.x.clamp(0.0, arena_width),
            point.y.clamp(0.0, arena_height),
        ));
    }
}
