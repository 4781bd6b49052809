//! Ratatui presentation layer: terminal setup, layout, and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod viewport;
pub mod widgets;
