//! Widgets composing the terminal UI.
pub mod arena;
pub mod hud;
pub mod menu;
pub mod messages;
