//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines, 0 hides it (default: 5)
    /// - `CLI_AIM_STEP` - Cells the crosshair moves per arrow key (default: 2)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = if height == 0 { 0 } else { height.max(3) };
        }
        if let Some(step) = read_env::<u16>("CLI_AIM_STEP") {
            config.ui.aim_step = step.max(1);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Crosshair movement per arrow key, in terminal cells.
    pub aim_step: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 5,
            aim_step: 2,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
