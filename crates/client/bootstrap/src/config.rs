//! Client runtime configuration structures and loaders.
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::GameConfig;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub session: SessionSettings,
    pub channels: ChannelConfig,
    /// Identifier for this run's log directory (default: timestamped).
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub const fn new(session: SessionSettings, channels: ChannelConfig) -> Self {
        Self {
            session,
            channels,
            session_id: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SEED` - RNG seed (default: derived from the current time)
    /// - `GAME_SESSION_SECONDS` - Countdown length (default: 30)
    /// - `GAME_AMMO_CAPACITY` - Magazine size (default: 10)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `RUNTIME_COMMAND_BUFFER` - Command channel size (default: 32)
    /// - `RUNTIME_EVENT_BUFFER` - Broadcast capacity per topic (default: 256)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.session.seed = read_env::<u64>("GAME_SEED");
        config.session.duration_secs = read_env::<i32>("GAME_SESSION_SECONDS");
        config.session.ammo_capacity = read_env::<u32>("GAME_AMMO_CAPACITY");

        if let Some(capacity) = read_env::<usize>("RUNTIME_COMMAND_BUFFER") {
            config.channels.command_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("RUNTIME_EVENT_BUFFER") {
            config.channels.event_buffer = capacity.max(1);
        }

        // Session ID (optional)
        config.session_id = env::var("GAME_SESSION_ID").ok();

        config
    }

    /// Session identifier, generating a timestamped one when none was given.
    pub fn session_id_or_default(&self) -> String {
        self.session_id
            .clone()
            .unwrap_or_else(|| format!("session_{}", unix_time().as_secs()))
    }
}

/// Overrides for the game rules. `None` keeps the built-in default.
#[derive(Clone, Debug, Default)]
pub struct SessionSettings {
    pub seed: Option<u64>,
    pub duration_secs: Option<i32>,
    pub ammo_capacity: Option<u32>,
}

impl SessionSettings {
    pub fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(duration_secs) = self.duration_secs {
            config = config.with_duration_secs(duration_secs);
        }
        if let Some(ammo_capacity) = self.ammo_capacity {
            config = config.with_ammo_capacity(ammo_capacity);
        }
        config
    }

    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let now = unix_time();
            now.as_secs() ^ u64::from(now.subsec_nanos()).rotate_left(32)
        })
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub command_buffer: usize,
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            command_buffer: 32,
            event_buffer: 256,
        }
    }
}

fn unix_time() -> std::time::Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let settings = SessionSettings {
            seed: Some(9),
            duration_secs: Some(45),
            ammo_capacity: None,
        };
        let config = settings.game_config();
        assert_eq!(config.session.duration_secs, 45);
        assert_eq!(config.session.ammo_capacity, 10);
        assert_eq!(settings.seed_or_default(), 9);
    }

    #[test]
    fn explicit_session_id_wins() {
        let mut config = ClientConfig::default();
        assert!(config.session_id_or_default().starts_with("session_"));
        config.session_id = Some("practice".into());
        assert_eq!(config.session_id_or_default(), "practice");
    }
}
