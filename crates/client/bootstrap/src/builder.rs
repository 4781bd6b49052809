//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};
use runtime::{Runtime, RuntimeConfig};

use crate::config::ClientConfig;

/// Builder that assembles the runtime and configuration for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let game_config = self.config.session.game_config();
        let seed = self.config.session.seed_or_default();

        let runtime_config = RuntimeConfig {
            game_config,
            seed,
            event_buffer_size: self.config.channels.event_buffer,
            command_buffer_size: self.config.channels.command_buffer,
        };

        let runtime = Runtime::start(runtime_config)
            .await
            .context("failed to start the session runtime")?;

        tracing::info!(seed, "runtime ready");

        Ok(RuntimeSetup {
            config: self.config,
            seed,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    /// Seed actually used, so a run can be replayed with `GAME_SEED`.
    pub seed: u64,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionSettings;

    #[tokio::test]
    async fn builds_with_fixed_seed() {
        let mut config = ClientConfig::default();
        config.session = SessionSettings {
            seed: Some(1234),
            duration_secs: Some(10),
            ammo_capacity: Some(3),
        };

        let setup = RuntimeBuilder::new(config).build().await.unwrap();
        assert_eq!(setup.seed, 1234);

        let state = setup.runtime.handle().query_state().await.unwrap();
        assert_eq!(state.game_seed, 1234);
        assert_eq!(state.ammo, 3);
        assert_eq!(state.time_remaining, 10);
    }

    #[tokio::test]
    async fn rejects_invalid_rules() {
        let mut config = ClientConfig::default();
        config.session.duration_secs = Some(0);
        assert!(RuntimeBuilder::new(config).build().await.is_err());
    }
}
