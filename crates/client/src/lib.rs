//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Session rules, timers, and event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! - **Client**: Composition root, lifecycle management, layer coordination
//! - **Runtime**: Session state machine and event emission
//! - **Frontend**: User interaction, event consumption, rendering (via RuntimeHandle only)

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::{Context, Result};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an already started runtime and a frontend
/// 2. `Client::run()` transfers control to the frontend until the user quits
/// 3. The runtime is shut down once the frontend returns
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend, then stop the runtime worker.
    ///
    /// The frontend error, if any, takes precedence over a shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;

        // Drop the frontend first so no handle clone outlives the runtime.
        drop(frontend);
        let shutdown_result = runtime
            .shutdown()
            .await
            .context("runtime did not shut down cleanly");

        frontend_result?;
        shutdown_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use game_core::Point;
    use runtime::{Runtime, RuntimeConfig, RuntimeHandle};

    /// Plays a few commands headlessly.
    struct ScriptedFrontend;

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            handle.start_session().await?;
            handle.fire(Point::new(-100.0, -100.0)).await?;
            let state = handle.query_state().await?;
            anyhow::ensure!(state.ammo == 9, "expected one shot spent");
            Ok(())
        }
    }

    struct FailingFrontend;

    #[async_trait]
    impl Frontend for FailingFrontend {
        async fn run(&mut self, _handle: RuntimeHandle) -> Result<()> {
            anyhow::bail!("terminal unavailable")
        }
    }

    #[tokio::test]
    async fn runs_frontend_then_shuts_down() {
        let runtime = Runtime::start(RuntimeConfig::default()).await.unwrap();
        let client = Client::builder()
            .runtime(runtime)
            .frontend(ScriptedFrontend)
            .build()
            .unwrap();

        client.run().await.unwrap();
    }

    #[tokio::test]
    async fn frontend_errors_are_returned() {
        let runtime = Runtime::start(RuntimeConfig::default()).await.unwrap();
        let client = Client::builder()
            .runtime(runtime)
            .frontend(FailingFrontend)
            .build()
            .unwrap();

        let err = client.run().await.unwrap_err();
        assert!(err.to_string().contains("terminal unavailable"));
    }
}
