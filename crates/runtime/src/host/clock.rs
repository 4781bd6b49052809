use std::sync::Arc;

use game_core::{Clock, SessionTime};
use tokio::time::Instant;

/// Milliseconds since the runtime started, on tokio's clock.
///
/// Clones share the same origin, so a frontend holding one computes the same
/// flight positions the worker uses for hit-testing.
#[derive(Clone, Debug)]
pub struct RuntimeClock {
    origin: Arc<Instant>,
}

impl RuntimeClock {
    pub fn start() -> Self {
        Self {
            origin: Arc::new(Instant::now()),
        }
    }
}

impl Default for RuntimeClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for RuntimeClock {
    fn now(&self) -> SessionTime {
        let elapsed = self.origin.elapsed().as_millis();
        SessionTime::from_millis(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn follows_tokio_time() {
        let clock = RuntimeClock::start();
        let shared = clock.clone();
        assert_eq!(clock.now(), SessionTime::ZERO);

        tokio::time::advance(Duration::from_millis(1_250)).await;

        assert_eq!(clock.now(), SessionTime::from_millis(1_250));
        assert_eq!(shared.now(), clock.now());
    }
}
