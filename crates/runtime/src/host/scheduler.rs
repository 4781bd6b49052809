use std::collections::HashMap;
use std::time::Duration;

use game_core::{Scheduler, Timer};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// A timer firing on its way back to the session worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFired {
    pub timer: Timer,
    /// Generation of the repeating timer that produced this firing.
    /// `None` for one-shot timers.
    pub epoch: Option<u64>,
}

struct Repeating {
    epoch: u64,
    task: JoinHandle<()>,
}

/// Scheduler that spawns a tokio task per timer.
///
/// Firings are sent over a channel instead of running inline, so the worker
/// handles them one at a time like any other command. A cancelled repeating
/// timer may still have a firing queued; [`TokioScheduler::is_current`] lets
/// the worker drop it.
pub struct TokioScheduler {
    fired_tx: mpsc::UnboundedSender<TimerFired>,
    repeating: HashMap<Timer, Repeating>,
    next_epoch: u64,
}

impl TokioScheduler {
    pub fn new(fired_tx: mpsc::UnboundedSender<TimerFired>) -> Self {
        Self {
            fired_tx,
            repeating: HashMap::new(),
            next_epoch: 0,
        }
    }

    /// Whether a firing still belongs to a live timer.
    pub fn is_current(&self, fired: &TimerFired) -> bool {
        match fired.epoch {
            None => true,
            Some(epoch) => self
                .repeating
                .get(&fired.timer)
                .is_some_and(|live| live.epoch == epoch),
        }
    }

    pub fn is_repeating(&self, timer: Timer) -> bool {
        self.repeating.contains_key(&timer)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&mut self, delay: Duration, timer: Timer) {
        let fired_tx = self.fired_tx.clone();
        tokio::spawn(async move {
            time::sleep(delay).await;
            if fired_tx.send(TimerFired { timer, epoch: None }).is_err() {
                tracing::trace!(timer = timer.as_str(), "worker gone before one-shot timer fired");
            }
        });
    }

    fn schedule_repeating(&mut self, period: Duration, timer: Timer) {
        self.cancel_repeating(timer);

        let epoch = self.next_epoch;
        self.next_epoch += 1;

        let fired_tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let fired = TimerFired {
                    timer,
                    epoch: Some(epoch),
                };
                if fired_tx.send(fired).is_err() {
                    break;
                }
            }
        });

        self.repeating.insert(timer, Repeating { epoch, task });
    }

    fn cancel_repeating(&mut self, timer: Timer) {
        if let Some(live) = self.repeating.remove(&timer) {
            live.task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, live) in self.repeating.drain() {
            live.task.abort();
        }
    }
}
