//! Session worker that owns the authoritative [`game_core::SessionState`].
//!
//! Receives commands from [`crate::RuntimeHandle`] and timer firings from the
//! [`TokioScheduler`], applies both through [`game_core::SessionEngine`], and
//! publishes the outcome of each to the EventBus.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace};

use game_core::{Clock, Outcome, SessionCommand, SessionEngine, SessionState};

use crate::events::{Event, EventBus, SessionEvent};
use crate::host::{HostServices, TimerFired};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Apply a user command (start, fire, reload) and report the outcome.
    Apply {
        command: SessionCommand,
        reply: oneshot::Sender<Outcome>,
    },
    /// Query the current session state (read-only).
    QueryState {
        reply: oneshot::Sender<SessionState>,
    },
}

/// Background task that processes session commands and timers.
pub struct SessionWorker {
    state: SessionState,
    host: HostServices,
    command_rx: mpsc::Receiver<Command>,
    timer_rx: mpsc::UnboundedReceiver<TimerFired>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(
        state: SessionState,
        host: HostServices,
        command_rx: mpsc::Receiver<Command>,
        timer_rx: mpsc::UnboundedReceiver<TimerFired>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::session",
            seed = state.game_seed,
            duration_secs = host.config.session.duration_secs,
            ammo_capacity = host.config.session.ammo_capacity,
            "SessionWorker initialized"
        );

        Self {
            state,
            host,
            command_rx,
            timer_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every [`crate::RuntimeHandle`] is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                biased;
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(fired) = self.timer_rx.recv() => {
                    self.handle_timer(fired);
                }
            }
        }

        debug!(target: "runtime::session", "command channel closed, worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Apply { command, reply } => {
                let outcome = self.apply(command);
                if reply.send(outcome).is_err() {
                    debug!("Apply reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_timer(&mut self, fired: TimerFired) {
        if !self.host.scheduler().is_current(&fired) {
            trace!(
                target: "runtime::session",
                timer = fired.timer.as_str(),
                "dropping firing of a cancelled timer"
            );
            return;
        }

        self.apply(SessionCommand::from(fired.timer));
    }

    /// The only place that runs the engine. Every command, whatever its
    /// source, is logged and published here.
    fn apply(&mut self, command: SessionCommand) -> Outcome {
        let outcome = {
            let mut env = self.host.as_game_env();
            SessionEngine::new(&mut self.state).handle(&mut env, command)
        };
        let at = self.host.clock().now();

        match &outcome {
            Outcome::Ignored(reason) => debug!(
                target: "runtime::session",
                command = command.as_str(),
                reason = reason.as_str(),
                "command ignored"
            ),
            _ => debug!(
                target: "runtime::session",
                command = command.as_str(),
                score = self.state.score,
                ammo = self.state.ammo,
                time_remaining = self.state.time_remaining,
                targets = self.state.targets.len(),
                "command applied"
            ),
        }
        if let Outcome::Ticked(tick) = &outcome
            && tick.ended
        {
            info!(
                target: "runtime::session",
                final_score = self.state.score,
                "session ended"
            );
        }

        self.event_bus
            .publish(Event::Session(SessionEvent::CommandApplied {
                command,
                outcome: outcome.clone(),
                at,
            }));

        outcome
    }
}
