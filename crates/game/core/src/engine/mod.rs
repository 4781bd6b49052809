//! Session state machine.
//!
//! The [`SessionEngine`] is the only writer of [`SessionState`]. Each host
//! event maps to one named handler; [`SessionEngine::handle`] routes a
//! [`SessionCommand`] to it. Handlers never fail: events that are not valid
//! in the current state come back as [`Outcome::Ignored`] and change nothing.
//!
//! ```text
//! Menu ──start──▶ Playing ──countdown hits 0──▶ Ended ──start──▶ Playing
//!                 (Ready ⇄ Reloading)
//! ```

mod command;
mod outcome;
pub mod scoring;
pub mod spawn;


pub use command::SessionCommand;
pub use outcome::{FireOutcome, IgnoreReason, Outcome, TickOutcome};

use crate::env::{GameEnv, Timer};
use crate::state::{Point, ReloadState, SessionPhase, SessionState, TargetId};

/// Applies host events to a borrowed [`SessionState`].
pub struct SessionEngine<'a> {
    state: &'a mut SessionState,
}

impl<'a> SessionEngine<'a> {
    pub fn new(state: &'a mut SessionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        self.state
    }

    /// Routes a command to its handler.
    pub fn handle(&mut self, env: &mut GameEnv<'_>, command: SessionCommand) -> Outcome {
        match command {
            SessionCommand::Start => self.start_session(env),
            SessionCommand::Tick => self.on_tick(env),
            SessionCommand::Fire(at) => self.on_fire(env, at),
            SessionCommand::RequestReload => self.on_reload_request(env),
            SessionCommand::ReloadFinished => self.on_reload_finished(env),
            SessionCommand::FlightFinished(id) => self.on_flight_complete(env, id),
        }
    }

    /// Resets the counters, clears the stage and starts the countdown.
    ///
    /// Valid from the menu and after the session ended. A reload still in
    /// flight is left alone and completes on its own.
    pub fn start_session(&mut self, env: &mut GameEnv<'_>) -> Outcome {
        if self.state.is_playing() {
            return Outcome::Ignored(IgnoreReason::AlreadyPlaying);
        }

        let session = &env.config.session;
        self.state.score = 0;
        self.state.ammo = session.ammo_capacity;
        self.state.time_remaining = session.duration_secs;
        self.state.phase = SessionPhase::Playing;
        self.state.targets.clear();

        env.stage.clear();
        env.stage.update_hud(&self.state.hud());
        env.scheduler
            .schedule_repeating(session.tick_period, Timer::SessionTick);

        Outcome::Started
    }

    /// One countdown step: spawn, count down, possibly end.
    pub fn on_tick(&mut self, env: &mut GameEnv<'_>) -> Outcome {
        if !self.state.is_playing() {
            return Outcome::Ignored(IgnoreReason::NotPlaying);
        }

        let count = spawn::static_spawn_count(self.state, env.config, env.rng);
        let mut spawned_static = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let target = spawn::static_target(self.state, env.config, env.rng);
            env.stage.spawn_sprite(&target);
            spawned_static.push(target.id);
            self.state.targets.push(target);
        }

        let spawned_flying = if self.state.time_remaining % 2 == 0 {
            let now = env.clock.now();
            let target = spawn::flying_target(self.state, env.config, env.rng, now);
            let id = target.id;
            env.stage.spawn_sprite(&target);
            if let Some(flight) = &target.flight {
                env.stage.animate_flight(id, flight);
                env.scheduler
                    .schedule_once(flight.duration, Timer::FlightFinished(id));
            }
            self.state.targets.push(target);
            Some(id)
        } else {
            None
        };

        self.state.time_remaining -= 1;
        env.stage.update_hud(&self.state.hud());

        let ended = self.state.time_remaining <= 0;
        if ended {
            self.end_session(env);
        }

        Outcome::Ticked(TickOutcome {
            spawned_static,
            spawned_flying,
            time_remaining: self.state.time_remaining,
            ended,
        })
    }

    /// Spends one round and removes the first target under `at`, if any.
    pub fn on_fire(&mut self, env: &mut GameEnv<'_>, at: Point) -> Outcome {
        if !self.state.is_playing() {
            return Outcome::Ignored(IgnoreReason::NotPlaying);
        }
        if self.state.is_reloading() {
            return Outcome::Ignored(IgnoreReason::Reloading);
        }
        if self.state.ammo == 0 {
            return Outcome::Ignored(IgnoreReason::OutOfAmmo);
        }

        self.state.ammo -= 1;

        let now = env.clock.now();
        let outcome = match self.state.targets.first_hit(at, now) {
            Some(index) => {
                let target = self.state.targets.remove_at(index);
                let points = scoring::points_for(&target, &env.config.scoring);
                self.state.score += points;
                env.stage.remove_sprite(target.id);
                FireOutcome::Hit { target, points }
            }
            None => FireOutcome::Miss,
        };

        env.stage.update_hud(&self.state.hud());
        Outcome::Fired(outcome)
    }

    /// Starts the fixed-delay reload.
    pub fn on_reload_request(&mut self, env: &mut GameEnv<'_>) -> Outcome {
        if !self.state.is_playing() {
            return Outcome::Ignored(IgnoreReason::NotPlaying);
        }
        if self.state.is_reloading() {
            return Outcome::Ignored(IgnoreReason::AlreadyReloading);
        }

        self.state.reload = ReloadState::Reloading;
        env.stage.update_hud(&self.state.hud());
        env.scheduler
            .schedule_once(env.config.session.reload_delay, Timer::ReloadFinished);

        Outcome::ReloadStarted
    }

    /// Refills the magazine. Applies in any phase; reloads are not cancelled.
    pub fn on_reload_finished(&mut self, env: &mut GameEnv<'_>) -> Outcome {
        if !self.state.is_reloading() {
            return Outcome::Ignored(IgnoreReason::NotReloading);
        }

        self.state.ammo = env.config.session.ammo_capacity;
        self.state.reload = ReloadState::Ready;
        env.stage.update_hud(&self.state.hud());

        Outcome::Reloaded
    }

    /// Drops a flying target whose traversal finished. Idempotent.
    pub fn on_flight_complete(&mut self, env: &mut GameEnv<'_>, id: TargetId) -> Outcome {
        let flying = self
            .state
            .targets
            .get(id)
            .is_some_and(|target| target.is_flying());

        let removed = flying && self.state.targets.remove(id).is_some();
        if removed {
            env.stage.remove_sprite(id);
        }

        Outcome::FlightEnded {
            target: id,
            removed,
        }
    }

    fn end_session(&mut self, env: &mut GameEnv<'_>) {
        env.scheduler.cancel_repeating(Timer::SessionTick);
        self.state.phase = SessionPhase::Ended;
        env.stage.show_end_screen(self.state.score);
    }
}
