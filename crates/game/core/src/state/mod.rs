//! Authoritative session state.
//!
//! This module owns the data describing one play-through: counters, the
//! reload sub-state and the live target list. Runtime layers clone or query
//! this state but mutate it exclusively through [`crate::engine::SessionEngine`].
pub mod hud;
pub mod targets;
pub mod types;

use crate::config::GameConfig;
use crate::env::compute_seed;

pub use hud::{Hud, final_score_label};
pub use targets::TargetList;
pub use types::{
    Bounds, Flight, Point, ReloadState, SessionPhase, SessionTime, SpriteKind, Target, TargetId,
    ease_both,
};

/// Canonical snapshot of the session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    /// RNG seed, set once when the state is created.
    ///
    /// Restarts keep the seed; the draw counter keeps advancing, so every
    /// play-through still gets fresh spawns.
    pub game_seed: u64,

    /// Number of random draws taken so far.
    draw_nonce: u64,

    /// Target id allocator (monotonically increasing, never reused).
    next_target_id: u32,

    pub phase: SessionPhase,
    pub reload: ReloadState,
    pub score: u32,
    pub ammo: u32,
    pub time_remaining: i32,
    pub targets: TargetList,
}

impl SessionState {
    /// Creates a state sitting in the menu, counters at their start values.
    pub fn new(config: &GameConfig, game_seed: u64) -> Self {
        Self {
            game_seed,
            draw_nonce: 0,
            next_target_id: 1,
            phase: SessionPhase::Menu,
            reload: ReloadState::Ready,
            score: 0,
            ammo: config.session.ammo_capacity,
            time_remaining: config.session.duration_secs,
            targets: TargetList::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    pub fn is_reloading(&self) -> bool {
        self.reload == ReloadState::Reloading
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(self)
    }

    /// Allocates a new unique target id.
    pub fn allocate_target_id(&mut self) -> TargetId {
        let id = TargetId(self.next_target_id);
        self.next_target_id = self.next_target_id.wrapping_add(1);
        id
    }

    /// Returns a fresh seed for the next random draw.
    ///
    /// `context` distinguishes the purpose of the draw (count, size, x, ...).
    pub fn next_draw_seed(&mut self, context: u32) -> u64 {
        let seed = compute_seed(self.game_seed, self.draw_nonce, context);
        self.draw_nonce += 1;
        seed
    }

    pub fn draws_taken(&self) -> u64 {
        self.draw_nonce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_waits_in_menu() {
        let state = SessionState::new(&GameConfig::default(), 7);
        assert_eq!(state.phase, SessionPhase::Menu);
        assert_eq!(state.ammo, 10);
        assert_eq!(state.time_remaining, 30);
        assert!(state.targets.is_empty());
    }

    #[test]
    fn target_ids_are_never_reused() {
        let mut state = SessionState::new(&GameConfig::default(), 7);
        let first = state.allocate_target_id();
        let second = state.allocate_target_id();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn draw_seeds_advance() {
        let mut state = SessionState::new(&GameConfig::default(), 7);
        let a = state.next_draw_seed(0);
        let b = state.next_draw_seed(0);
        assert_ne!(a, b);
        assert_eq!(state.draws_taken(), 2);
    }
}
