//! Target placement.
//!
//! Every random value comes from [`RngOracle`] with a seed taken from the
//! session state, so placements replay exactly for a given game seed.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{Flight, Point, SessionState, SessionTime, SpriteKind, Target};

const DRAW_SPAWN_COUNT: u32 = 0;
const DRAW_SPRITE: u32 = 1;
const DRAW_SIZE: u32 = 2;
const DRAW_X: u32 = 3;
const DRAW_Y: u32 = 4;
const DRAW_SIDE: u32 = 5;

/// Number of static targets to add on this tick, uniform in `0..=max_static_per_tick`.
pub fn static_spawn_count(state: &mut SessionState, config: &GameConfig, rng: &dyn RngOracle) -> u32 {
    let bound = config.targets.max_static_per_tick.saturating_add(1);
    rng.below(state.next_draw_seed(DRAW_SPAWN_COUNT), bound)
}

fn draw_size(state: &mut SessionState, config: &GameConfig, rng: &dyn RngOracle) -> f64 {
    let targets = &config.targets;
    targets.min_size + rng.unit(state.next_draw_seed(DRAW_SIZE)) * (targets.max_size - targets.min_size)
}

/// Places a static target somewhere in the ground band.
///
/// The band starts at `ground_offset` and is
/// `height - 3 * size - ground_margin` tall.
pub fn static_target(state: &mut SessionState, config: &GameConfig, rng: &dyn RngOracle) -> Target {
    let arena = &config.arena;
    let targets = &config.targets;

    let choice = rng.below(
        state.next_draw_seed(DRAW_SPRITE),
        SpriteKind::STATIC.len() as u32,
    );
    let sprite = SpriteKind::STATIC[choice as usize];
    let size = draw_size(state, config, rng);

    let x = rng.unit(state.next_draw_seed(DRAW_X)) * (arena.width - size);
    let band = (arena.height - 3.0 * size - targets.ground_margin).max(0.0);
    let y = rng.unit(state.next_draw_seed(DRAW_Y)) * band + targets.ground_offset;

    Target {
        id: state.allocate_target_id(),
        sprite,
        size,
        origin: Point::new(x, y),
        flight: None,
    }
}

/// Creates a flying target entering from a random side, fully off-screen.
pub fn flying_target(
    state: &mut SessionState,
    config: &GameConfig,
    rng: &dyn RngOracle,
    now: SessionTime,
) -> Target {
    let arena = &config.arena;
    let targets = &config.targets;

    let from_left = rng.coin(state.next_draw_seed(DRAW_SIDE));
    let size = draw_size(state, config, rng);
    let y = rng.unit(state.next_draw_seed(DRAW_Y)) * (arena.height - targets.sky_margin).max(0.0);

    let (start_x, end_x, sprite) = if from_left {
        (-size, arena.width + size, SpriteKind::FlyingRight)
    } else {
        (arena.width, -size, SpriteKind::FlyingLeft)
    };

    let flight = Flight {
        start_x,
        end_x,
        y,
        started_at: now,
        duration: targets.flight_duration,
    };

    Target {
        id: state.allocate_target_id(),
        sprite,
        size,
        origin: Point::new(start_x, y),
        flight: Some(flight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn static_targets_stay_inside_ground_band() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 1234);

        for _ in 0..200 {
            let target = static_target(&mut state, &config, &PcgRng);
            assert!((50.0..=100.0).contains(&target.size));
            assert!(target.origin.x >= 0.0);
            assert!(target.origin.x + target.size <= config.arena.width);
            assert!(target.origin.y >= 400.0);
            assert!(target.origin.y <= 400.0 + (720.0 - 3.0 * target.size - 150.0));
            assert!(!target.is_flying());
            assert!(!target.sprite.is_flying());
        }
    }

    #[test]
    fn flying_targets_start_off_screen_and_cross_it() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 99);
        let now = SessionTime::from_millis(3_000);

        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..64 {
            let target = flying_target(&mut state, &config, &PcgRng, now);
            let flight = target.flight.expect("flying target has a flight");
            assert_eq!(flight.started_at, now);
            assert_eq!(flight.duration, config.targets.flight_duration);
            assert!(flight.y >= 0.0 && flight.y <= 520.0);

            if flight.heads_right() {
                seen_left = true;
                assert_eq!(flight.start_x, -target.size);
                assert_eq!(flight.end_x, config.arena.width + target.size);
                assert_eq!(target.sprite, SpriteKind::FlyingRight);
            } else {
                seen_right = true;
                assert_eq!(flight.start_x, config.arena.width);
                assert_eq!(flight.end_x, -target.size);
                assert_eq!(target.sprite, SpriteKind::FlyingLeft);
            }
        }
        assert!(seen_left && seen_right);
    }

    #[test]
    fn spawn_count_is_zero_to_two() {
        let config = GameConfig::default();
        let mut state = SessionState::new(&config, 5);
        let mut seen = [false; 3];
        for _ in 0..128 {
            let count = static_spawn_count(&mut state, &config, &PcgRng);
            assert!(count <= 2);
            seen[count as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn same_seed_replays_same_placements() {
        let config = GameConfig::default();
        let mut a = SessionState::new(&config, 77);
        let mut b = SessionState::new(&config, 77);
        assert_eq!(
            static_target(&mut a, &config, &PcgRng),
            static_target(&mut b, &config, &PcgRng)
        );
    }
}
