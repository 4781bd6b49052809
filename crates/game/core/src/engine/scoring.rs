use crate::config::ScoringConfig;
use crate::state::Target;

/// Points for hitting `target`: `floor(numerator / size)`, multiplied for flying targets.
pub fn points_for(target: &Target, scoring: &ScoringConfig) -> u32 {
    let base = (f64::from(scoring.size_numerator) / target.size).floor() as u32;
    if target.is_flying() {
        base * scoring.flying_multiplier
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;
    use crate::GameConfig;
    use crate::state::{Flight, Point, SessionTime, SpriteKind, TargetId};

    fn target(size: f64, flying: bool) -> Target {
        Target {
            id: TargetId(1),
            sprite: if flying {
                SpriteKind::FlyingLeft
            } else {
                SpriteKind::Pecking
            },
            size,
            origin: Point::ORIGIN,
            flight: flying.then_some(Flight {
                start_x: 1300.0,
                end_x: -size,
                y: 0.0,
                started_at: SessionTime::ZERO,
                duration: Duration::from_secs(7),
            }),
        }
    }

    #[test]
    fn smaller_and_flying_targets_pay_more() {
        let scoring = GameConfig::default().scoring;
        assert_eq!(points_for(&target(100.0, false), &scoring), 20);
        assert_eq!(points_for(&target(50.0, true), &scoring), 80);
        assert_eq!(points_for(&target(50.0, false), &scoring), 40);
    }

    #[test]
    fn fractional_sizes_round_down() {
        let scoring = GameConfig::default().scoring;
        // 2000 / 66.6 = 30.03
        assert_eq!(points_for(&target(66.6, false), &scoring), 30);
        // 2000 / 99.9 = 20.02, doubled after flooring
        assert_eq!(points_for(&target(99.9, true), &scoring), 40);
    }
}
