use core::time::Duration;

use super::common::{Bounds, Point, SessionTime, TargetId};

/// Picture used to draw a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SpriteKind {
    Perched,
    Pecking,
    Strutting,
    /// Flying towards the left edge.
    FlyingLeft,
    /// Flying towards the right edge.
    FlyingRight,
}

impl SpriteKind {
    /// Pictures static targets are drawn from, uniformly.
    pub const STATIC: [SpriteKind; 3] = [Self::Perched, Self::Pecking, Self::Strutting];

    pub const fn is_flying(self) -> bool {
        matches!(self, Self::FlyingLeft | Self::FlyingRight)
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Horizontal traversal of a flying target.
///
/// The vertical position never changes. The horizontal offset follows the
/// ease-both curve between `start_x` and `end_x`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flight {
    pub start_x: f64,
    pub end_x: f64,
    pub y: f64,
    pub started_at: SessionTime,
    pub duration: Duration,
}

impl Flight {
    pub fn heads_right(&self) -> bool {
        self.end_x > self.start_x
    }

    pub fn finishes_at(&self) -> SessionTime {
        self.started_at + self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: SessionTime) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.since(self.started_at).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn x_at(&self, now: SessionTime) -> f64 {
        self.start_x + (self.end_x - self.start_x) * ease_both(self.progress(now))
    }

    pub fn position_at(&self, now: SessionTime) -> Point {
        Point::new(self.x_at(now), self.y)
    }
}

/// Ease-in/ease-out curve with 20% acceleration and 20% deceleration.
pub fn ease_both(t: f64) -> f64 {
    let eased = if t < 0.2 {
        3.125 * t * t
    } else if t > 0.8 {
        -3.125 * t * t + 6.25 * t - 2.125
    } else {
        1.25 * t - 0.125
    };
    eased.clamp(0.0, 1.0)
}

/// A scorable sprite living in the session's target list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id: TargetId,
    pub sprite: SpriteKind,
    /// Rendered edge length; targets are square.
    pub size: f64,
    /// Spawn position (top-left corner).
    pub origin: Point,
    /// Present for flying targets only.
    pub flight: Option<Flight>,
}

impl Target {
    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// On-screen bounds at `now`.
    pub fn bounds_at(&self, now: SessionTime) -> Bounds {
        let origin = match &self.flight {
            Some(flight) => flight.position_at(now),
            None => self.origin,
        };
        Bounds::square(origin, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight_right() -> Flight {
        Flight {
            start_x: -80.0,
            end_x: 1380.0,
            y: 100.0,
            started_at: SessionTime::from_millis(1_000),
            duration: Duration::from_secs(7),
        }
    }

    #[test]
    fn ease_both_hits_endpoints_and_midpoint() {
        assert_eq!(ease_both(0.0), 0.0);
        assert!((ease_both(0.5) - 0.5).abs() < 1e-12);
        assert!((ease_both(1.0) - 1.0).abs() < 1e-12);
        assert!((ease_both(0.2) - 0.125).abs() < 1e-12);
        assert!((ease_both(0.8) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn flight_position_is_clamped_to_path() {
        let flight = flight_right();
        assert_eq!(flight.x_at(SessionTime::ZERO), -80.0);
        assert_eq!(flight.x_at(SessionTime::from_millis(1_000)), -80.0);
        assert_eq!(flight.x_at(SessionTime::from_millis(60_000)), 1380.0);
        assert_eq!(flight.finishes_at(), SessionTime::from_millis(8_000));
        assert!(flight.heads_right());
    }

    #[test]
    fn flight_midpoint_is_halfway() {
        let flight = flight_right();
        let x = flight.x_at(SessionTime::from_millis(4_500));
        assert!((x - 650.0).abs() < 1e-9);
    }

    #[test]
    fn static_bounds_do_not_move() {
        let target = Target {
            id: TargetId(1),
            sprite: SpriteKind::Perched,
            size: 60.0,
            origin: Point::new(5.0, 450.0),
            flight: None,
        };
        assert_eq!(
            target.bounds_at(SessionTime::from_millis(99_000)),
            Bounds::new(5.0, 450.0, 60.0, 60.0)
        );
        assert!(!target.is_flying());
    }

    #[test]
    fn flying_bounds_follow_flight() {
        let target = Target {
            id: TargetId(2),
            sprite: SpriteKind::FlyingRight,
            size: 80.0,
            origin: Point::new(-80.0, 100.0),
            flight: Some(flight_right()),
        };
        let bounds = target.bounds_at(SessionTime::from_millis(4_500));
        assert!((bounds.x - 650.0).abs() < 1e-9);
        assert_eq!(bounds.y, 100.0);
        assert!(target.is_flying());
    }
}
