use core::time::Duration;

use crate::error::ConfigError;

/// Game configuration constants and tunable parameters.
///
/// Geometry is expressed in arena pixels with the origin in the top-left
/// corner. Frontends scale the arena onto whatever surface they draw on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub session: SessionConfig,
    pub targets: TargetConfig,
    pub scoring: ScoringConfig,
}

/// Playfield size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

/// Timing and ammunition of one play-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Countdown start value, decremented once per tick.
    pub duration_secs: i32,
    pub ammo_capacity: u32,
    pub tick_period: Duration,
    pub reload_delay: Duration,
}

/// Spawn geometry for static and flying targets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetConfig {
    pub min_size: f64,
    pub max_size: f64,
    /// Upper bound (inclusive) of static targets spawned per tick.
    pub max_static_per_tick: u32,
    /// Top edge of the ground band static targets are placed in.
    pub ground_offset: f64,
    /// Space kept free below the ground band, on top of three target heights.
    pub ground_margin: f64,
    /// Space kept free below the lowest flight line.
    pub sky_margin: f64,
    pub flight_duration: Duration,
}

/// Points awarded per hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    /// Divided by the target size; smaller targets pay more.
    pub size_numerator: u32,
    pub flying_multiplier: u32,
}

impl GameConfig {
    pub const DEFAULT_ARENA_WIDTH: f64 = 1300.0;
    pub const DEFAULT_ARENA_HEIGHT: f64 = 720.0;
    pub const DEFAULT_DURATION_SECS: i32 = 30;
    pub const DEFAULT_AMMO_CAPACITY: u32 = 10;
    pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);
    pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_secs(1);
    pub const DEFAULT_FLIGHT_DURATION: Duration = Duration::from_secs(7);

    pub fn new() -> Self {
        Self {
            arena: ArenaConfig {
                width: Self::DEFAULT_ARENA_WIDTH,
                height: Self::DEFAULT_ARENA_HEIGHT,
            },
            session: SessionConfig {
                duration_secs: Self::DEFAULT_DURATION_SECS,
                ammo_capacity: Self::DEFAULT_AMMO_CAPACITY,
                tick_period: Self::DEFAULT_TICK_PERIOD,
                reload_delay: Self::DEFAULT_RELOAD_DELAY,
            },
            targets: TargetConfig {
                min_size: 50.0,
                max_size: 100.0,
                max_static_per_tick: 2,
                ground_offset: 400.0,
                ground_margin: 150.0,
                sky_margin: 200.0,
                flight_duration: Self::DEFAULT_FLIGHT_DURATION,
            },
            scoring: ScoringConfig {
                size_numerator: 2000,
                flying_multiplier: 2,
            },
        }
    }

    pub fn with_duration_secs(mut self, duration_secs: i32) -> Self {
        self.session.duration_secs = duration_secs;
        self
    }

    pub fn with_ammo_capacity(mut self, ammo_capacity: u32) -> Self {
        self.session.ammo_capacity = ammo_capacity;
        self
    }

    /// Rejects tunables the session rules cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if !(arena.width > 0.0 && arena.height > 0.0) {
            return Err(ConfigError::EmptyArena {
                width: arena.width,
                height: arena.height,
            });
        }

        let targets = &self.targets;
        if !(targets.min_size > 0.0 && targets.min_size <= targets.max_size) {
            return Err(ConfigError::InvalidSizeRange {
                min: targets.min_size,
                max: targets.max_size,
            });
        }
        if targets.max_size >= arena.width {
            return Err(ConfigError::TargetWiderThanArena {
                size: targets.max_size,
                width: arena.width,
            });
        }
        if targets.flight_duration.is_zero() {
            return Err(ConfigError::ZeroDuration {
                field: "flight_duration",
            });
        }

        let session = &self.session;
        if session.duration_secs <= 0 {
            return Err(ConfigError::NonPositiveSessionLength(session.duration_secs));
        }
        if session.ammo_capacity == 0 {
            return Err(ConfigError::ZeroAmmoCapacity);
        }
        if session.tick_period.is_zero() {
            return Err(ConfigError::ZeroDuration {
                field: "tick_period",
            });
        }

        if self.scoring.flying_multiplier == 0 {
            return Err(ConfigError::ZeroFlyingMultiplier);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
