//! Error types for game-core.
//!
//! Gameplay itself has no failure paths: events that are not allowed in the
//! current state are reported as [`crate::engine::IgnoreReason`] outcomes and
//! leave the session untouched. The only real errors are configurations the
//! rules cannot run with.

/// Invalid tunable detected by [`crate::GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("arena must have a positive size (got {width}x{height})")]
    EmptyArena { width: f64, height: f64 },

    #[error("target size range {min}..={max} is empty or non-positive")]
    InvalidSizeRange { min: f64, max: f64 },

    #[error("largest target ({size}px) does not fit into a {width}px wide arena")]
    TargetWiderThanArena { size: f64, width: f64 },

    #[error("session length must be positive (got {0}s)")]
    NonPositiveSessionLength(i32),

    #[error("ammo capacity must be at least one round")]
    ZeroAmmoCapacity,

    #[error("{field} must be longer than zero")]
    ZeroDuration { field: &'static str },

    #[error("flying multiplier must be at least 1")]
    ZeroFlyingMultiplier,
}
