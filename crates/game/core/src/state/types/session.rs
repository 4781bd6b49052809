/// Top-level lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// Nothing started yet; waiting for Play.
    #[default]
    Menu,
    Playing,
    /// Countdown ran out; terminal until restart.
    Ended,
}

impl SessionPhase {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Reload sub-state, orthogonal to [`SessionPhase`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReloadState {
    #[default]
    Ready,
    Reloading,
}
