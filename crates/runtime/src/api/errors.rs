//! Unified error types surfaced by the runtime API.
//!
//! Gameplay rejections are not errors; they come back as
//! [`game_core::Outcome::Ignored`]. What remains is configuration and worker
//! coordination.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid game configuration")]
    InvalidConfig(#[from] game_core::ConfigError),
}
