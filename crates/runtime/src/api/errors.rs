//! Unified error types surfaced by the runtime API.
//!
//! Wraps configuration failures and worker coordination problems so clients
//! can bubble them up with consistent context. Rejected battle input is not an
//! error at this level; the worker logs and ignores it.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::ConfigurationError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a hero to be chosen before building")]
    MissingHero,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
