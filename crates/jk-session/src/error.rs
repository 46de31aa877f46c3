//! Error types for the match session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a match session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A choice was played after the match finished.
    #[error("the match is over, type 'reset' to play again")]
    MatchOver,

    /// Input that is neither a choice nor a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid arguments to a session command.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Engine error.
    #[error("{0}")]
    Engine(#[from] jk_core::EngineError),

    /// Evaluation error.
    #[error("{0}")]
    Stats(#[from] jk_stats::StatsError),
}
