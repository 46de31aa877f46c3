//! Error types for the round engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while playing rounds.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A round was played after the match already reached its full length.
    #[error("match is complete, no more rounds can be played")]
    MatchComplete,
}
