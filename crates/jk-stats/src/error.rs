//! Error types for statistical evaluation.

use thiserror::Error;

/// Result type for evaluation operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur while evaluating a match.
///
/// All of these are contract violations on the caller's side rather than
/// runtime conditions; there is nothing to retry.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The tally does not cover the full match yet.
    #[error("tally has {rounds} rounds, evaluation requires {expected}")]
    IncompleteTally {
        /// Rounds recorded in the tally.
        rounds: u32,
        /// Rounds a full match contains.
        expected: u32,
    },

    /// The configured round count is zero.
    #[error("total rounds must be positive")]
    InvalidRoundCount,

    /// The per-round win probability is outside the open interval (0, 1).
    #[error("win probability {0} is outside (0, 1)")]
    InvalidProbability(f64),
}
