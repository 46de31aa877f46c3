//! Transcript entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jk_core::{Choice, Outcome};

/// A single event in a match transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TranscriptEntry {
    /// One round was played.
    RoundPlayed {
        /// 1-based round index.
        round: u32,
        /// The player's hand.
        player: Choice,
        /// The computer's hand.
        computer: Choice,
        /// The judged outcome.
        outcome: Outcome,
        /// When the round was played.
        timestamp: DateTime<Utc>,
    },

    /// The match reached its full length and was evaluated.
    MatchFinished {
        /// Final win count.
        wins: u32,
        /// Final loss count.
        losses: u32,
        /// Final draw count.
        draws: u32,
        /// Z-score of the win count.
        z_score: f64,
        /// Classification of the result.
        classification: String,
        /// Verdict message shown to the player.
        verdict: String,
        /// When the match finished.
        timestamp: DateTime<Utc>,
    },

    /// The match was reset mid-way or after completion.
    MatchReset {
        /// Rounds that had been played before the reset.
        rounds_played: u32,
        /// When the reset happened.
        timestamp: DateTime<Utc>,
    },
}
