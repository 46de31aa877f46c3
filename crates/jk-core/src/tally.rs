//! Win/loss/draw bookkeeping for a match.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Aggregate counts for a match in progress.
///
/// `rounds == wins + losses + draws` holds across every mutation; the only
/// way to change the counts is to `record` one outcome at a time or to
/// `reset` everything to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    rounds: u32,
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Tally {
    /// Create a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one round's outcome.
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Reset all counts to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rounds recorded so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Rounds the player won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds the player lost.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Rounds that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "W {} / L {} / D {}",
            self.wins, self.losses, self.draws
        )
    }
}
