//! The round engine: a fixed-length match against a random opponent.
//!
//! A match is a two-state machine: `Playing` while fewer than
//! [`TOTAL_ROUNDS`] rounds have been recorded, `Complete` once the final
//! round lands. `Complete` is terminal until [`RoundEngine::reset`] returns
//! the engine to a fresh `Playing` state.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::TOTAL_ROUNDS;
use crate::choice::Choice;
use crate::error::{EngineError, EngineResult};
use crate::outcome::Outcome;
use crate::tally::Tally;

/// Whether a match is still accepting rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Fewer than the full number of rounds have been played.
    Playing,
    /// The match has reached its full length.
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// The observable result of one played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based index of the round within the match.
    pub round: u32,
    /// The hand the player showed.
    pub player: Choice,
    /// The hand the computer drew.
    pub computer: Choice,
    /// The judged outcome, from the player's perspective.
    pub outcome: Outcome,
}

/// Plays rounds and accumulates the tally until the match completes.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    tally: Tally,
    last: Option<RoundRecord>,
}

impl RoundEngine {
    /// Create a fresh engine with an empty tally.
    pub fn new() -> Self {
        Self {
            tally: Tally::new(),
            last: None,
        }
    }

    /// Play one round against a computer hand drawn uniformly at random.
    pub fn play_round(&mut self, player: Choice, rng: &mut StdRng) -> EngineResult<RoundRecord> {
        let computer = Choice::random(rng);
        self.play_round_against(player, computer)
    }

    /// Play one round against a known computer hand.
    ///
    /// Fails with [`EngineError::MatchComplete`] once the match has reached
    /// its full length; the tally is not touched in that case.
    pub fn play_round_against(
        &mut self,
        player: Choice,
        computer: Choice,
    ) -> EngineResult<RoundRecord> {
        if self.is_complete() {
            return Err(EngineError::MatchComplete);
        }

        let outcome = Outcome::of(player, computer);
        self.tally.record(outcome);
        let record = RoundRecord {
            round: self.tally.rounds(),
            player,
            computer,
            outcome,
        };
        self.last = Some(record);
        Ok(record)
    }

    /// Reset the engine to a fresh match: zero tally, no last round.
    pub fn reset(&mut self) {
        self.tally.reset();
        self.last = None;
    }

    /// The running tally.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Current phase of the match.
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else {
            Phase::Playing
        }
    }

    /// Whether the match has reached its full length.
    pub fn is_complete(&self) -> bool {
        self.tally.rounds() >= TOTAL_ROUNDS
    }

    /// The most recently played round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.last.as_ref()
    }

    /// Rounds remaining before the match completes.
    pub fn rounds_left(&self) -> u32 {
        TOTAL_ROUNDS - self.tally.rounds()
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}
