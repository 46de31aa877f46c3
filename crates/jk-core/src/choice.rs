//! The three hands a player or computer can show.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// One of the three hands in rock-paper-scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// The closed fist. Beats scissors.
    Rock,
    /// Two extended fingers. Beats paper.
    Scissors,
    /// The open hand. Beats rock.
    Paper,
}

impl Choice {
    /// All choices in fixed order.
    pub fn all() -> &'static [Self] {
        &[Self::Rock, Self::Scissors, Self::Paper]
    }

    /// The hand this one defeats.
    pub fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }

    /// Parse a choice from a user-supplied string.
    ///
    /// Accepts the full names, single-letter shorthands, and the janken
    /// call names (gu, choki, pa).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" | "gu" => Some(Self::Rock),
            "scissors" | "s" | "choki" => Some(Self::Scissors),
            "paper" | "p" | "pa" => Some(Self::Paper),
            _ => None,
        }
    }

    /// Draw a hand uniformly at random from the three choices.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::all()[rng.random_range(0..3)]
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Scissors => write!(f, "Scissors"),
            Self::Paper => write!(f, "Paper"),
        }
    }
}
