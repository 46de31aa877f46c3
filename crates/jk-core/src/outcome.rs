//! Round outcome judgment.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;

/// The result of a single round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both sides showed the same hand.
    Draw,
    /// The player's hand beats the computer's.
    Win,
    /// The computer's hand beats the player's.
    Loss,
}

impl Outcome {
    /// Judge a round from the two hands shown.
    pub fn of(player: Choice, computer: Choice) -> Self {
        if player == computer {
            Self::Draw
        } else if player.beats() == computer {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draw => write!(f, "Draw"),
            Self::Win => write!(f, "Win"),
            Self::Loss => write!(f, "Loss"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::{Paper, Rock, Scissors};

    #[test]
    fn equal_hands_draw() {
        for c in Choice::all() {
            assert_eq!(Outcome::of(*c, *c), Outcome::Draw);
        }
    }

    #[test]
    fn winning_pairs() {
        assert_eq!(Outcome::of(Rock, Scissors), Outcome::Win);
        assert_eq!(Outcome::of(Scissors, Paper), Outcome::Win);
        assert_eq!(Outcome::of(Paper, Rock), Outcome::Win);
    }

    #[test]
    fn losing_pairs() {
        assert_eq!(Outcome::of(Scissors, Rock), Outcome::Loss);
        assert_eq!(Outcome::of(Paper, Scissors), Outcome::Loss);
        assert_eq!(Outcome::of(Rock, Paper), Outcome::Loss);
    }

    #[test]
    fn full_table_is_exhaustive() {
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;
        for p in Choice::all() {
            for c in Choice::all() {
                match Outcome::of(*p, *c) {
                    Outcome::Win => wins += 1,
                    Outcome::Loss => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }
        assert_eq!((wins, losses, draws), (3, 3, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::Win.to_string(), "Win");
        assert_eq!(Outcome::Loss.to_string(), "Loss");
    }
}
