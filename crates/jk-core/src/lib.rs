//! Core match engine for JankenLab.
//!
//! Provides the three-hand choice type, pure outcome judgment, the
//! win/loss/draw tally, and a fixed-length round engine that plays a
//! match against a uniformly random computer opponent.

pub mod choice;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod tally;

pub use choice::Choice;
pub use engine::{Phase, RoundEngine, RoundRecord};
pub use error::{EngineError, EngineResult};
pub use outcome::Outcome;
pub use tally::Tally;

/// Number of rounds in a full match.
pub const TOTAL_ROUNDS: u32 = 90;

/// Per-round probability of a player win against a uniform opponent.
///
/// A draw counts as neither win nor loss, so each of the three outcomes
/// has probability 1/3.
pub const WIN_PROBABILITY: f64 = 1.0 / 3.0;
