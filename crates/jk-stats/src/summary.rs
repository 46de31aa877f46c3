//! Evaluation of a completed match against the binomial null model.

use serde::{Deserialize, Serialize};

use jk_core::Tally;

use crate::SIGNIFICANCE_THRESHOLD;
use crate::error::{StatsError, StatsResult};
use crate::normal::normal_cdf;

/// How the final win count compares to pure chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Within the expected range.
    Ordinary,
    /// Significantly more wins than chance predicts.
    HighOutlier,
    /// Significantly fewer wins than chance predicts.
    LowOutlier,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ordinary => write!(f, "ordinary"),
            Self::HighOutlier => write!(f, "high outlier"),
            Self::LowOutlier => write!(f, "low outlier"),
        }
    }
}

/// Statistical summary of a completed match.
///
/// Derived once from a full tally; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    /// Observed win count.
    pub wins: u32,
    /// Expected win count under the null model.
    pub expected: f64,
    /// Standard deviation of the win count under the null model.
    pub std_dev: f64,
    /// Standardized distance of the observed wins from the expectation.
    pub z_score: f64,
    /// Probability mass at or below the observed win count.
    pub lower_tail: f64,
    /// Probability mass above the observed win count.
    pub upper_tail: f64,
    /// Outlier classification of the result.
    pub classification: Classification,
}

/// Evaluate a completed tally against the binomial-as-normal null model.
///
/// The tally must cover exactly `total_rounds` rounds; `win_probability`
/// must lie strictly between 0 and 1. The observed win count is evaluated
/// against the continuous approximation directly, without a continuity
/// correction.
pub fn evaluate(tally: &Tally, total_rounds: u32, win_probability: f64) -> StatsResult<StatSummary> {
    if total_rounds == 0 {
        return Err(StatsError::InvalidRoundCount);
    }
    if win_probability <= 0.0 || win_probability >= 1.0 {
        return Err(StatsError::InvalidProbability(win_probability));
    }
    if tally.rounds() != total_rounds {
        return Err(StatsError::IncompleteTally {
            rounds: tally.rounds(),
            expected: total_rounds,
        });
    }

    let n = f64::from(total_rounds);
    let wins = tally.wins();
    let expected = n * win_probability;
    let variance = n * win_probability * (1.0 - win_probability);
    let std_dev = variance.sqrt();
    let z_score = (f64::from(wins) - expected) / std_dev;

    let lower_tail = normal_cdf(f64::from(wins), expected, std_dev);
    let upper_tail = 1.0 - lower_tail;

    // Two-sided critical value, one-sided branch on the sign: an outlier
    // is declared at |z| >= 1.96 and the sign decides high vs low.
    let classification = if z_score.abs() >= SIGNIFICANCE_THRESHOLD {
        if z_score > 0.0 {
            Classification::HighOutlier
        } else {
            Classification::LowOutlier
        }
    } else {
        Classification::Ordinary
    };

    Ok(StatSummary {
        wins,
        expected,
        std_dev,
        z_score,
        lower_tail,
        upper_tail,
        classification,
    })
}
