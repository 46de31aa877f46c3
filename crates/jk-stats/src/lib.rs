//! Statistical evaluation for JankenLab.
//!
//! Classifies a completed match's win count against the binomial null
//! model, approximated as a normal distribution: expected wins, standard
//! deviation, Z-score, tail probabilities, and an outlier classification.
//! Also samples the fitted density curve for chart rendering.

pub mod curve;
pub mod error;
pub mod normal;
pub mod summary;

pub use curve::{curve_points, sigma_band};
pub use error::{StatsError, StatsResult};
pub use normal::{erf, normal_cdf, normal_pdf};
pub use summary::{Classification, StatSummary, evaluate};

/// Z-score magnitude at which a result counts as an outlier.
///
/// 1.96 is the two-sided 5% critical value of the standard normal; the
/// sign of the Z-score then picks the high or low branch.
pub const SIGNIFICANCE_THRESHOLD: f64 = 1.96;
