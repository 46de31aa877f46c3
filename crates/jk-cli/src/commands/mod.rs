pub mod chart;
pub mod evaluate;
pub mod play;
pub mod simulate;

use jk_core::{Outcome, TOTAL_ROUNDS, Tally};

/// Build a completed tally for a hypothetical final win count, padding
/// the remainder with losses.
fn hypothetical_tally(wins: u32) -> Result<Tally, String> {
    if wins > TOTAL_ROUNDS {
        return Err(format!("wins must be at most {TOTAL_ROUNDS}, got {wins}"));
    }
    let mut tally = Tally::new();
    for _ in 0..wins {
        tally.record(Outcome::Win);
    }
    for _ in 0..TOTAL_ROUNDS - wins {
        tally.record(Outcome::Loss);
    }
    Ok(tally)
}
