//! Verdict messages for a finished match.
//!
//! The messaging has three tiers keyed to the classification: a pool of
//! celebratory variants for high outliers, a pool of commiserating
//! variants for low outliers, and a single steady message for everything
//! else. Outlier messages quote the tail the result fell into.

use rand::Rng;
use rand::rngs::StdRng;

use jk_stats::{Classification, StatSummary};

/// Number of message variants in each outlier pool.
const POOL_SIZE: u32 = 4;

/// Pick a verdict message for the summary, drawing the variant uniformly
/// from the matching pool.
pub fn verdict_message(summary: &StatSummary, rng: &mut StdRng) -> String {
    match summary.classification {
        Classification::HighOutlier => lucky_message(summary, rng.random_range(0..POOL_SIZE)),
        Classification::LowOutlier => unlucky_message(summary, rng.random_range(0..POOL_SIZE)),
        Classification::Ordinary => steady_message(summary),
    }
}

fn lucky_message(s: &StatSummary, pick: u32) -> String {
    let wins = s.wins;
    let z = s.z_score;
    let pct = s.upper_tail * 100.0;
    match pick {
        0 => format!(
            "Magnificent! {wins} wins at Z {z:.2}. Statistically that lands in roughly \
             the top {pct:.1}% of outcomes. Your janken might just be stronger than the machine."
        ),
        1 => format!(
            "The machine is stunned! {wins} wins at Z {z:.2} is a genuinely rare run, \
             roughly the top {pct:.1}% of outcomes, far beyond anything it predicted."
        ),
        2 => format!(
            "Statistics can only shrug. {wins} wins at Z {z:.2} sits in roughly the top \
             {pct:.1}% of outcomes. Can you see the future?"
        ),
        _ => format!(
            "All hail the janken sovereign! {wins} wins at Z {z:.2} is roughly a top \
             {pct:.1}% feat. You did not just win, you bent probability itself."
        ),
    }
}

fn unlucky_message(s: &StatSummary, pick: u32) -> String {
    let wins = s.wins;
    let z = s.z_score;
    let pct = s.lower_tail * 100.0;
    match pick {
        0 => format!(
            "A rare result in its own way: {wins} wins at Z {z:.2}, roughly the bottom \
             {pct:.1}% of outcomes. The laws of the universe may be out of order today."
        ),
        1 => format!(
            "Probability was not on your side. {wins} wins at Z {z:.2} places this run \
             in roughly the bottom {pct:.1}% of outcomes. It is as if the machine learned to beat you."
        ),
        2 => format!(
            "A legend starts here, maybe. {wins} wins at Z {z:.2} is improbably low, \
             roughly the bottom {pct:.1}% of outcomes. In a sense you are a statistical storm."
        ),
        _ => format!(
            "Today's fortune: not great. {wins} wins at Z {z:.2} lands in roughly the \
             bottom {pct:.1}% of outcomes, says the data."
        ),
    }
}

fn steady_message(s: &StatSummary) -> String {
    let wins = s.wins;
    let z = s.z_score;
    let pct = s.upper_tail * 100.0;
    format!("A solid result. {wins} wins at Z {z:.2} lands in roughly the top {pct:.1}% of outcomes.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jk_core::{Outcome, TOTAL_ROUNDS, Tally, WIN_PROBABILITY};
    use jk_stats::evaluate;
    use rand::SeedableRng;

    fn summary_for(wins: u32) -> StatSummary {
        let mut t = Tally::new();
        for _ in 0..wins {
            t.record(Outcome::Win);
        }
        for _ in 0..TOTAL_ROUNDS - wins {
            t.record(Outcome::Loss);
        }
        evaluate(&t, TOTAL_ROUNDS, WIN_PROBABILITY).unwrap()
    }

    #[test]
    fn lucky_pool_has_distinct_variants() {
        let s = summary_for(45);
        let texts: std::collections::HashSet<String> =
            (0..POOL_SIZE).map(|i| lucky_message(&s, i)).collect();
        assert_eq!(texts.len(), POOL_SIZE as usize);
    }

    #[test]
    fn unlucky_pool_has_distinct_variants() {
        let s = summary_for(18);
        let texts: std::collections::HashSet<String> =
            (0..POOL_SIZE).map(|i| unlucky_message(&s, i)).collect();
        assert_eq!(texts.len(), POOL_SIZE as usize);
    }

    #[test]
    fn message_quotes_wins_and_z_score() {
        let s = summary_for(45);
        let mut rng = StdRng::seed_from_u64(1);
        let msg = verdict_message(&s, &mut rng);
        assert!(msg.contains("45 wins"));
        assert!(msg.contains("3.35"));
    }

    #[test]
    fn steady_message_for_ordinary_result() {
        let s = summary_for(30);
        let mut rng = StdRng::seed_from_u64(1);
        let msg = verdict_message(&s, &mut rng);
        assert!(msg.starts_with("A solid result."));
        assert!(msg.contains("30 wins"));
        assert!(msg.contains("50.0%"));
    }

    #[test]
    fn unlucky_message_quotes_lower_tail() {
        let s = summary_for(18);
        let mut rng = StdRng::seed_from_u64(1);
        let msg = verdict_message(&s, &mut rng);
        assert!(msg.contains("bottom"));
    }

    #[test]
    fn deterministic_pick_with_seed() {
        let s = summary_for(45);
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(verdict_message(&s, &mut rng1), verdict_message(&s, &mut rng2));
    }
}
