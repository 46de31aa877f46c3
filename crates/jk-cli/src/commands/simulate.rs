use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use jk_core::{Choice, RoundEngine, TOTAL_ROUNDS, WIN_PROBABILITY};
use jk_stats::{Classification, evaluate};

pub fn run(matches: u64, seed: u64, verbose: bool) -> Result<(), String> {
    if matches == 0 {
        return Err("need at least one match to simulate".into());
    }

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({matches} matches x {TOTAL_ROUNDS} rounds, seed={seed})").dimmed()
    );
    println!();

    let mut rng = StdRng::seed_from_u64(seed);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Match", "Wins", "Losses", "Draws", "Z-score", "Verdict"]);

    let mut ordinary = 0u64;
    let mut high = 0u64;
    let mut low = 0u64;
    let mut total_wins = 0u64;

    for m in 1..=matches {
        let mut engine = RoundEngine::new();
        while !engine.is_complete() {
            let player = Choice::random(&mut rng);
            let record = engine
                .play_round(player, &mut rng)
                .map_err(|e| e.to_string())?;
            if verbose {
                println!(
                    "  {} {} vs {}: {}",
                    format!("[match {m} round {:>2}]", record.round).dimmed(),
                    record.player,
                    record.computer,
                    record.outcome
                );
            }
        }

        let summary =
            evaluate(engine.tally(), TOTAL_ROUNDS, WIN_PROBABILITY).map_err(|e| e.to_string())?;
        match summary.classification {
            Classification::Ordinary => ordinary += 1,
            Classification::HighOutlier => high += 1,
            Classification::LowOutlier => low += 1,
        }
        total_wins += u64::from(summary.wins);

        let tally = engine.tally();
        table.add_row(vec![
            m.to_string(),
            tally.wins().to_string(),
            tally.losses().to_string(),
            tally.draws().to_string(),
            format!("{:+.2}", summary.z_score),
            summary.classification.to_string(),
        ]);
    }

    if verbose {
        println!();
    }
    println!("{table}");
    println!();

    let mean_wins = total_wins as f64 / matches as f64;
    println!(
        "  Mean wins: {mean_wins:.2} (expected {:.2})",
        f64::from(TOTAL_ROUNDS) * WIN_PROBABILITY
    );
    println!(
        "  Verdicts: {} ordinary, {} high outliers, {} low outliers",
        ordinary.to_string().yellow().bold(),
        high.to_string().red().bold(),
        low.to_string().cyan().bold()
    );

    Ok(())
}
