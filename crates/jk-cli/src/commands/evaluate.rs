use colored::Colorize;

use jk_core::{TOTAL_ROUNDS, WIN_PROBABILITY};
use jk_stats::{Classification, evaluate};

pub fn run(wins: u32, json: bool) -> Result<(), String> {
    let tally = super::hypothetical_tally(wins)?;
    let summary = evaluate(&tally, TOTAL_ROUNDS, WIN_PROBABILITY).map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Evaluation".bold(),
        format!("({wins} wins in {TOTAL_ROUNDS} rounds, p = 1/3)").dimmed()
    );
    println!();
    println!("  Expected wins: {:.2}", summary.expected);
    println!("  Std dev:       {:.2}", summary.std_dev);
    println!("  Z-score:       {:+.2}", summary.z_score);
    println!("  Lower tail:    {:.1}%", summary.lower_tail * 100.0);
    println!("  Upper tail:    {:.1}%", summary.upper_tail * 100.0);
    println!();

    let verdict = match summary.classification {
        Classification::Ordinary => "ordinary".yellow().bold(),
        Classification::HighOutlier => "high outlier".red().bold(),
        Classification::LowOutlier => "low outlier".cyan().bold(),
    };
    println!("  Verdict: {verdict}");

    Ok(())
}
