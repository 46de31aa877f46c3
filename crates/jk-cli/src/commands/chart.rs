use std::fs;
use std::path::Path;

use colored::Colorize;

use jk_core::{TOTAL_ROUNDS, WIN_PROBABILITY};
use jk_stats::{Classification, StatSummary, curve_points, evaluate, sigma_band};

pub fn run(wins: u32, height: usize, output: Option<&Path>) -> Result<(), String> {
    if height == 0 {
        return Err("height must be positive".into());
    }

    let tally = super::hypothetical_tally(wins)?;
    let summary = evaluate(&tally, TOTAL_ROUNDS, WIN_PROBABILITY).map_err(|e| e.to_string())?;
    let chart = render(&summary, height);

    match output {
        Some(path) => {
            fs::write(path, &chart)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            println!("  Chart written to {}", path.display());
        }
        None => {
            let verdict = match summary.classification {
                Classification::Ordinary => "ordinary".yellow().bold(),
                Classification::HighOutlier => "high outlier".red().bold(),
                Classification::LowOutlier => "low outlier".cyan().bold(),
            };
            println!(
                "  {} {}",
                "Win distribution".bold(),
                format!("(mean {:.1}, sd {:.2})", summary.expected, summary.std_dev).dimmed()
            );
            println!("  Observed {wins} wins, Z {:+.2}: {verdict}", summary.z_score);
            println!();
            print!("{chart}");
        }
    }

    Ok(())
}

/// Render the fitted density as ASCII columns, with the observed win
/// count drawn as a full-height `#` column.
fn render(summary: &StatSummary, height: usize) -> String {
    let points = curve_points(summary.expected, summary.std_dev, TOTAL_ROUNDS);

    // Viewport covers +/-3 sd, clamped to the valid win range and widened
    // so the observed column is always in view.
    let wins_x = summary.wins as usize;
    let (lo3, hi3) = sigma_band(summary.expected, summary.std_dev, 3);
    let min_x = (lo3.floor().max(0.0) as usize).min(wins_x);
    let max_x = (hi3.ceil() as usize)
        .min(TOTAL_ROUNDS as usize)
        .max(wins_x);
    let window = &points[min_x..=max_x];

    let peak = window.iter().map(|p| p.1).fold(0.0, f64::max);

    let levels: Vec<usize> = window
        .iter()
        .map(|(_, y)| ((y / peak) * height as f64).round() as usize)
        .collect();

    let mut out = String::new();
    for row in (1..=height).rev() {
        out.push_str("  |");
        for (i, level) in levels.iter().enumerate() {
            let x = min_x + i;
            if x == wins_x {
                out.push('#');
            } else if *level >= row {
                out.push('*');
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  +");
    out.push_str(&"-".repeat(levels.len()));
    out.push('\n');

    let (lo1, hi1) = sigma_band(summary.expected, summary.std_dev, 1);
    let (lo2, hi2) = sigma_band(summary.expected, summary.std_dev, 2);
    out.push_str(&format!("  x from {min_x} to {max_x} wins\n"));
    out.push_str(&format!(
        "  mean {:.2}   +/-1 sd [{:.2}, {:.2}]   +/-2 sd [{:.2}, {:.2}]\n",
        summary.expected, lo1, hi1, lo2, hi2
    ));
    out.push_str(&format!(
        "  observed {} wins ({})\n",
        summary.wins, summary.classification
    ));
    out
}
