//! CLI frontend for the JankenLab match simulator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jk",
    about = "JankenLab — rock-paper-scissors with a statistical verdict",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive 90-round match
    Play {
        /// RNG seed for reproducible computer hands
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Auto-play seeded matches and tabulate their verdicts
    Simulate {
        /// Number of matches to play
        #[arg(short, long, default_value = "10")]
        matches: u64,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print every round of every match
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evaluate a hypothetical final win count
    Evaluate {
        /// Final number of wins out of the 90 rounds
        wins: u32,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the win-distribution chart for a final win count
    Chart {
        /// Final number of wins out of the 90 rounds
        wins: u32,

        /// Plot height in rows
        #[arg(long, default_value = "12")]
        height: usize,

        /// Write the chart to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Simulate {
            matches,
            seed,
            verbose,
        } => commands::simulate::run(matches, seed, verbose),
        Commands::Evaluate { wins, json } => commands::evaluate::run(wins, json),
        Commands::Chart {
            wins,
            height,
            output,
        } => commands::chart::run(wins, height, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
