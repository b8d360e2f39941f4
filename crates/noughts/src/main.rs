//! Noughts - command-line entry point.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, GameConfig, StatsRepository, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            human,
            db_path,
            delay_ms,
            seed,
        } => {
            let config = GameConfig::load_or_default(&config)?
                .with_overrides(mode, human, db_path, delay_ms, seed);
            run_tui(&config)
        }
        Command::Stats { db_path } => print_stats(db_path),
    }
}

/// Prints the three counters.
fn print_stats(db_path: String) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let repo = StatsRepository::open(db_path)?;
    let stats = repo.load_stats()?;
    info!(total = stats.total(), "Printing stats");

    println!("Human wins:    {}", stats.human_wins());
    println!("Computer wins: {}", stats.computer_wins());
    println!("Ties:          {}", stats.ties());
    if stats.total() > 0 {
        println!("Win rate:      {:.1}%", stats.win_rate());
    }
    Ok(())
}
