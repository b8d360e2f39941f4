//! Command-line interface for noughts.

use crate::config::ModeSetting;
use clap::{Parser, Subcommand};
use noughts_core::Mark;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the config file
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Game mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<ModeSetting>,

        /// Your mark against the computer: X or O
        #[arg(long)]
        human: Option<Mark>,

        /// Path to the statistics database
        #[arg(long)]
        db_path: Option<String>,

        /// Computer thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print cumulative statistics
    Stats {
        /// Path to the statistics database
        #[arg(long, default_value = "noughts.db")]
        db_path: String,
    },
}
