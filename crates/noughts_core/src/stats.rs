//! Match statistics contract.
//!
//! The core only reports finished vs-computer rounds; durability is the
//! store's business.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Counter a finished vs-computer round increments.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Tally {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Full board, no line.
    Tie,
}

impl Tally {
    /// Storage key for this counter.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Snapshot of the three counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Stats {
    human_wins: u64,
    computer_wins: u64,
    ties: u64,
}

impl Stats {
    /// Creates a snapshot from explicit counts.
    pub fn new(human_wins: u64, computer_wins: u64, ties: u64) -> Self {
        Self {
            human_wins,
            computer_wins,
            ties,
        }
    }

    /// Count for one tally.
    pub fn get(&self, tally: Tally) -> u64 {
        match tally {
            Tally::HumanWin => self.human_wins,
            Tally::ComputerWin => self.computer_wins,
            Tally::Tie => self.ties,
        }
    }

    /// Total completed rounds.
    pub fn total(&self) -> u64 {
        self.human_wins + self.computer_wins + self.ties
    }

    /// Human win rate as a percentage (0.0-100.0).
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.human_wins as f64 / total as f64) * 100.0,
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {}   Computer: {}   Ties: {}",
            self.human_wins, self.computer_wins, self.ties
        )
    }
}

/// Stats store failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Stats error: {} at {}:{}", message, file, line)]
pub struct StatsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StatsError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Durable win/loss/tie counters.
pub trait StatsStore {
    /// Increments one counter by exactly one.
    fn record(&mut self, tally: Tally) -> Result<(), StatsError>;

    /// Current counter values.
    fn totals(&self) -> Result<Stats, StatsError>;
}

impl<S: StatsStore + ?Sized> StatsStore for &mut S {
    fn record(&mut self, tally: Tally) -> Result<(), StatsError> {
        (**self).record(tally)
    }

    fn totals(&self) -> Result<Stats, StatsError> {
        (**self).totals()
    }
}

/// In-process counters. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStats {
    counts: HashMap<Tally, u64>,
}

impl MemoryStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStats {
    #[instrument(skip(self))]
    fn record(&mut self, tally: Tally) -> Result<(), StatsError> {
        let count = self.counts.entry(tally).or_default();
        *count += 1;
        debug!(key = tally.key(), count = *count, "Tally recorded");
        Ok(())
    }

    fn totals(&self) -> Result<Stats, StatsError> {
        let get = |t: Tally| self.counts.get(&t).copied().unwrap_or_default();
        Ok(Stats::new(
            get(Tally::HumanWin),
            get(Tally::ComputerWin),
            get(Tally::Tie),
        ))
    }
}
