//! Game configuration: TOML file, overridden by command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{Mark, Mode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Mode as written in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    /// Two people share the keyboard.
    TwoPlayer,
    /// Play against the computer.
    #[default]
    VsComputer,
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Two-player or vs-computer.
    #[serde(default)]
    mode: ModeSetting,

    /// The human's mark in vs-computer mode.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// SQLite database holding the statistics.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// Pause before the computer's move lands, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Seed for the computer's random choices; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

// The computer opens unless the player asks for X.
fn default_human_mark() -> Mark {
    Mark::O
}

fn default_db_path() -> String {
    "noughts.db".to_string()
}

fn default_thinking_delay_ms() -> u64 {
    600
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: ModeSetting::default(),
            human_mark: default_human_mark(),
            db_path: default_db_path(),
            thinking_delay_ms: default_thinking_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides; `None` keeps the file value.
    pub fn with_overrides(
        mut self,
        mode: Option<ModeSetting>,
        human_mark: Option<Mark>,
        db_path: Option<String>,
        thinking_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(mark) = human_mark {
            self.human_mark = mark;
        }
        if let Some(path) = db_path {
            self.db_path = path;
        }
        if let Some(ms) = thinking_delay_ms {
            self.thinking_delay_ms = ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The session mode these settings describe.
    pub fn session_mode(&self) -> Mode {
        match self.mode {
            ModeSetting::TwoPlayer => Mode::TwoPlayer,
            ModeSetting::VsComputer => Mode::VsComputer {
                human: self.human_mark,
            },
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
