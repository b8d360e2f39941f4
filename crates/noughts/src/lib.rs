//! Noughts - terminal tic-tac-toe with persistent statistics
//!
//! Game logic lives in [`noughts_core`]; this crate supplies the
//! collaborators around it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings overridden by command-line flags
//! - **Db**: diesel/SQLite [`StatsRepository`] implementing
//!   [`noughts_core::StatsStore`]
//! - **Cli**: clap command definitions
//! - **Tui**: ratatui front end driving a [`noughts_core::Session`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod db;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, ModeSetting};
pub use db::{DbError, DbErrorKind, StatsRepository};
pub use tui::{App, Control, run_tui};
