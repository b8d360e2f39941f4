//! Noughts core - tic-tac-toe rules and a heuristic computer opponent
//!
//! # Architecture
//!
//! - **Rules**: pure board queries (win, full board, terminal state)
//! - **Opponent**: one-ply priority policy with injected randomness
//! - **Session**: round state machine driving the two above
//! - **Collaborators**: [`StatsStore`] and [`Renderer`] traits, implemented
//!   by the application
//!
//! # Example
//!
//! ```
//! use noughts_core::{MemoryStats, Mode, NullRenderer, RandomPicker, Session, Transition};
//!
//! let mut session = Session::new(
//!     Mode::VsComputer { human: noughts_core::Mark::X },
//!     RandomPicker::seeded(1),
//!     MemoryStats::new(),
//!     NullRenderer,
//! );
//! assert_eq!(session.request_move(0), Ok(Transition::OpponentPending));
//! session.play_opponent_turn().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod position;
mod render;
mod session;
mod stats;
mod types;

// Public modules: free functions are used by path
pub mod opponent;
pub mod rules;

// Crate-level exports - Domain types
pub use action::MoveError;
pub use position::Position;
pub use rules::Outcome;
pub use types::{Board, CELL_COUNT, Cell, Mark, ParseBoardError};

// Crate-level exports - Opponent
pub use opponent::{DefaultPicker, HeuristicOpponent, IndexPicker, RandomPicker, Rule};

// Crate-level exports - Session and collaborators
pub use render::{BoardView, NullRenderer, Renderer};
pub use session::{InputEvent, Mode, Session, Transition};
pub use stats::{MemoryStats, Stats, StatsError, StatsStore, Tally};
