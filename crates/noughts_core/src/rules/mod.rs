//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They hold no state, so the session
//! controller and the opponent policy can both call them freely.

pub mod draw;
pub mod terminal;
pub mod win;

pub use draw::is_full;
pub use terminal::{Outcome, is_terminal};
pub use win::{WIN_PATTERNS, completes_line, detect_win, winning_cell};

use crate::{Board, Mark, MoveError};
use tracing::instrument;

/// Returns a copy of `board` with `mark` placed at `index`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// [`MoveError::SquareOccupied`] or [`MoveError::OutOfBounds`].
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    let mut next = *board;
    next.place(index, mark)?;
    Ok(next)
}
