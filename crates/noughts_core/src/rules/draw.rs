//! Full-board detection.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a tie.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
