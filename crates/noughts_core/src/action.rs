//! Move rejection reasons.
//!
//! Rejected moves are routine (misclicks, impatient keypresses), so they
//! are returned as values and never abort a round.

use crate::Mark;
use derive_more::{Display, Error};

/// Why a move request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// The index does not name a cell.
    #[display("Square {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The round has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The requester does not hold the turn; carries the mark to move.
    #[display("It's {}'s turn", _0)]
    WrongTurn(#[error(not(source))] Mark),

    /// The computer's move is pending; input is locked until it lands.
    #[display("Computer is thinking")]
    OpponentThinking,
}
