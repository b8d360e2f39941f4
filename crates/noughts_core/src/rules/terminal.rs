//! Terminal-state evaluation.

use super::{detect_win, is_full};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// `mark` holds the pattern `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed pattern, for highlighting.
        line: [usize; 3],
    },
    /// Full board with no winner.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Tie => None,
        }
    }

    /// Returns the winning pattern if there is one.
    pub fn line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { mark, .. } => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Evaluates the board right after `last_mover` played.
///
/// Only the mark that just moved can have just won, so only it is checked.
/// A win takes precedence over a full board.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board, last_mover: Mark) -> Option<Outcome> {
    if let Some(line) = detect_win(board, last_mover) {
        return Some(Outcome::Win {
            mark: last_mover,
            line,
        });
    }
    is_full(board).then_some(Outcome::Tie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress() {
        let board: Board = "XO_ ___ ___".parse().unwrap();
        assert_eq!(is_terminal(&board, Mark::O), None);
        assert_eq!(is_terminal(&board, Mark::X), None);
    }

    #[test]
    fn test_win_carries_line() {
        let board: Board = "OX_ OX_ O__".parse().unwrap();
        let outcome = is_terminal(&board, Mark::O).unwrap();
        assert_eq!(outcome.winner(), Some(Mark::O));
        assert_eq!(outcome.line(), Some([0, 3, 6]));
        assert_eq!(outcome.to_string(), "O wins");
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert_eq!(
            is_terminal(&board, Mark::X),
            Some(Outcome::Win { mark: Mark::X, line: [0, 4, 8] })
        );
    }

    #[test]
    fn test_tie() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(is_terminal(&board, Mark::O), Some(Outcome::Tie));
        assert_eq!(Outcome::Tie.winner(), None);
    }

    #[test]
    fn test_only_last_mover_checked() {
        let board: Board = "XX_ OOO X__".parse().unwrap();
        assert_eq!(is_terminal(&board, Mark::X), None);
        assert_eq!(is_terminal(&board, Mark::O).and_then(|o| o.winner()), Some(Mark::O));
    }
}
