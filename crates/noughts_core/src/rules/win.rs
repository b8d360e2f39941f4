//! Win detection.

use crate::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals, in that order.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first pattern (declaration order) fully held by `mark`.
#[instrument(level = "trace", skip(board))]
pub fn detect_win(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    let held = Some(Cell::Occupied(mark));
    WIN_PATTERNS
        .into_iter()
        .find(|line| line.iter().all(|&i| board.get(i) == held))
}

/// Checks whether placing `mark` at the empty cell `index` completes a pattern.
///
/// Returns `false` for occupied or out-of-range cells.
#[instrument(level = "trace", skip(board))]
pub fn completes_line(board: &Board, index: usize, mark: Mark) -> bool {
    board.is_empty(index)
        && WIN_PATTERNS
            .iter()
            .any(|line| fills_line(board, line, index, mark))
}

/// First empty cell, scanning patterns in declaration order, where `mark`
/// would complete that pattern.
#[instrument(level = "trace", skip(board))]
pub fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    WIN_PATTERNS.iter().find_map(|line| {
        line.iter()
            .copied()
            .find(|&i| board.is_empty(i) && fills_line(board, line, i, mark))
    })
}

/// `line` contains `index` and every other cell of it holds `mark`.
fn fills_line(board: &Board, line: &[usize; 3], index: usize, mark: Mark) -> bool {
    let held = Some(Cell::Occupied(mark));
    line.contains(&index) && line.iter().all(|&i| i == index || board.get(i) == held)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_win(&Board::new(), Mark::X), None);
        assert_eq!(detect_win(&Board::new(), Mark::O), None);
    }

    #[test]
    fn test_top_row() {
        let b = board("XXX OO_ ___");
        assert_eq!(detect_win(&b, Mark::X), Some([0, 1, 2]));
        assert_eq!(detect_win(&b, Mark::O), None);
    }

    #[test]
    fn test_column_and_diagonal() {
        assert_eq!(detect_win(&board("_O_ XOX _O_"), Mark::O), Some([1, 4, 7]));
        assert_eq!(detect_win(&board("__O _O_ OXX"), Mark::O), Some([2, 4, 6]));
    }

    #[test]
    fn test_first_pattern_in_declaration_order() {
        // Top row and left column both held; the row is declared first.
        let b = board("XXX X__ X__");
        assert_eq!(detect_win(&b, Mark::X), Some([0, 1, 2]));
    }

    #[test]
    fn test_completes_line() {
        let b = board("XX_ ___ ___");
        assert!(completes_line(&b, 2, Mark::X));
        assert!(!completes_line(&b, 2, Mark::O));
        assert!(!completes_line(&b, 0, Mark::X));
        assert!(!completes_line(&b, 5, Mark::X));
        assert!(!completes_line(&b, 42, Mark::X));
    }

    #[test]
    fn test_winning_cell_uses_pattern_order() {
        // O can win at 2 (top row) or at 6 (left column); rows come first.
        let b = board("OO_ O__ ___");
        assert_eq!(winning_cell(&b, Mark::O), Some(2));
        // Gap in the middle of a line.
        assert_eq!(winning_cell(&board("X_X ___ ___"), Mark::X), Some(1));
        assert_eq!(winning_cell(&board("X__ ___ ___"), Mark::X), None);
        // Cell 0 wins via the left column, which is scanned after the top row.
        assert_eq!(winning_cell(&board("__O X__ X__"), Mark::X), Some(0));
    }
}
