//! Tests for board rules over exhaustively enumerated boards.

use noughts_core::rules::{WIN_PATTERNS, apply_move, detect_win, is_full};
use noughts_core::{Board, Cell, Mark};

/// Every assignment of {empty, X, O} to the nine cells (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

fn has_three_in_a_row(board: &Board, mark: Mark) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Occupied(mark))))
}

#[test]
fn test_detect_win_matches_three_in_a_row() {
    for board in all_boards() {
        for mark in [Mark::X, Mark::O] {
            let found = detect_win(&board, mark);
            assert_eq!(found.is_some(), has_three_in_a_row(&board, mark), "{board}");
            if let Some(line) = found {
                assert!(WIN_PATTERNS.contains(&line));
                assert!(line.iter().all(|&i| board.get(i) == Some(Cell::Occupied(mark))));
            }
        }
    }
}

#[test]
fn test_is_full_iff_no_empty_cell() {
    for board in all_boards() {
        let expected = board.cells().iter().all(|c| *c != Cell::Empty);
        assert_eq!(is_full(&board), expected);
    }
}

#[test]
fn test_apply_move_legality() {
    let board: Board = "XO_ ___ __X".parse().unwrap();
    for index in 0..9 {
        match apply_move(&board, index, Mark::O) {
            Ok(next) => {
                assert!(board.is_empty(index));
                let changed: Vec<usize> = (0..9).filter(|&i| next.get(i) != board.get(i)).collect();
                assert_eq!(changed, vec![index]);
                assert_eq!(next.get(index), Some(Cell::Occupied(Mark::O)));
            }
            Err(_) => assert!(!board.is_empty(index)),
        }
    }
}

#[test]
fn test_win_patterns_are_rows_columns_diagonals() {
    assert_eq!(WIN_PATTERNS.len(), 8);
    assert_eq!(&WIN_PATTERNS[..3], &[[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    assert_eq!(&WIN_PATTERNS[3..6], &[[0, 3, 6], [1, 4, 7], [2, 5, 8]]);
    assert_eq!(&WIN_PATTERNS[6..], &[[0, 4, 8], [2, 4, 6]]);
}
