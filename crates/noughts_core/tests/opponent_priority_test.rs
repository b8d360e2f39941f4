//! Tests for the opponent's rule priority.

use noughts_core::opponent::{CORNERS, choose_move, choose_move_with_rule};
use noughts_core::{Board, IndexPicker, Mark, RandomPicker, Rule};

/// Records what it was offered and takes the first candidate.
#[derive(Default)]
struct SpyPicker {
    offered: Vec<Vec<usize>>,
}

impl IndexPicker for SpyPicker {
    fn pick(&mut self, candidates: &[usize]) -> usize {
        self.offered.push(candidates.to_vec());
        candidates[0]
    }
}

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_blocks_human_line() {
    let mut picker = SpyPicker::default();
    let b = board("XX_ ___ ___");
    assert_eq!(choose_move(&b, Mark::O, Mark::X, &mut picker), 2);
    assert!(picker.offered.is_empty());
}

#[test]
fn test_completes_own_line() {
    let mut picker = SpyPicker::default();
    let b = board("OO_ ___ ___");
    assert_eq!(
        choose_move_with_rule(&b, Mark::O, Mark::X, &mut picker),
        (2, Rule::WinNow)
    );
}

#[test]
fn test_takes_center_on_empty_board() {
    let mut picker = SpyPicker::default();
    assert_eq!(choose_move(&Board::new(), Mark::O, Mark::X, &mut picker), 4);
    assert_eq!(choose_move(&Board::new(), Mark::X, Mark::O, &mut picker), 4);
}

#[test]
fn test_corner_when_center_taken() {
    let mut picker = SpyPicker::default();
    let b = board("___ _X_ ___");
    let (index, rule) = choose_move_with_rule(&b, Mark::O, Mark::X, &mut picker);
    assert_eq!(rule, Rule::Corner);
    assert!(CORNERS.contains(&index));
    assert_eq!(picker.offered, vec![vec![0, 2, 6, 8]]);
}

#[test]
fn test_corner_offers_only_empty_corners() {
    let mut picker = SpyPicker::default();
    let b = board("X__ _O_ ___");
    let (_, rule) = choose_move_with_rule(&b, Mark::O, Mark::X, &mut picker);
    assert_eq!(rule, Rule::Corner);
    assert_eq!(picker.offered, vec![vec![2, 6, 8]]);
}

#[test]
fn test_edge_when_center_and_corners_taken() {
    let mut picker = SpyPicker::default();
    let b = board("X_O _X_ O_X");
    let (index, rule) = choose_move_with_rule(&b, Mark::O, Mark::X, &mut picker);
    assert_eq!(rule, Rule::Any);
    assert!([1, 3, 5, 7].contains(&index));
    assert_eq!(picker.offered, vec![vec![1, 3, 5, 7]]);
}

#[test]
fn test_random_picker_covers_every_corner() {
    let b = board("___ _X_ ___");
    let mut picker = RandomPicker::seeded(42);
    let mut seen = [false; 9];
    for _ in 0..200 {
        let index = choose_move(&b, Mark::O, Mark::X, &mut picker);
        assert!(CORNERS.contains(&index));
        seen[index] = true;
    }
    assert!(CORNERS.iter().all(|&i| seen[i]));
}

#[test]
fn test_fork_beats_one_ply_policy() {
    // X holds two open lines at once (top row and left column); the policy
    // blocks the first in pattern order and leaves the other open.
    let mut picker = SpyPicker::default();
    let b = board("X_X _O_ X_O");
    let (index, rule) = choose_move_with_rule(&b, Mark::O, Mark::X, &mut picker);
    assert_eq!((index, rule), (1, Rule::Block));

    let mut after = b;
    after.place(index, Mark::O).unwrap();
    assert_eq!(noughts_core::rules::winning_cell(&after, Mark::X), Some(3));
}
