//! Heuristic computer opponent.
//!
//! A greedy one-ply policy: take a win, block a loss, then prefer the
//! center, a corner, and finally any cell. It does not look further
//! ahead, so a human who sets up two threats at once (a fork) beats it.

use crate::rules::winning_cell;
use crate::{Board, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Board center.
pub const CENTER: usize = 4;

/// The four corner cells.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Chooses one index out of a non-empty candidate list.
///
/// This is the only source of nondeterminism in the policy; tests supply
/// a deterministic picker and assert against the candidate set.
pub trait IndexPicker {
    /// Picks one of `candidates`. Must return a member of the slice.
    fn pick(&mut self, candidates: &[usize]) -> usize;
}

impl<P: IndexPicker + ?Sized> IndexPicker for &mut P {
    fn pick(&mut self, candidates: &[usize]) -> usize {
        (**self).pick(candidates)
    }
}

/// Production picker.
pub type DefaultPicker = RandomPicker<StdRng>;

/// Uniform picker backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Picker seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }

    /// Reproducible picker.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexPicker for RandomPicker<R> {
    fn pick(&mut self, candidates: &[usize]) -> usize {
        candidates[self.rng.random_range(0..candidates.len())]
    }
}

/// Which priority rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    /// Completes a line for the opponent.
    #[display("win")]
    WinNow,
    /// Occupies the human's winning cell.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Random empty corner.
    #[display("corner")]
    Corner,
    /// Random empty cell.
    #[display("any")]
    Any,
}

/// Picks a cell and reports which rule chose it.
///
/// # Panics
///
/// If the board has no empty cell, or if `picker` returns an index that
/// was not among the candidates it was offered. Either would otherwise
/// corrupt the board.
#[instrument(level = "debug", skip(board, picker))]
pub fn choose_move_with_rule<P: IndexPicker + ?Sized>(
    board: &Board,
    opponent: Mark,
    human: Mark,
    picker: &mut P,
) -> (usize, Rule) {
    let empty = board.empty_indices();
    assert!(!empty.is_empty(), "choose_move called on a full board");

    if let Some(index) = winning_cell(board, opponent) {
        return (index, Rule::WinNow);
    }
    if let Some(index) = winning_cell(board, human) {
        return (index, Rule::Block);
    }
    if board.is_empty(CENTER) {
        return (CENTER, Rule::Center);
    }

    let corners: Vec<usize> = CORNERS.into_iter().filter(|&i| board.is_empty(i)).collect();
    let (candidates, rule) = if corners.is_empty() {
        (empty, Rule::Any)
    } else {
        (corners, Rule::Corner)
    };

    let index = picker.pick(&candidates);
    assert!(
        candidates.contains(&index),
        "picker returned {index}, not one of {candidates:?}"
    );
    (index, rule)
}

/// Picks the opponent's cell on `board`.
///
/// # Panics
///
/// See [`choose_move_with_rule`].
pub fn choose_move<P: IndexPicker + ?Sized>(
    board: &Board,
    opponent: Mark,
    human: Mark,
    picker: &mut P,
) -> usize {
    choose_move_with_rule(board, opponent, human, picker).0
}

/// The policy bundled with its randomness source.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<P> {
    picker: P,
    last_rule: Option<Rule>,
}

impl<P: IndexPicker> HeuristicOpponent<P> {
    /// Creates an opponent drawing randomness from `picker`.
    pub fn new(picker: P) -> Self {
        Self {
            picker,
            last_rule: None,
        }
    }

    /// Chooses a move for `opponent` against `opponent.opponent()`.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board, opponent: Mark) -> usize {
        let (index, rule) =
            choose_move_with_rule(board, opponent, opponent.opponent(), &mut self.picker);
        debug!(index, %rule, "Opponent chose cell");
        self.last_rule = Some(rule);
        index
    }

    /// Rule behind the most recent move.
    pub fn last_rule(&self) -> Option<Rule> {
        self.last_rule
    }
}
