//! Presentation contract.

use crate::{Board, Mark, Mode, Outcome};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to redraw after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Current board.
    pub board: Board,
    /// Mark expected to move next (the last mover once the round is over).
    pub turn: Mark,
    /// Session mode.
    pub mode: Mode,
    /// Round result, once decided.
    pub outcome: Option<Outcome>,
    /// Cells to highlight on a win.
    pub winning_line: Option<[usize; 3]>,
    /// The computer is about to move; human input is locked.
    pub opponent_pending: bool,
}

impl BoardView {
    /// One-line status text for the view.
    pub fn status(&self) -> String {
        match (&self.outcome, self.mode.computer()) {
            (Some(outcome), Some(computer)) => match outcome.winner() {
                Some(mark) if mark == computer => format!("Computer ({}) wins", mark),
                Some(mark) => format!("You ({}) win", mark),
                None => "Tie".to_string(),
            },
            (Some(outcome), None) => outcome.to_string(),
            (None, _) if self.opponent_pending => "Computer is thinking...".to_string(),
            (None, _) => format!("{}'s turn", self.turn),
        }
    }
}

/// Receives a fresh view after every state change.
pub trait Renderer {
    /// Redraws from `view`.
    fn render(&mut self, view: &BoardView);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, view: &BoardView) {
        (**self).render(view)
    }
}

/// Renderer that discards every view.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &BoardView) {}
}
