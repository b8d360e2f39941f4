//! Round state machine.
//!
//! [`Session`] owns everything that changes during play (board, turn,
//! outcome, the pending-opponent lock) and drives the pure rules and the
//! opponent policy. Drivers feed it [`InputEvent`]s and read back a
//! [`Transition`]; the stats store and renderer are told about every
//! change as it happens.

use crate::opponent::{HeuristicOpponent, IndexPicker};
use crate::rules::is_terminal;
use crate::{Board, BoardView, Mark, MoveError, Outcome, Renderer, StatsStore, Tally};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays which mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Two people share the board.
    TwoPlayer,
    /// One person against the heuristic opponent.
    VsComputer {
        /// The person's mark; the computer plays the other one.
        human: Mark,
    },
}

impl Mode {
    /// The computer's mark, if the computer plays.
    pub fn computer(self) -> Option<Mark> {
        match self {
            Mode::TwoPlayer => None,
            Mode::VsComputer { human } => Some(human.opponent()),
        }
    }

    /// Stats counter for a finished round, or `None` in two-player mode.
    pub fn tally(self, outcome: &Outcome) -> Option<Tally> {
        let Mode::VsComputer { human } = self else {
            return None;
        };
        Some(match outcome.winner() {
            Some(mark) if mark == human => Tally::HumanWin,
            Some(_) => Tally::ComputerWin,
            None => Tally::Tie,
        })
    }
}

/// Abstract input the driver forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A person asked to mark a cell.
    MoveRequested(usize),
    /// Abandon the round and start over.
    ResetRequested,
    /// Switch mode; starts a new round.
    ModeSelected(Mode),
}

/// What the session did in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A fresh round is waiting for X.
    RoundStarted,
    /// A move landed; `turn` is next.
    Continue {
        /// Mark to move next.
        turn: Mark,
    },
    /// The computer is due to move; call [`Session::play_opponent_turn`].
    OpponentPending,
    /// The round ended.
    Finished(Outcome),
}

/// One game session: mode, the current round, and its collaborators.
#[derive(Debug)]
pub struct Session<P, S, R> {
    mode: Mode,
    board: Board,
    turn: Mark,
    outcome: Option<Outcome>,
    history: Vec<usize>,
    opponent_pending: bool,
    opponent: HeuristicOpponent<P>,
    stats: S,
    renderer: R,
}

impl<P, S, R> Session<P, S, R>
where
    P: IndexPicker,
    S: StatsStore,
    R: Renderer,
{
    /// Creates a session and starts its first round.
    #[instrument(skip(picker, stats, renderer))]
    pub fn new(mode: Mode, picker: P, stats: S, renderer: R) -> Self {
        let mut session = Self {
            mode,
            board: Board::new(),
            turn: Mark::X,
            outcome: None,
            history: Vec::new(),
            opponent_pending: false,
            opponent: HeuristicOpponent::new(picker),
            stats,
            renderer,
        };
        session.start_round();
        session
    }

    /// Dispatches one input event.
    ///
    /// # Errors
    ///
    /// Only [`InputEvent::MoveRequested`] can be rejected; see
    /// [`Session::request_move`].
    pub fn handle(&mut self, event: InputEvent) -> Result<Transition, MoveError> {
        match event {
            InputEvent::MoveRequested(index) => self.request_move(index),
            InputEvent::ResetRequested => Ok(self.start_round()),
            InputEvent::ModeSelected(mode) => Ok(self.select_mode(mode)),
        }
    }

    /// Discards the current round and starts a new one with X to move.
    ///
    /// When the computer plays X it is due to move immediately.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn start_round(&mut self) -> Transition {
        self.board = Board::new();
        self.turn = Mark::X;
        self.outcome = None;
        self.history.clear();
        self.opponent_pending = self.mode.computer() == Some(Mark::X);
        info!("Round started");
        self.redraw();

        if self.opponent_pending {
            Transition::OpponentPending
        } else {
            Transition::RoundStarted
        }
    }

    /// Switches mode and starts a new round.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) -> Transition {
        self.mode = mode;
        self.start_round()
    }

    /// Places the current mark for a person.
    ///
    /// # Errors
    ///
    /// Rejections leave the session untouched:
    /// [`MoveError::GameOver`] after the round ended,
    /// [`MoveError::OpponentThinking`] while the computer's move is pending,
    /// [`MoveError::SquareOccupied`] / [`MoveError::OutOfBounds`] for a bad cell.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn request_move(&mut self, index: usize) -> Result<Transition, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.opponent_pending {
            return Err(MoveError::OpponentThinking);
        }
        // The computer's turn always sets the pending lock above, so this
        // only trips if that invariant breaks.
        debug_assert_ne!(self.mode.computer(), Some(self.turn), "computer turn without pending lock");
        if self.mode.computer() == Some(self.turn) {
            return Err(MoveError::WrongTurn(self.turn));
        }

        let mark = self.turn;
        self.board.place(index, mark)?;
        Ok(self.advance(index, mark))
    }

    /// Lets the computer make its pending move.
    ///
    /// The driver decides how long the computer appears to think before
    /// calling this.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after the round ended, [`MoveError::WrongTurn`]
    /// when no computer move is pending.
    #[instrument(skip(self))]
    pub fn play_opponent_turn(&mut self) -> Result<Transition, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.opponent_pending {
            return Err(MoveError::WrongTurn(self.turn));
        }

        let mark = self.turn;
        let index = self.opponent.choose(&self.board, mark);
        self.board.place(index, mark)?;
        self.opponent_pending = false;
        Ok(self.advance(index, mark))
    }

    /// Evaluates the board after `mark` played `index`.
    fn advance(&mut self, index: usize, mark: Mark) -> Transition {
        self.history.push(index);
        debug!(index, %mark, moves = self.history.len(), "Move applied");

        let transition = match is_terminal(&self.board, mark) {
            Some(outcome) => {
                info!(%outcome, moves = self.history.len(), "Round finished");
                self.outcome = Some(outcome);
                self.record(&outcome);
                Transition::Finished(outcome)
            }
            None => {
                self.turn = mark.opponent();
                if self.mode.computer() == Some(self.turn) {
                    self.opponent_pending = true;
                    Transition::OpponentPending
                } else {
                    Transition::Continue { turn: self.turn }
                }
            }
        };

        self.redraw();
        transition
    }

    /// Reports a finished round to the stats store; store failures never
    /// end the session.
    fn record(&mut self, outcome: &Outcome) {
        let Some(tally) = self.mode.tally(outcome) else {
            return;
        };
        match self.stats.record(tally) {
            Ok(()) => debug!(key = tally.key(), "Outcome recorded"),
            Err(e) => warn!(error = %e, key = tally.key(), "Failed to record outcome"),
        }
    }

    fn redraw(&mut self) {
        let view = self.snapshot();
        self.renderer.render(&view);
    }

    /// Current view for rendering.
    pub fn snapshot(&self) -> BoardView {
        BoardView {
            board: self.board,
            turn: self.turn,
            mode: self.mode,
            outcome: self.outcome,
            winning_line: self.outcome.and_then(|o| o.line()),
            opponent_pending: self.opponent_pending,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move (the last mover once the round is over).
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Round result, once decided.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Cells played this round, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// The computer's move is due and human input is locked.
    pub fn is_opponent_pending(&self) -> bool {
        self.opponent_pending
    }

    /// The stats store.
    pub fn stats(&self) -> &S {
        &self.stats
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
