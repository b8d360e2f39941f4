//! Core domain types for tic-tac-toe.

use crate::MoveError;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A mark a player places on a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board, cells in row-major order (`index = row * 3 + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Places `mark` at `index` in place.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for an index past the last cell,
    /// [`MoveError::SquareOccupied`] when the cell already holds a mark.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cells.get_mut(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(MoveError::SquareOccupied(index)),
            Some(cell) => {
                *cell = Cell::Occupied(mark);
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as three rows; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board '{}': {}", input, reason)]
pub struct ParseBoardError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells from `X`, `O`, and `_`/`.`/`-` (empty).
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseBoardError {
            input: s.to_string(),
            reason,
        };

        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '_' | '.' | '-' => Cell::Empty,
                _ => return Err(err("unexpected character")),
            };
            if count == CELL_COUNT {
                return Err(err("more than nine cells"));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(err("fewer than nine cells"));
        }
        Ok(Self { cells })
    }
}
