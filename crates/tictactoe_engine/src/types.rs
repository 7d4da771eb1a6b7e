//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X.
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

    /// Character used for this mark in the board text.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Character used for this cell in the board text.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => crate::board::EMPTY_SYMBOL,
            Cell::Occupied(mark) => mark.symbol(),
        }
    }

    /// Parses a single board character.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' => Some(Cell::Occupied(Mark::X)),
            'O' => Some(Cell::Occupied(Mark::O)),
            crate::board::EMPTY_SYMBOL => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Status of a game, stored and served as `RUNNING`, `X_WON`, `O_WON` or `DRAW`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Game is ongoing.
    Running,
    /// X completed a line.
    XWon,
    /// O completed a line.
    OWon,
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Status for a win by the given mark.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
        }
    }

    /// Returns true for any status other than [`GameStatus::Running`].
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Running
    }
}
