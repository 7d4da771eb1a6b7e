//! 3x3 board and its 9-character text codec.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Cell, Mark, MoveError};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Character used for an empty cell in the board text.
pub const EMPTY_SYMBOL: char = '-';

/// 3x3 tic-tac-toe board.
///
/// The text form is the 9 cells in row-major order, e.g. `"X---O----"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from its cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Decodes the text form. Same as [`str::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Format`] unless the text is exactly 9
    /// characters drawn from `X`, `O` and `-`.
    #[instrument]
    pub fn decode(text: &str) -> Result<Self, MoveError> {
        text.parse()
    }

    /// Encodes the board into its text form.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Gets the cell at the given position, or `None` when out of bounds.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: usize, cell: Cell) -> Result<(), &'static str> {
        let slot = self.cells.get_mut(pos).ok_or("Position out of bounds")?;
        *slot = cell;
        Ok(())
    }

    /// Checks if the cell at `pos` is empty. Out-of-bounds positions are not.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Counts cells holding `mark`.
    pub fn count_marks(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(mark))
            .count()
    }

    /// Counts non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Indices of empty cells, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl FromStr for Board {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut chars = s.chars();

        for slot in cells.iter_mut() {
            let c = chars.next().ok_or(MoveError::Format)?;
            *slot = Cell::from_symbol(c).ok_or(MoveError::Format)?;
        }

        if chars.next().is_some() {
            return Err(MoveError::Format);
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Board {
    type Error = MoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}
