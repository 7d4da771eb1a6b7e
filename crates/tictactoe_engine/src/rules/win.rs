//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 index triples that win the game.
pub const LINES: [[usize; 3]; 8] = [
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

/// Checks whether `mark` occupies all three cells of any line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&pos| board.get(pos) == Some(Cell::Occupied(mark)))
    })
}

/// Checks if there is a winner on the board.
///
/// Marks are checked in order X then O, so X wins a tie.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| has_line(board, mark))
}
