//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the
//! transition engine so status can be recomputed from any stored board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_line, LINES};

use crate::{Board, GameStatus};
use tracing::instrument;

/// No line can be complete with fewer marks than this.
const MIN_MARKS_FOR_LINE: usize = 5;

/// Classifies the board as running, won, or drawn.
///
/// If both marks somehow hold a line, `X_WON` is reported.
#[instrument(fields(board = %board))]
pub fn classify(board: &Board) -> GameStatus {
    if board.filled_count() < MIN_MARKS_FOR_LINE {
        return GameStatus::Running;
    }

    if let Some(winner) = check_winner(board) {
        GameStatus::won_by(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Running
    }
}
