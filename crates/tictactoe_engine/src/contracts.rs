//! Preconditions a submitted board must satisfy against the stored one.
//!
//! Each check is a small unit struct so the full rule set reads as a
//! composition, in the order the checks are applied.

use crate::{rules, Board, Cell, Mark, MoveError};
use tracing::{instrument, warn};

/// Precondition: the stored game is still running.
pub struct GameStillRunning;

impl GameStillRunning {
    /// Fails with [`MoveError::GameOver`] on a won or drawn board.
    #[instrument(skip_all)]
    pub fn check(old: &Board) -> Result<(), MoveError> {
        if rules::classify(old).is_terminal() {
            warn!(board = %old, "Move submitted to finished game");
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: at least one cell differs from the stored board.
pub struct BoardChanged;

impl BoardChanged {
    /// Fails with [`MoveError::NoMove`].
    #[instrument(skip_all)]
    pub fn check(old: &Board, new: &Board) -> Result<(), MoveError> {
        if old == new {
            Err(MoveError::NoMove)
        } else {
            Ok(())
        }
    }
}

/// Precondition: every marked cell of the stored board is unchanged.
pub struct NoOverwrite;

impl NoOverwrite {
    /// Fails with [`MoveError::Overwrite`] at the first replaced cell.
    #[instrument(skip_all)]
    pub fn check(old: &Board, new: &Board) -> Result<(), MoveError> {
        let replaced = old
            .cells()
            .iter()
            .zip(new.cells())
            .position(|(before, after)| *before != Cell::Empty && before != after);

        match replaced {
            Some(pos) => {
                warn!(pos, "Submitted board replaces an existing mark");
                Err(MoveError::Overwrite)
            }
            None => Ok(()),
        }
    }
}

/// Precondition: X and O counts differ by at most one.
pub struct SingleMove;

impl SingleMove {
    /// Fails with [`MoveError::MultiMove`].
    #[instrument(skip_all)]
    pub fn check(new: &Board) -> Result<(), MoveError> {
        let x_count = new.count_marks(Mark::X);
        let o_count = new.count_marks(Mark::O);
        if x_count.abs_diff(o_count) > 1 {
            warn!(x_count, o_count, "Board consistency violated");
            Err(MoveError::MultiMove)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the user's mark is exactly one ahead of the opponent's.
pub struct UsersTurn;

impl UsersTurn {
    /// Fails with [`MoveError::TurnOrder`].
    #[instrument(skip(new))]
    pub fn check(new: &Board, user: Mark) -> Result<(), MoveError> {
        let mine = new.count_marks(user);
        let theirs = new.count_marks(user.opponent());
        if mine == theirs + 1 {
            Ok(())
        } else {
            warn!(mine, theirs, "Turn order violated");
            Err(MoveError::TurnOrder)
        }
    }
}

/// Composite precondition for an edit submitted by the user.
pub struct LegalEdit;

impl LegalEdit {
    /// Validates all preconditions, failing on the first one broken.
    #[instrument(skip(old, new), fields(old = %old, new = %new))]
    pub fn check(old: &Board, new: &Board, user: Mark) -> Result<(), MoveError> {
        GameStillRunning::check(old)?;
        BoardChanged::check(old, new)?;
        NoOverwrite::check(old, new)?;
        SingleMove::check(new)?;
        UsersTurn::check(new, user)?;
        Ok(())
    }
}

/// Precondition for opening a game: exactly one mark on the board.
///
/// Returns the mark, which becomes the user's side.
pub struct OpeningMove;

impl OpeningMove {
    /// Fails with [`MoveError::InvalidMove`] unless one cell is marked.
    #[instrument(skip_all, fields(board = %board))]
    pub fn check(board: &Board) -> Result<Mark, MoveError> {
        let mut marks = board.cells().iter().filter_map(|c| c.mark());
        match (marks.next(), marks.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(MoveError::InvalidMove),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(text: &str) -> Board {
        Board::decode(text).unwrap()
    }

    #[test]
    fn test_board_changed() {
        assert_eq!(BoardChanged::check(&b("-------XO"), &b("-------XO")), Err(MoveError::NoMove));
        assert!(BoardChanged::check(&b("-------XO"), &b("-O-----XO")).is_ok());
    }

    #[test]
    fn test_no_overwrite() {
        assert_eq!(NoOverwrite::check(&b("-------XO"), &b("-------OO")), Err(MoveError::Overwrite));
        assert_eq!(NoOverwrite::check(&b("-------XO"), &b("-------X-")), Err(MoveError::Overwrite));
        assert!(NoOverwrite::check(&b("-------XO"), &b("X------XO")).is_ok());
    }

    #[test]
    fn test_single_move() {
        assert_eq!(SingleMove::check(&b("XX-----XO")), Err(MoveError::MultiMove));
        assert!(SingleMove::check(&b("X------XO")).is_ok());
        assert!(SingleMove::check(&b("-------XO")).is_ok());
    }

    #[test]
    fn test_users_turn() {
        assert!(UsersTurn::check(&b("-O-----XO"), Mark::O).is_ok());
        assert_eq!(UsersTurn::check(&b("---X---XO"), Mark::O), Err(MoveError::TurnOrder));
        assert!(UsersTurn::check(&b("---X---XO"), Mark::X).is_ok());
        assert_eq!(UsersTurn::check(&b("-------XO"), Mark::X), Err(MoveError::TurnOrder));
    }

    #[test]
    fn test_game_still_running() {
        assert_eq!(GameStillRunning::check(&b("XXX-O-OXO")), Err(MoveError::GameOver));
        assert_eq!(GameStillRunning::check(&b("XOXXOOOXX")), Err(MoveError::GameOver));
        assert!(GameStillRunning::check(&b("XX--O-OXO")).is_ok());
    }

    #[test]
    fn test_opening_move() {
        assert_eq!(OpeningMove::check(&b("-X-------")), Ok(Mark::X));
        assert_eq!(OpeningMove::check(&b("--------O")), Ok(Mark::O));
        assert_eq!(OpeningMove::check(&b("---------")), Err(MoveError::InvalidMove));
        assert_eq!(OpeningMove::check(&b("X-------O")), Err(MoveError::InvalidMove));
    }

    #[test]
    fn test_legal_edit_reports_first_failure() {
        // Changed, overwrites index 7, and count gap is 2: overwrite wins
        assert_eq!(
            LegalEdit::check(&b("-------XO"), &b("O------OO"), Mark::O),
            Err(MoveError::Overwrite)
        );
        // Legal overwrite-free move but two O added
        assert_eq!(
            LegalEdit::check(&b("-------XO"), &b("OO-----XO"), Mark::O),
            Err(MoveError::MultiMove)
        );
    }
}
