//! Game-state transitions: opening a game and applying a user move.
//!
//! Both entry points validate the submitted board, let the automatic
//! opponent answer while the game is still running, and classify the
//! result. They never touch storage and never return a partial result.

use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::contracts::{LegalEdit, OpeningMove};
use crate::{opponent, rules, Board, GameStatus, Mark, MoveError};

/// A freshly opened game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct NewGame {
    /// Board after the user's opening move and the opponent's reply.
    board: Board,
    /// The mark the user plays for the rest of the game.
    user_choice: Mark,
    /// Always [`GameStatus::Running`] for a new game.
    status: GameStatus,
}

/// Result of applying one user move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Transition {
    /// Board after the user's move and, if the game went on, the reply.
    board: Board,
    /// Status of that board.
    status: GameStatus,
    /// Where the opponent played, if it did.
    opponent_move: Option<usize>,
}

/// Opens a game from a board holding exactly one mark.
///
/// # Errors
///
/// [`MoveError::Format`] for malformed text, [`MoveError::InvalidMove`]
/// unless exactly one cell is marked.
#[instrument(skip(rng))]
pub fn create_game<R: Rng + ?Sized>(board_text: &str, rng: &mut R) -> Result<NewGame, MoveError> {
    let mut board = Board::decode(board_text)?;
    let user_choice = OpeningMove::check(&board)?;

    let reply = opponent::place_random(&mut board, user_choice.opponent(), rng);
    let status = rules::classify(&board);

    info!(%board, %user_choice, ?reply, %status, "Game opened");
    Ok(NewGame {
        board,
        user_choice,
        status,
    })
}

/// Applies the user's move and the automatic reply.
///
/// # Errors
///
/// Returns the first broken rule, checked in this order:
/// [`MoveError::Format`], [`MoveError::GameOver`], [`MoveError::NoMove`],
/// [`MoveError::Overwrite`], [`MoveError::MultiMove`],
/// [`MoveError::TurnOrder`].
#[instrument(skip(old, rng), fields(old = %old))]
pub fn apply_move<R: Rng + ?Sized>(
    old: &Board,
    new_board_text: &str,
    user_choice: Mark,
    rng: &mut R,
) -> Result<Transition, MoveError> {
    let mut board = Board::decode(new_board_text)?;
    LegalEdit::check(old, &board, user_choice)?;

    let mut status = rules::classify(&board);
    let mut opponent_move = None;

    if status == GameStatus::Running {
        opponent_move = opponent::place_random(&mut board, user_choice.opponent(), rng);
        status = rules::classify(&board);
    } else {
        debug!(%status, "User move ended the game");
    }

    info!(%board, %status, ?opponent_move, "Move applied");
    Ok(Transition {
        board,
        status,
        opponent_move,
    })
}

/// [`create_game`] with the thread-local random source.
pub fn create_game_random(board_text: &str) -> Result<NewGame, MoveError> {
    create_game(board_text, &mut rand::rng())
}

/// [`apply_move`] with the thread-local random source.
pub fn apply_move_random(
    old: &Board,
    new_board_text: &str,
    user_choice: Mark,
) -> Result<Transition, MoveError> {
    apply_move(old, new_board_text, user_choice, &mut rand::rng())
}
