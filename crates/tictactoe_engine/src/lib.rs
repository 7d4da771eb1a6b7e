//! Tic-tac-toe move validation and game-state transitions.
//!
//! This crate is the pure core of the tic-tac-toe service. Given the
//! stored board and a board submitted by the user it decides whether the
//! move is legal, lets a random opponent answer, and classifies the game.
//!
//! # Architecture
//!
//! - **Board**: 9-cell board with its `X`/`O`/`-` text codec
//! - **Rules**: win and draw detection over the 8 winning lines
//! - **Contracts**: preconditions a submitted board must satisfy
//! - **Engine**: `create_game` and `apply_move` transitions
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictactoe_engine::{apply_move, create_game, GameStatus, Mark};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let game = create_game("----X----", &mut rng)?;
//! assert_eq!(*game.user_choice(), Mark::X);
//! assert_eq!(*game.status(), GameStatus::Running);
//!
//! let next = game.board().encode().replacen('-', "X", 1);
//! let step = apply_move(game.board(), &next, Mark::X, &mut rng)?;
//! assert_eq!(step.board().filled_count(), 4);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod contracts;
mod engine;
mod error;
pub mod opponent;
pub mod rules;
mod types;

pub use board::{Board, CELL_COUNT, EMPTY_SYMBOL};
pub use engine::{
    NewGame, Transition, apply_move, apply_move_random, create_game, create_game_random,
};
pub use error::MoveError;
pub use types::{Cell, GameStatus, Mark};
