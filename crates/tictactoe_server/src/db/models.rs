//! Database models and their mapping to engine types.

use std::str::FromStr;

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::Serialize;
use tictactoe_engine::{Board, GameStatus, Mark};
use tracing::instrument;

use crate::db::{DbError, schema};

/// Stored game row.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct GameRecord {
    id: String,
    board: String,
    status: String,
    user_choice: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl GameRecord {
    /// Builds a record outside the database, as the in-memory store does.
    pub fn from_new(game: &NewGameRecord) -> Self {
        Self {
            id: game.id.clone(),
            board: game.board.clone(),
            status: game.status.clone(),
            user_choice: game.user_choice.clone(),
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }

    /// Replaces board and status, bumping `updated_at`.
    pub fn apply_update(&mut self, update: &GameUpdate) {
        self.board = update.board.clone();
        self.status = update.status.clone();
        self.updated_at = update.updated_at;
    }

    /// Parses the stored board text.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the stored text is not a valid board.
    #[instrument(skip(self), fields(id = %self.id, board = %self.board))]
    pub fn parse_board(&self) -> Result<Board, DbError> {
        Board::decode(&self.board)
            .map_err(|e| DbError::new(format!("Invalid stored board '{}': {}", self.board, e)))
    }

    /// Parses the stored user mark.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the stored text is not `X` or `O`.
    #[instrument(skip(self), fields(id = %self.id, user_choice = %self.user_choice))]
    pub fn parse_user_choice(&self) -> Result<Mark, DbError> {
        Mark::from_str(&self.user_choice)
            .map_err(|_| DbError::new(format!("Invalid user choice: '{}'", self.user_choice)))
    }

    /// Parses the stored status.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the stored text is not a known status.
    #[instrument(skip(self), fields(id = %self.id, status = %self.status))]
    pub fn parse_status(&self) -> Result<GameStatus, DbError> {
        GameStatus::from_str(&self.status)
            .map_err(|_| DbError::new(format!("Invalid status: '{}'", self.status)))
    }

    /// Public view of the game; the user's mark is never exposed.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id.clone(),
            board: self.board.clone(),
            status: self.status.clone(),
        }
    }
}

/// Insertable game row.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewGameRecord {
    id: String,
    board: String,
    status: String,
    user_choice: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl NewGameRecord {
    /// Builds the row for a game opened by the engine.
    #[instrument(skip(game))]
    pub fn from_engine(id: String, game: &tictactoe_engine::NewGame, now: NaiveDateTime) -> Self {
        Self::new(
            id,
            game.board().encode(),
            game.status().to_string(),
            game.user_choice().to_string(),
            now,
            now,
        )
    }
}

/// Board and status written by an edit.
#[derive(Debug, Clone, AsChangeset, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct GameUpdate {
    board: String,
    status: String,
    updated_at: NaiveDateTime,
}

impl GameUpdate {
    /// Builds the change set for an engine transition.
    pub fn from_engine(transition: &tictactoe_engine::Transition, now: NaiveDateTime) -> Self {
        Self::new(
            transition.board().encode(),
            transition.status().to_string(),
            now,
        )
    }
}

/// The fields of a game served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize, Getters)]
pub struct GameSummary {
    id: String,
    board: String,
    status: String,
}
