//! JSON bodies served by the API.

use serde::{Deserialize, Serialize};

use crate::db::GameSummary;

/// Body of `GET /api/v1/games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesResponse {
    /// All stored games, oldest first.
    pub games: Vec<GameSummary>,
}

/// Body of `GET /api/v1/games/{game_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    /// The requested game.
    pub game: GameSummary,
}

/// Body of `POST /api/v1/games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// URL of the new game.
    pub location: String,
}

/// Body of every 400 caused by the submitted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonResponse {
    /// Why the request was rejected.
    pub reason: String,
}
