//! Mapping of failures onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::Display;
use tictactoe_engine::MoveError;
use tracing::{debug, error, warn};

use super::types::ReasonResponse;
use crate::db::DbError;

/// Reason a request could not be served.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Path id is not a UUID.
    #[display("Bad request. Invalid game id")]
    InvalidId,

    /// No game with that id.
    #[display("Resource not found")]
    NotFound,

    /// Body is not JSON.
    #[display("Request body must be JSON")]
    MalformedBody,

    /// Body lacks a `game` value.
    #[display("The game parameter must exist")]
    MissingGame,

    /// `game` is not an object holding `board`.
    #[display("The game must be an object with property 'board'")]
    MissingBoard,

    /// Engine rejected the board.
    #[display("{_0}")]
    Move(MoveError),

    /// Storage failed.
    #[display("{_0}")]
    Storage(DbError),
}

impl std::error::Error for ApiError {}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        ApiError::Move(err)
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId => {
                warn!(reason = %self, "Request rejected");
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::NotFound => {
                debug!("Game not found");
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            ApiError::Storage(e) => {
                error!(error = %e, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json("Internal Server Error"),
                )
                    .into_response()
            }
            other => {
                warn!(reason = %other, "Game rejected");
                let body = ReasonResponse {
                    reason: other.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
