//! Request handlers for `/api/v1/games`.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde_json::Value;
use tictactoe_engine::{apply_move_random, create_game_random};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::AppState;
use super::error::ApiError;
use super::types::{CreatedResponse, GameResponse, GamesResponse};
use crate::db::{DbError, GameSummary, GameUpdate, NewGameRecord};
use crate::store::GameStore;

/// Runs a store operation on the blocking pool.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn GameStore) -> Result<T, DbError> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(DbError::from)?;
    Ok(result?)
}

/// Rejects ids that are not UUIDs before touching storage.
fn parse_game_id(raw: &str) -> Result<String, ApiError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| ApiError::InvalidId)
}

/// Pulls `game.board` out of a request body.
///
/// A non-string board is reported the same way as a malformed one.
fn extract_board(body: &Bytes) -> Result<String, ApiError> {
    let value: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody)?
    };

    let game = value
        .get("game")
        .filter(|g| !g.is_null())
        .ok_or(ApiError::MissingGame)?;

    let board = game
        .as_object()
        .and_then(|obj| obj.get("board"))
        .ok_or(ApiError::MissingBoard)?;

    board
        .as_str()
        .map(str::to_string)
        .ok_or(ApiError::Move(tictactoe_engine::MoveError::Format))
}

/// Fallback for `/` and unknown paths.
pub async fn index() -> &'static str {
    "Tic Tac Toe"
}

/// `GET /api/v1/games`
#[instrument(skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<GamesResponse>, ApiError> {
    let records = with_store(&state, |store| store.list_games()).await?;
    let games: Vec<GameSummary> = records.iter().map(|r| r.summary()).collect();
    debug!(count = games.len(), "Listing games");
    Ok(Json(GamesResponse { games }))
}

/// `GET /api/v1/games/{game_id}`
#[instrument(skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let id = parse_game_id(&game_id)?;
    let record = with_store(&state, move |store| store.get_game(&id))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(GameResponse {
        game: record.summary(),
    }))
}

/// `POST /api/v1/games`
#[instrument(skip(state, body))]
pub async fn create_game(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let board = extract_board(&body)?;
    let game = create_game_random(&board)?;

    let row = NewGameRecord::from_engine(
        Uuid::new_v4().to_string(),
        &game,
        chrono::Utc::now().naive_utc(),
    );
    let record = with_store(&state, move |store| store.insert_game(row)).await?;

    let location = format!("{}/api/v1/games/{}", state.base_url, record.id());
    info!(id = %record.id(), board = %record.board(), %location, "Game created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location.clone())],
        Json(CreatedResponse { location }),
    ))
}

/// `PUT /api/v1/games/{game_id}`
#[instrument(skip(state, body))]
pub async fn edit_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    body: Bytes,
) -> Result<Json<GameSummary>, ApiError> {
    let id = parse_game_id(&game_id)?;
    let board = extract_board(&body)?;

    let lookup_id = id.clone();
    let record = with_store(&state, move |store| store.get_game(&lookup_id))
        .await?
        .ok_or(ApiError::NotFound)?;

    let old = record.parse_board()?;
    let user_choice = record.parse_user_choice()?;
    let transition = apply_move_random(&old, &board, user_choice)?;

    let update = GameUpdate::from_engine(&transition, chrono::Utc::now().naive_utc());
    let updated = with_store(&state, move |store| store.update_game(&id, update))
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(id = %updated.id(), board = %updated.board(), status = %updated.status(), "Game updated");
    Ok(Json(updated.summary()))
}

/// `DELETE /api/v1/games/{game_id}`
#[instrument(skip(state))]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_game_id(&game_id)?;
    let deleted = with_store(&state, move |store| store.delete_game(&id)).await?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    info!(%game_id, "Game deleted");
    Ok("Game successfully deleted")
}
