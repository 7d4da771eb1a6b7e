//! Tic-tac-toe REST service.
//!
//! Players open a game by posting a board with their first mark and then
//! submit whole boards with one more mark each. A random opponent answers
//! every move. Game logic lives in [`tictactoe_engine`]; this crate adds
//! HTTP routing, persistence and configuration.
//!
//! # Architecture
//!
//! - **Server**: axum router for `/api/v1/games`
//! - **Store**: [`GameStore`] seam with SQLite and in-memory backends
//! - **Config**: TOML file, environment and CLI overrides
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tictactoe_server::{InMemoryGameStore, ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! serve(&config, Arc::new(InMemoryGameStore::new())).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod db;
mod server;
mod store;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Persistence
pub use db::{DbError, GameRecord, GameRepository, GameSummary, GameUpdate, MIGRATIONS, NewGameRecord};
pub use store::{GameStore, InMemoryGameStore};

// Crate-level exports - HTTP
pub use server::{
    ApiError, AppState, CreatedResponse, GameResponse, GamesResponse, ReasonResponse, router, serve,
};
