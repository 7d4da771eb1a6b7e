//! Persistence seam used by the HTTP layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, instrument};

use crate::db::{DbError, GameRecord, GameUpdate, NewGameRecord};

/// Storage operations the request handlers need.
///
/// Every method is a single keyed operation, so an edit's write is
/// atomic with respect to other writes on the same game.
pub trait GameStore: Send + Sync {
    /// Lists all games, oldest first.
    fn list_games(&self) -> Result<Vec<GameRecord>, DbError>;

    /// Gets a game by id.
    fn get_game(&self, id: &str) -> Result<Option<GameRecord>, DbError>;

    /// Inserts a new game.
    fn insert_game(&self, game: NewGameRecord) -> Result<GameRecord, DbError>;

    /// Writes a new board and status, returning `None` if the id is unknown.
    fn update_game(&self, id: &str, update: GameUpdate) -> Result<Option<GameRecord>, DbError>;

    /// Deletes a game, returning whether it existed.
    fn delete_game(&self, id: &str) -> Result<bool, DbError>;
}

/// Process-local store, used by tests and `--in-memory` mode.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameStore {
    games: Arc<Mutex<HashMap<String, GameRecord>>>,
}

impl InMemoryGameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating in-memory game store");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, GameRecord>>, DbError> {
        Ok(self.games.lock()?)
    }
}

impl GameStore for InMemoryGameStore {
    #[instrument(skip(self))]
    fn list_games(&self) -> Result<Vec<GameRecord>, DbError> {
        let games = self.lock()?;
        let mut list: Vec<GameRecord> = games.values().cloned().collect();
        list.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        debug!(count = list.len(), "Games listed");
        Ok(list)
    }

    #[instrument(skip(self))]
    fn get_game(&self, id: &str) -> Result<Option<GameRecord>, DbError> {
        Ok(self.lock()?.get(id).cloned())
    }

    #[instrument(skip(self, game), fields(id = %game.id()))]
    fn insert_game(&self, game: NewGameRecord) -> Result<GameRecord, DbError> {
        let mut games = self.lock()?;
        if games.contains_key(game.id()) {
            return Err(DbError::new(format!("Duplicate game id '{}'", game.id())));
        }
        let record = GameRecord::from_new(&game);
        games.insert(record.id().clone(), record.clone());
        Ok(record)
    }

    #[instrument(skip(self, update))]
    fn update_game(&self, id: &str, update: GameUpdate) -> Result<Option<GameRecord>, DbError> {
        let mut games = self.lock()?;
        Ok(games.get_mut(id).map(|record| {
            record.apply_update(&update);
            record.clone()
        }))
    }

    #[instrument(skip(self))]
    fn delete_game(&self, id: &str) -> Result<bool, DbError> {
        Ok(self.lock()?.remove(id).is_some())
    }
}
