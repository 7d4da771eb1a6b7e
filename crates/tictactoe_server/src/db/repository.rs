//! SQLite repository for games.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, GameRecord, GameUpdate, NewGameRecord, schema};
use crate::store::GameStore;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for game rows.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a new repository for the database at the given path.
    ///
    /// No connection is opened until the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is empty.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        if db_path.trim().is_empty() {
            return Err(DbError::new("Database path must not be empty"));
        }
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path)?;
        conn.batch_execute("PRAGMA busy_timeout = 5000;")?;
        Ok(conn)
    }

    /// Applies any pending embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection or a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<usize, DbError> {
        let mut conn = self.connection()?;
        let applied = conn.run_pending_migrations(MIGRATIONS)?;

        for version in &applied {
            info!(%version, "Applied migration");
        }
        Ok(applied.len())
    }
}

impl GameStore for GameRepository {
    #[instrument(skip(self))]
    fn list_games(&self) -> Result<Vec<GameRecord>, DbError> {
        debug!("Listing all games");
        let mut conn = self.connection()?;

        let games = schema::games::table
            .order(schema::games::created_at.asc())
            .select(GameRecord::as_select())
            .load(&mut conn)?;

        info!(count = games.len(), "Games loaded");
        Ok(games)
    }

    #[instrument(skip(self))]
    fn get_game(&self, id: &str) -> Result<Option<GameRecord>, DbError> {
        let mut conn = self.connection()?;

        let game = schema::games::table
            .find(id)
            .select(GameRecord::as_select())
            .first(&mut conn)
            .optional()?;

        debug!(found = game.is_some(), "Game lookup");
        Ok(game)
    }

    #[instrument(skip(self, game), fields(id = %game.id(), board = %game.board()))]
    fn insert_game(&self, game: NewGameRecord) -> Result<GameRecord, DbError> {
        let mut conn = self.connection()?;

        let record = diesel::insert_into(schema::games::table)
            .values(&game)
            .returning(GameRecord::as_returning())
            .get_result(&mut conn)?;

        info!(id = %record.id(), status = %record.status(), "Game inserted");
        Ok(record)
    }

    #[instrument(skip(self, update), fields(board = %update.board(), status = %update.status()))]
    fn update_game(&self, id: &str, update: GameUpdate) -> Result<Option<GameRecord>, DbError> {
        let mut conn = self.connection()?;

        let record = diesel::update(schema::games::table.find(id))
            .set(&update)
            .returning(GameRecord::as_returning())
            .get_result(&mut conn)
            .optional()?;

        debug!(updated = record.is_some(), "Game update");
        Ok(record)
    }

    #[instrument(skip(self))]
    fn delete_game(&self, id: &str) -> Result<bool, DbError> {
        let mut conn = self.connection()?;

        let deleted = diesel::delete(schema::games::table.find(id)).execute(&mut conn)?;

        info!(deleted, "Game delete");
        Ok(deleted > 0)
    }
}
