//! Tests for the SQLite game repository.

use chrono::{Duration, NaiveDateTime, Utc};
use tempfile::NamedTempFile;
use tictactoe_engine::{GameStatus, Mark};
use tictactoe_server::{GameRepository, GameStore, GameUpdate, NewGameRecord};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    repo.run_migrations().expect("Migrations failed");
    (db_file, repo)
}

fn new_game(id: &str, board: &str, user_choice: Mark, at: NaiveDateTime) -> NewGameRecord {
    NewGameRecord::new(
        id.to_string(),
        board.to_string(),
        GameStatus::Running.to_string(),
        user_choice.to_string(),
        at,
        at,
    )
}

#[test]
fn test_empty_path_rejected() {
    assert!(GameRepository::new("  ".to_string()).is_err());
}

#[test]
fn test_migrations_are_idempotent() {
    let (_db, repo) = setup_test_db();
    assert_eq!(repo.run_migrations().expect("Second run failed"), 0);
}

#[test]
fn test_insert_and_get_game() {
    let (_db, repo) = setup_test_db();
    let now = Utc::now().naive_utc();

    let inserted = repo
        .insert_game(new_game("g-1", "-------XO", Mark::O, now))
        .expect("Insert failed");
    assert_eq!(inserted.id(), "g-1");
    assert_eq!(inserted.board(), "-------XO");
    assert_eq!(inserted.user_choice(), "O");

    let found = repo.get_game("g-1").expect("Query failed").expect("Missing game");
    assert_eq!(found, inserted);
    assert_eq!(found.parse_user_choice().unwrap(), Mark::O);
    assert_eq!(found.parse_status().unwrap(), GameStatus::Running);
    assert_eq!(found.parse_board().unwrap().encode(), "-------XO");
}

#[test]
fn test_get_game_not_found() {
    let (_db, repo) = setup_test_db();
    assert!(repo.get_game("nope").expect("Query failed").is_none());
}

#[test]
fn test_duplicate_id_fails() {
    let (_db, repo) = setup_test_db();
    let now = Utc::now().naive_utc();
    repo.insert_game(new_game("dup", "X-------O", Mark::X, now))
        .expect("First insert failed");
    let result = repo.insert_game(new_game("dup", "O-------X", Mark::O, now));
    assert!(result.is_err(), "Duplicate id should fail");
}

#[test]
fn test_list_games_ordered_by_creation() {
    let (_db, repo) = setup_test_db();
    let base = Utc::now().naive_utc();

    repo.insert_game(new_game("second", "-X-----O-", Mark::X, base + Duration::seconds(1)))
        .expect("Insert failed");
    repo.insert_game(new_game("first", "O-------X", Mark::O, base))
        .expect("Insert failed");
    repo.insert_game(new_game("third", "--X-O----", Mark::X, base + Duration::seconds(2)))
        .expect("Insert failed");

    let games = repo.list_games().expect("List failed");
    let ids: Vec<&str> = games.iter().map(|g| g.id().as_str()).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[test]
fn test_list_games_empty() {
    let (_db, repo) = setup_test_db();
    assert!(repo.list_games().expect("List failed").is_empty());
}

#[test]
fn test_update_game() {
    let (_db, repo) = setup_test_db();
    let created = Utc::now().naive_utc();
    repo.insert_game(new_game("g-2", "XX--O-OXO", Mark::X, created))
        .expect("Insert failed");

    let later = created + Duration::seconds(5);
    let update = GameUpdate::new(
        "XXX-O-OXO".to_string(),
        GameStatus::XWon.to_string(),
        later,
    );
    let updated = repo
        .update_game("g-2", update)
        .expect("Update failed")
        .expect("Missing game");

    assert_eq!(updated.board(), "XXX-O-OXO");
    assert_eq!(updated.status(), "X_WON");
    assert_eq!(updated.user_choice(), "X");
    assert_eq!(*updated.updated_at(), later);
    assert_eq!(*updated.created_at(), created);
}

#[test]
fn test_update_missing_game() {
    let (_db, repo) = setup_test_db();
    let update = GameUpdate::new(
        "X--------".to_string(),
        GameStatus::Running.to_string(),
        Utc::now().naive_utc(),
    );
    assert!(repo.update_game("ghost", update).expect("Update failed").is_none());
}

#[test]
fn test_delete_game() {
    let (_db, repo) = setup_test_db();
    repo.insert_game(new_game("g-3", "----X---O", Mark::X, Utc::now().naive_utc()))
        .expect("Insert failed");

    assert!(repo.delete_game("g-3").expect("Delete failed"));
    assert!(repo.get_game("g-3").expect("Query failed").is_none());
    assert!(!repo.delete_game("g-3").expect("Delete failed"));
}

#[test]
fn test_status_constraint_rejects_unknown_value() {
    let (_db, repo) = setup_test_db();
    let now = Utc::now().naive_utc();
    let bad = NewGameRecord::new(
        "bad".to_string(),
        "X-------O".to_string(),
        "LOST".to_string(),
        "X".to_string(),
        now,
        now,
    );
    assert!(repo.insert_game(bad).is_err());
}
