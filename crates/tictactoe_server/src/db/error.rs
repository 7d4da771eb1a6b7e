//! Storage error type shared by every [`GameStore`](crate::GameStore) backend.

use std::sync::PoisonError;

use derive_more::{Display, Error};
use tracing::instrument;

/// Storage failure with the source location that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct DbError {
    /// What went wrong.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// File that raised the error.
    pub file: &'static str,
}

impl DbError {
    /// Creates a storage error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Query failed: {}", err))
    }
}

impl From<diesel::ConnectionError> for DbError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("Connection failed: {}", err))
    }
}

/// Errors from `MigrationHarness`.
impl From<Box<dyn std::error::Error + Send + Sync>> for DbError {
    #[track_caller]
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::new(format!("Migration failed: {}", err))
    }
}

/// A blocking store call panicked or was cancelled.
impl From<tokio::task::JoinError> for DbError {
    #[track_caller]
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(format!("Store task failed: {}", err))
    }
}

impl<T> From<PoisonError<T>> for DbError {
    #[track_caller]
    fn from(err: PoisonError<T>) -> Self {
        Self::new(format!("Store lock poisoned: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_recorded() {
        let err = DbError::new("boom");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("Storage error: boom at "));
    }

    #[test]
    fn test_diesel_not_found_converts() {
        let err: DbError = diesel::result::Error::NotFound.into();
        assert!(err.message.starts_with("Query failed"));
    }
}
