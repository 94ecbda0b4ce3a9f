//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the persistence engine and its storage media.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error for {}: {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode stored data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Why a backup payload was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Backup must be an object keyed by date")]
    NotAnObject,

    #[error("Invalid date key '{0}': expected D.M.YYYY")]
    InvalidDate(String),

    #[error("Data for {0} is not an object")]
    DayNotObject(String),

    #[error("Data for {date} has no '{field}' list")]
    MissingLog { date: String, field: &'static str },

    #[error("Entry {index} of '{field}' on {date} is malformed: {reason}")]
    MalformedEntry {
        date: String,
        field: &'static str,
        index: usize,
        reason: String,
    },
}

impl ValidationError {
    /// The date key the error refers to, if any.
    pub fn date(&self) -> Option<&str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::InvalidDate(date)
            | ValidationError::DayNotObject(date)
            | ValidationError::MissingLog { date, .. }
            | ValidationError::MalformedEntry { date, .. } => Some(date),
        }
    }
}
