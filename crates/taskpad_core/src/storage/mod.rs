//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the string get/set contract the rest of the core persists
//!   through, plus the well-known record keys.
//! - Isolate SQLite and serialization details from store/prefs logic.
//!
//! # Invariants
//! - All durable records live under the well-known keys below.
//! - Malformed persisted values are reported as absent by higher layers,
//!   never as errors.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod snapshot;

pub use kv::{InMemoryKvStore, KvStore, SqliteKvStore};

/// Key holding the serialized task collection snapshot.
pub const TASKS_KEY: &str = "taskpad/tasks";
/// Key holding the theme preference string.
pub const THEME_KEY: &str = "taskpad/theme";
/// Key holding the accent color preference string.
pub const ACCENT_COLOR_KEY: &str = "taskpad/accent_color";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
///
/// Never crosses the task-store mutation API; mutations swallow these and
/// degrade to in-memory-only operation.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
