//! Core domain logic for TaskPad: free-text task extraction and the
//! persistent task store. This crate is the single source of truth for
//! business invariants; UI, audio capture and remote transcription are
//! external collaborators behind the interfaces in `voice`.

pub mod db;
pub mod extract;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod storage;
pub mod store;
pub mod voice;

pub use extract::extract_tasks;
pub use logging::{default_log_level, init_logging};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use prefs::{load_accent_color, load_theme, save_accent_color, save_theme, ThemeMode};
pub use storage::{InMemoryKvStore, KvStore, SqliteKvStore, StorageError};
pub use store::task_store::TaskStore;
pub use voice::{TranscribeError, Transcriber};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
