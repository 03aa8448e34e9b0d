//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its snapshot serialization shape.
//! - Provide the construction path that stamps identity and creation time.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused for another task.
//! - `title` is trimmed and non-empty.
//! - `completed` is the only field mutated after creation (via toggle).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Opaque stable identifier for a task.
///
/// Kept as a plain string: ids generated here are UUID v4 text, but
/// snapshots written by other frontends may carry arbitrary id shapes.
pub type TaskId = String;

/// Validation failure for task construction or persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Field names serialize in camelCase to match the snapshot format shared
/// with non-Rust frontends; optional fields are absent (not null) when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable opaque id, immutable for the task's life.
    pub id: TaskId,
    /// Trimmed, non-empty, first letter capitalized by the extractor path.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Starts `false`; flipped in place by the store's toggle operation.
    pub completed: bool,
    /// Creation time in epoch milliseconds, immutable.
    pub created_at: i64,
    /// Optional due time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
}

impl Task {
    /// Creates a new task with a fresh id and `created_at` stamped to now.
    ///
    /// Returns `Err(TaskValidationError::EmptyTitle)` when `title` trims to
    /// empty. Both `title` and `description` are stored trimmed; an empty
    /// trimmed description collapses to `None`.
    pub fn new(
        title: &str,
        description: Option<&str>,
        due_date: Option<i64>,
    ) -> Result<Self, TaskValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        let description = description
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description,
            completed: false,
            created_at: now_epoch_ms(),
            due_date,
        })
    }

    /// Checks invariants on an already-constructed task (e.g. loaded state).
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
