//! Task collection snapshot codec.
//!
//! # Responsibility
//! - Serialize the full task collection to a single JSON record and read it
//!   back leniently.
//!
//! # Invariants
//! - A missing, unparseable, or non-list snapshot decodes to an empty
//!   collection, never an error.
//! - Decoded tasks that violate model invariants are dropped, not surfaced.

use super::{KvStore, StorageResult, TASKS_KEY};
use crate::model::task::Task;
use log::warn;

/// Writes the full collection under the tasks key, replacing any prior
/// snapshot.
pub fn save_tasks<S: KvStore>(kv: &S, tasks: &[Task]) -> StorageResult<()> {
    let encoded = serde_json::to_string(tasks)?;
    kv.set(TASKS_KEY, &encoded)
}

/// Reads the persisted snapshot.
///
/// Read or parse failure yields an empty collection; the caller cannot
/// distinguish "nothing stored" from "stored garbage", by contract.
pub fn load_tasks<S: KvStore>(kv: &S) -> Vec<Task> {
    let raw = match kv.get(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=snapshot_load module=storage status=error error={err}");
            return Vec::new();
        }
    };

    let tasks: Vec<Task> = match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("event=snapshot_load module=storage status=malformed error={err}");
            return Vec::new();
        }
    };

    tasks
        .into_iter()
        .filter(|task| match task.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=snapshot_load module=storage status=dropped_task id={} error={err}",
                    task.id
                );
                false
            }
        })
        .collect()
}
