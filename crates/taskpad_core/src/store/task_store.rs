//! Authoritative in-memory task collection with persist-on-mutation.
//!
//! # Responsibility
//! - Apply add/toggle/delete/restore mutations to the owned collection.
//! - Snapshot the full collection to key-value storage after every
//!   mutation once hydrated.
//!
//! # Invariants
//! - The collection never contains two tasks with the same id.
//! - Every stored `title` is non-empty.
//! - New and restored tasks are prepended (newest-added-first order).
//! - `persist` never fires before hydration completes, and its failures
//!   never reach the caller.

use crate::model::task::{Task, TaskId};
use crate::storage::snapshot::{load_tasks, save_tasks};
use crate::storage::KvStore;
use log::{debug, warn};

/// Single-writer task store over a key-value backend.
///
/// Construct with `new`, then call `hydrate` before trusting the
/// collection. Mutations are expected from one control flow at a time;
/// callers sharing a store across threads must serialize access
/// themselves.
pub struct TaskStore<S: KvStore> {
    kv: S,
    tasks: Vec<Task>,
    loading: bool,
}

impl<S: KvStore> TaskStore<S> {
    /// Creates an unhydrated store: empty collection, writes suppressed.
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            tasks: Vec::new(),
            loading: true,
        }
    }

    /// Replaces the collection with the persisted snapshot and enables
    /// subsequent persistence. Missing or malformed snapshots hydrate to an
    /// empty collection. Hydration itself never writes back.
    pub fn hydrate(&mut self) {
        self.tasks = load_tasks(&self.kv);
        self.loading = false;
        debug!(
            "event=hydrate module=store status=ok count={}",
            self.tasks.len()
        );
    }

    /// True until `hydrate` has run.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The live collection, newest-added-first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Adds a task with a fresh id and creation timestamp, prepending it.
    ///
    /// Returns `None` (a silent no-op, nothing persisted) when `title`
    /// trims to empty. Otherwise returns a clone of the created task so
    /// callers can offer undo without re-reading the collection.
    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        due_date: Option<i64>,
    ) -> Option<Task> {
        let task = match Task::new(title, description, due_date) {
            Ok(task) => task,
            Err(_) => return None,
        };

        self.tasks.insert(0, task.clone());
        self.persist();
        Some(task)
    }

    /// Flips `completed` on the matching task.
    ///
    /// An unknown id leaves the collection untouched but still triggers the
    /// snapshot write, so a previously failed persist gets another chance.
    pub fn toggle(&mut self, id: &TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) {
            task.completed = !task.completed;
        }
        self.persist();
    }

    /// Removes the matching task. An unknown id leaves the collection
    /// untouched but still triggers the snapshot write.
    ///
    /// The removed value is not returned; callers wanting undo must retain
    /// a copy before deleting.
    pub fn delete(&mut self, id: &TaskId) {
        self.tasks.retain(|task| &task.id != id);
        self.persist();
    }

    /// Re-inserts a previously-held task verbatim (original id and
    /// timestamps), prepended.
    ///
    /// No uniqueness check is performed; callers must only restore a task
    /// they deleted first, or the no-duplicate-id invariant breaks.
    pub fn restore(&mut self, task: Task) {
        self.tasks.insert(0, task);
        self.persist();
    }

    /// Best-effort full-collection snapshot write.
    ///
    /// Suppressed while loading so hydration never writes back the empty
    /// pre-load state. Failures are logged and swallowed; the store
    /// degrades to in-memory-only operation.
    fn persist(&self) {
        if self.loading {
            return;
        }
        if let Err(err) = save_tasks(&self.kv, &self.tasks) {
            warn!("event=persist module=store status=error error={err}");
        }
    }
}
