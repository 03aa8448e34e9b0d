use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use taskpad_core::db::DbError;
use taskpad_core::storage::{KvStore, StorageResult, TASKS_KEY};
use taskpad_core::{InMemoryKvStore, SqliteKvStore, StorageError, TaskStore};

/// Backend where every read and write fails at the transport level.
struct FailingKvStore;

fn transport_error() -> StorageError {
    StorageError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
}

impl KvStore for FailingKvStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(transport_error())
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(transport_error())
    }
}

/// Healthy backend that counts snapshot writes.
struct CountingKvStore {
    inner: InMemoryKvStore,
    writes: Rc<Cell<usize>>,
}

impl KvStore for CountingKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value)
    }
}

fn hydrated_store() -> TaskStore<InMemoryKvStore> {
    let mut store = TaskStore::new(InMemoryKvStore::new());
    store.hydrate();
    store
}

#[test]
fn hydrate_on_empty_backend_yields_empty_collection() {
    let mut store = TaskStore::new(InMemoryKvStore::new());
    assert!(store.is_loading());
    store.hydrate();
    assert!(!store.is_loading());
    assert!(store.tasks().is_empty());
}

#[test]
fn add_prepends_and_stamps_fields() {
    let mut store = hydrated_store();
    store.add("buy milk", None, None).unwrap();
    let second = store.add("call mom", Some("tonight"), Some(123)).unwrap();

    let tasks = store.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, second.id);
    assert_eq!(tasks[0].title, "call mom");
    assert_eq!(tasks[0].description.as_deref(), Some("tonight"));
    assert_eq!(tasks[0].due_date, Some(123));
    assert!(!tasks[0].completed);
    assert!(tasks[0].created_at > 0);
    assert_eq!(tasks[1].title, "buy milk");
}

#[test]
fn add_with_empty_trimmed_title_is_a_no_op() {
    let mut store = hydrated_store();
    assert!(store.add("   ", None, None).is_none());
    assert!(store.add("", None, None).is_none());
    assert!(store.tasks().is_empty());
}

#[test]
fn toggle_flips_completed_and_ignores_unknown_ids() {
    let mut store = hydrated_store();
    let task = store.add("buy milk", None, None).unwrap();

    store.toggle(&task.id);
    assert!(store.tasks()[0].completed);
    store.toggle(&task.id);
    assert!(!store.tasks()[0].completed);

    store.toggle(&"no-such-id".to_string());
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn delete_removes_and_ignores_unknown_ids() {
    let mut store = hydrated_store();
    let kept = store.add("keep me", None, None).unwrap();
    let doomed = store.add("delete me", None, None).unwrap();

    store.delete(&doomed.id);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, kept.id);

    store.delete(&doomed.id);
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn restore_after_delete_brings_back_the_exact_task() {
    let mut store = hydrated_store();
    store.add("other", None, None).unwrap();
    let saved = store.add("ephemeral", Some("undo me"), Some(7)).unwrap();

    store.delete(&saved.id);
    assert_eq!(store.tasks().len(), 1);

    store.restore(saved.clone());
    assert_eq!(store.tasks().len(), 2);
    // Restore prepends; original position is not recovered.
    assert_eq!(store.tasks()[0], saved);
    assert_eq!(store.tasks()[0].created_at, saved.created_at);
}

#[test]
fn collection_never_holds_duplicate_ids_or_empty_titles() {
    let mut store = hydrated_store();
    let first = store.add("one", None, None).unwrap();
    store.add("two", None, None).unwrap();
    store.add("   ", None, None);
    store.toggle(&first.id);
    store.delete(&first.id);
    store.restore(first);
    store.add("three", None, None).unwrap();

    let ids: HashSet<&str> = store.tasks().iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids.len(), store.tasks().len());
    assert!(store
        .tasks()
        .iter()
        .all(|task| !task.title.trim().is_empty()));
}

#[test]
fn mutations_persist_across_store_instances_on_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskpad.sqlite3");

    let saved = {
        let mut store = TaskStore::new(SqliteKvStore::open(&path).unwrap());
        store.hydrate();
        store.add("buy milk", None, None).unwrap();
        let saved = store.add("call mom", Some("tonight"), Some(5)).unwrap();
        store.toggle(&saved.id);
        saved
    };

    let mut reopened = TaskStore::new(SqliteKvStore::open(&path).unwrap());
    reopened.hydrate();

    let tasks = reopened.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, saved.id);
    assert!(tasks[0].completed);
    assert_eq!(tasks[0].created_at, saved.created_at);
    assert_eq!(tasks[1].title, "buy milk");
}

#[test]
fn corrupt_snapshot_hydrates_to_empty_collection() {
    let kv = InMemoryKvStore::new();
    kv.set(TASKS_KEY, "not json at all").unwrap();

    let mut store = TaskStore::new(kv);
    store.hydrate();
    assert!(store.tasks().is_empty());
}

#[test]
fn mutations_before_hydration_are_not_persisted() {
    let kv = InMemoryKvStore::new();
    kv.set(TASKS_KEY, "[]").unwrap();

    let mut store = TaskStore::new(kv);
    store.add("too early", None, None).unwrap();

    // Hydration replaces the pre-load state and nothing was written back.
    store.hydrate();
    assert!(store.tasks().is_empty());
}

#[test]
fn storage_failures_never_surface_and_store_degrades_to_in_memory() {
    let mut store = TaskStore::new(FailingKvStore);
    store.hydrate();
    assert!(!store.is_loading());
    assert!(store.tasks().is_empty());

    let task = store.add("buy milk", None, None).unwrap();
    assert_eq!(store.tasks().len(), 1);

    store.toggle(&task.id);
    assert!(store.tasks()[0].completed);

    store.delete(&task.id);
    assert!(store.tasks().is_empty());

    store.restore(task);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].title, "buy milk");
}

#[test]
fn every_mutation_triggers_a_snapshot_write_even_for_unknown_ids() {
    let writes = Rc::new(Cell::new(0));
    let kv = CountingKvStore {
        inner: InMemoryKvStore::new(),
        writes: Rc::clone(&writes),
    };
    let mut store = TaskStore::new(kv);
    store.hydrate();
    assert_eq!(writes.get(), 0);

    let task = store.add("buy milk", None, None).unwrap();
    assert_eq!(writes.get(), 1);

    store.toggle(&"no-such-id".to_string());
    assert_eq!(writes.get(), 2);

    store.delete(&"no-such-id".to_string());
    assert_eq!(writes.get(), 3);

    store.delete(&task.id);
    store.restore(task);
    assert_eq!(writes.get(), 5);

    // A title that trims to empty is a whole-operation no-op: no write.
    assert!(store.add("   ", None, None).is_none());
    assert_eq!(writes.get(), 5);
}

#[test]
fn extractor_batch_insertion_creates_one_task_per_title() {
    let mut store = hydrated_store();
    for title in taskpad_core::extract_tasks("buy milk, call mom and finish report") {
        store.add(&title, None, None);
    }

    let titles: Vec<&str> = store
        .tasks()
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    // add() prepends, so the newest extracted title is first.
    assert_eq!(titles, vec!["Finish report", "Call mom", "Buy milk"]);
}
