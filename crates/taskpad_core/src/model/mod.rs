//! Domain model for the task-tracking core.
//!
//! # Responsibility
//! - Define the canonical `Task` record shared by store, storage and callers.
//!
//! # Invariants
//! - Every task is identified by a stable, opaque `TaskId`.
//! - A task `title` is never empty or whitespace-only.

pub mod task;
