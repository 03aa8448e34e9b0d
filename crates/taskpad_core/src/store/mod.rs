//! Task store: the single owner of the live task collection.

pub mod task_store;
