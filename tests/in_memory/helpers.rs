//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use tasklist::task::{
    adapters::memory::InMemoryCommitLog,
    domain::{Task, TaskId},
    services::TaskListStore,
};

/// Store type used across the suite.
pub type TestStore = TaskListStore<DefaultClock>;

/// Builds an empty store with a commit log subscribed.
pub fn observed_store() -> (TestStore, InMemoryCommitLog) {
    let log = InMemoryCommitLog::new();
    let store = TaskListStore::new(Arc::new(DefaultClock)).with_observer(Arc::new(log.clone()));
    (store, log)
}

/// Submits each text in turn through the draft.
///
/// # Errors
///
/// Returns an error if any text fails to commit.
pub fn add_all(store: &mut TestStore, texts: &[&str]) -> Result<Vec<TaskId>, eyre::Report> {
    texts
        .iter()
        .map(|text| {
            store.set_draft(*text);
            store
                .add_task()
                .map(|event| event.task_id)
                .ok_or_else(|| eyre::eyre!("draft {text:?} should commit"))
        })
        .collect()
}

/// Collects task texts in iteration order.
pub fn texts<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<String> {
    tasks.map(|task| task.text().as_str().to_owned()).collect()
}
