//! Shared world state for todo list BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasklist::task::{
    adapters::memory::InMemoryCommitLog,
    domain::{TaskCommitted, TaskId},
    services::TaskListStore,
};

/// Scenario world for todo list behaviour tests.
pub struct TaskListWorld {
    /// Store under test.
    pub store: TaskListStore<DefaultClock>,
    /// Log subscribed to the store's commit signal.
    pub commit_log: InMemoryCommitLog,
    /// Result of the last submission.
    pub last_commit: Option<Option<TaskCommitted>>,
    /// Draft value the last submission was made with.
    pub last_draft: Option<String>,
}

impl TaskListWorld {
    /// Creates a world around an empty store.
    #[must_use]
    pub fn new() -> Self {
        let commit_log = InMemoryCommitLog::new();
        let store = TaskListStore::new(Arc::new(DefaultClock))
            .with_observer(Arc::new(commit_log.clone()));
        Self {
            store,
            commit_log,
            last_commit: None,
            last_draft: None,
        }
    }

    /// Sets the draft and submits it, recording the outcome.
    pub fn submit(&mut self, draft: &str) {
        self.store.set_draft(draft);
        self.last_draft = Some(draft.to_owned());
        let committed = self.store.add_task();
        self.last_commit = Some(committed);
    }

    /// Finds the identifier of the first task with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error when no task carries the text.
    pub fn task_id(&self, text: &str) -> Result<TaskId, eyre::Report> {
        self.store
            .tasks()
            .find(|task| task.text().as_str() == text)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task with text {text:?}"))
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}
