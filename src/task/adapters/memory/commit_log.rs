//! In-memory recorder for commit events.

use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{domain::TaskCommitted, ports::CommitObserver};

/// Thread-safe log of every commit event it has observed.
///
/// Clones share the same underlying log, so a host can keep one handle and
/// subscribe another to the store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommitLog {
    events: Arc<RwLock<Vec<TaskCommitted>>>,
}

impl InMemoryCommitLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<TaskCommitted> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when no event has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CommitObserver for InMemoryCommitLog {
    fn task_committed(&self, event: &TaskCommitted) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
