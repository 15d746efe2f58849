//! Commit signal payload.

use super::{Task, TaskId, TaskText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raised after a draft has been committed as a new task.
///
/// The event is advisory. A renderer may use it to dismiss an on-screen
/// keyboard or ignore it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCommitted {
    /// Identifier of the task that was created.
    pub task_id: TaskId,
    /// Text the task was created with.
    pub text: TaskText,
    /// Creation time of the task.
    pub committed_at: DateTime<Utc>,
}

impl TaskCommitted {
    /// Builds the event for a freshly created task.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            text: task.text().clone(),
            committed_at: task.created_at(),
        }
    }
}
