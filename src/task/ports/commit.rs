//! Observer port for the commit signal.

use crate::task::domain::TaskCommitted;

/// Subscriber notified after each successful task commit.
///
/// Observers are called synchronously, in subscription order, once per
/// created task. Rejected submissions never reach an observer.
pub trait CommitObserver: Send + Sync {
    /// Receives the commit event for a newly added task.
    fn task_committed(&self, event: &TaskCommitted);
}
