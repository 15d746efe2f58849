//! The owning store for the draft input and the task collection.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::task::{
    domain::{Draft, Task, TaskCommitted, TaskId, TaskState},
    ports::CommitObserver,
};
use mockable::{Clock, DefaultClock};

/// Authoritative state behind a todo list screen.
///
/// The store is an ordinary owned value: construct it once per session and
/// hand it (or a borrow of it) to whatever drives the screen. Mutation needs
/// `&mut self`, which keeps every operation atomic with respect to the others.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use tasklist::task::services::TaskListStore;
///
/// let mut store = TaskListStore::new(Arc::new(DefaultClock));
/// store.set_draft(" Buy milk ");
/// let committed = store.add_task().expect("non-blank draft commits");
///
/// assert_eq!(committed.text.as_str(), "Buy milk");
/// assert_eq!(store.draft().as_str(), "");
/// assert_eq!(store.incomplete_count(), 1);
/// ```
pub struct TaskListStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    tasks: VecDeque<Task>,
    draft: Draft,
    observers: Vec<Arc<dyn CommitObserver>>,
    clock: Arc<C>,
}

impl<C> TaskListStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store reading timestamps from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            tasks: VecDeque::new(),
            draft: Draft::default(),
            observers: Vec::new(),
            clock,
        }
    }

    /// Registers `observer` and returns the store, for construction chains.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CommitObserver>) -> Self {
        self.subscribe(observer);
        self
    }

    /// Registers an observer for the commit signal.
    pub fn subscribe(&mut self, observer: Arc<dyn CommitObserver>) {
        self.observers.push(observer);
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replaces the draft verbatim. No trimming happens here.
    pub fn set_draft(&mut self, value: impl Into<String>) {
        self.draft = Draft::new(value);
    }

    /// Commits the draft as a new task at the front of the list.
    ///
    /// A blank draft is ignored: no task is created, the draft is left as it
    /// was and no observer is notified. Otherwise the draft is cleared, every
    /// observer receives the commit event, and the event is returned.
    pub fn add_task(&mut self) -> Option<TaskCommitted> {
        let text = self.draft.to_task_text().ok()?;
        let task = Task::new(text, &*self.clock);
        let event = TaskCommitted::for_task(&task);
        tracing::debug!(task_id = %task.id(), "task committed");

        self.tasks.push_front(task);
        self.draft.clear();
        for observer in &self.observers {
            observer.task_committed(&event);
        }
        Some(event)
    }

    /// Flips completion of the task with `id` and returns its new state.
    ///
    /// Unknown identifiers are ignored and yield `None`.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<TaskState> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        let state = task.toggle(&*self.clock);
        tracing::debug!(task_id = %id, state = state.as_str(), "task toggled");
        Some(state)
    }

    /// Returns every task, newest first.
    pub fn tasks(&self) -> impl DoubleEndedIterator<Item = &Task> + ExactSizeIterator {
        self.tasks.iter()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when no task has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the tasks still to do, in list order.
    pub fn incomplete_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.is_completed())
    }

    /// Returns the finished tasks, in list order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_completed())
    }

    /// Returns the number of tasks still to do.
    #[must_use]
    pub fn incomplete_count(&self) -> usize {
        self.incomplete_tasks().count()
    }

    /// Returns the number of finished tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_tasks().count()
    }
}

impl Default for TaskListStore<DefaultClock> {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl<C> fmt::Debug for TaskListStore<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .field("draft", &self.draft)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
