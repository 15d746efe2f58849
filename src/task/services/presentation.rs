//! Renderer-facing projection of the store.
//!
//! A renderer reads a [`ScreenModel`] instead of reaching into the store: it
//! carries the labels, the draft, and both task sections with their headings
//! and empty-state messages already resolved.

use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::TaskListStore;
use crate::task::domain::Task;

/// Labels shown on the todo list screen.
///
/// Section headings are prefixes; the task count is appended in parentheses.
///
/// # Examples
///
/// ```
/// use tasklist::task::services::PresentationConfig;
///
/// let config = PresentationConfig::default().with_title("Groceries");
/// assert_eq!(config.title, "Groceries");
/// assert_eq!(config.submit_label, "Add");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Screen title.
    pub title: String,
    /// Placeholder shown in an empty input control.
    pub input_placeholder: String,
    /// Label of the submit button.
    pub submit_label: String,
    /// Heading prefix for the incomplete section.
    pub incomplete_heading: String,
    /// Heading prefix for the completed section.
    pub completed_heading: String,
    /// Message shown when no task is incomplete.
    pub incomplete_empty_message: String,
    /// Message shown when no task is completed.
    pub completed_empty_message: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_owned(),
            input_placeholder: "Add a task...".to_owned(),
            submit_label: "Add".to_owned(),
            incomplete_heading: "Incomplete Tasks".to_owned(),
            completed_heading: "Completed Tasks".to_owned(),
            incomplete_empty_message: "No incomplete tasks — add one!".to_owned(),
            completed_empty_message: "No completed tasks yet.".to_owned(),
        }
    }
}

impl PresentationConfig {
    /// Sets the screen title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the input placeholder.
    #[must_use]
    pub fn with_input_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input_placeholder = placeholder.into();
        self
    }

    /// Sets the submit button label.
    #[must_use]
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Sets both section heading prefixes.
    #[must_use]
    pub fn with_headings(
        mut self,
        incomplete: impl Into<String>,
        completed: impl Into<String>,
    ) -> Self {
        self.incomplete_heading = incomplete.into();
        self.completed_heading = completed.into();
        self
    }

    /// Sets both empty-state messages.
    #[must_use]
    pub fn with_empty_messages(
        mut self,
        incomplete: impl Into<String>,
        completed: impl Into<String>,
    ) -> Self {
        self.incomplete_empty_message = incomplete.into();
        self.completed_empty_message = completed.into();
        self
    }

    fn heading(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Incomplete => &self.incomplete_heading,
            SectionKind::Completed => &self.completed_heading,
        }
    }

    fn empty_message(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Incomplete => &self.incomplete_empty_message,
            SectionKind::Completed => &self.completed_empty_message,
        }
    }
}

/// Which of the two derived views a section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Tasks still to do.
    Incomplete,
    /// Finished tasks.
    Completed,
}

/// One rendered list with its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSection {
    /// View this section renders.
    pub kind: SectionKind,
    /// Heading including the task count, e.g. `Completed Tasks (2)`.
    pub heading: String,
    /// Tasks in list order.
    pub tasks: Vec<Task>,
    /// Message to show instead of the list; `None` when `tasks` is non-empty.
    pub empty_message: Option<String>,
}

impl TaskSection {
    fn build(kind: SectionKind, tasks: Vec<Task>, config: &PresentationConfig) -> Self {
        let heading = format!("{} ({})", config.heading(kind), tasks.len());
        let empty_message = tasks
            .is_empty()
            .then(|| config.empty_message(kind).to_owned());
        Self {
            kind,
            heading,
            tasks,
            empty_message,
        }
    }
}

/// Everything a renderer needs to draw the screen once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    /// Screen title.
    pub title: String,
    /// Placeholder for the input control.
    pub input_placeholder: String,
    /// Submit button label.
    pub submit_label: String,
    /// Current draft value.
    pub draft: String,
    /// Section listing incomplete tasks.
    pub incomplete: TaskSection,
    /// Section listing completed tasks.
    pub completed: TaskSection,
}

impl ScreenModel {
    /// Projects the current store state through `config`.
    #[must_use]
    pub fn project<C>(store: &TaskListStore<C>, config: &PresentationConfig) -> Self
    where
        C: Clock + Send + Sync,
    {
        let incomplete = TaskSection::build(
            SectionKind::Incomplete,
            store.incomplete_tasks().cloned().collect(),
            config,
        );
        let completed = TaskSection::build(
            SectionKind::Completed,
            store.completed_tasks().cloned().collect(),
            config,
        );

        Self {
            title: config.title.clone(),
            input_placeholder: config.input_placeholder.clone(),
            submit_label: config.submit_label.clone(),
            draft: store.draft().as_str().to_owned(),
            incomplete,
            completed,
        }
    }
}
