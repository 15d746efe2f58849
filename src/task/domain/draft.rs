//! Uncommitted input value.

use super::{TaskDomainError, TaskText, text::trim_blank};

/// Text currently held by the input control, stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft(String);

impl Draft {
    /// Creates a draft holding `value` unchanged.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw draft value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the draft holds nothing but blank characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        trim_blank(&self.0).is_empty()
    }

    /// Validates the draft as task text without consuming it.
    ///
    /// Hosts that want to show a validation message call this before
    /// committing; the store itself ignores the error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskText`] for a blank draft.
    pub fn to_task_text(&self) -> Result<TaskText, TaskDomainError> {
        TaskText::new(&self.0)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl AsRef<str> for Draft {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
