//! Domain model for the todo list.
//!
//! Tasks, the draft input and the commit event are plain values. Validation
//! of task text happens here so that a [`Task`] can never carry blank text.

mod draft;
mod error;
mod event;
mod ids;
mod task;
mod text;

pub use draft::Draft;
pub use error::{ParseTaskStateError, TaskDomainError};
pub use event::TaskCommitted;
pub use ids::TaskId;
pub use task::{Task, TaskState};
pub use text::TaskText;
