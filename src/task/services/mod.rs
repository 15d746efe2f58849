//! Application services for the todo list.

mod presentation;
mod store;

pub use presentation::{PresentationConfig, ScreenModel, SectionKind, TaskSection};
pub use store::TaskListStore;
