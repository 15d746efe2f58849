//! In-memory adapters.

mod commit_log;

pub use commit_log::InMemoryCommitLog;
