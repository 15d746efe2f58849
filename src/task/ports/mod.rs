//! Port contracts for the todo list.
//!
//! Ports define renderer-agnostic interfaces the store talks to.

pub mod commit;

pub use commit::CommitObserver;
