//! Tasklist: state core for a single-screen todo list.
//!
//! This crate owns the task collection and the draft input behind a todo
//! list screen, exposes the operations a renderer binds to, and derives the
//! incomplete and completed views from one collection.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for collaborators (commit observers)
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: The owning store and the renderer-facing projection
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, list partitioning and the commit signal

pub mod task;
