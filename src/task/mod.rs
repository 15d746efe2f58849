//! Task lifecycle and list partitioning.
//!
//! A [`services::TaskListStore`] holds the draft input and the newest-first
//! task collection. Adding a task validates and trims the draft, prepends the
//! task and raises an advisory commit signal; toggling flips completion. The
//! incomplete and completed views are derived on every read. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and the renderer projection in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
