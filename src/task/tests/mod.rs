//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain values, toggling, the store's
//! add and view operations, observer notification and the screen projection.
