//! Adapter implementations of the todo list ports.

pub mod memory;
