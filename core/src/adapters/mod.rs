//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with external systems.

mod shell;

pub use shell::ShellRunner;
