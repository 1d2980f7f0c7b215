//! Domain layer - Pure parsing rules and data models.
//!
//! This module contains the types and rules used to interpret
//! network-status tool output. Nothing here performs I/O, so it can be
//! tested in isolation.

mod address;
mod pid;
mod port_map;
mod record;

// Re-export all domain types
pub use address::{listening_port, matches_port};
pub use pid::{extract_pid, extract_pid_from, PidRule};
pub use port_map::PortMap;
pub use record::{Record, Table};
