//! Application layer - Use case services.
//!
//! This module contains application services that orchestrate
//! domain rules and adapter interactions:
//! - `TableParser` runs the platform's commands and builds a `Table`
//! - `PortResolver` answers port queries against that table
//!
//! Services are generic over `CommandRunner`, so a fake runner can be
//! injected in place of real processes.

mod port_resolver;
mod table_parser;

pub use port_resolver::{find_pid, list_table, PortResolver};
pub use table_parser::{is_protocol_line, parse_table, TableParser};
