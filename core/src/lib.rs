//! PortPid Core Library
//!
//! Finds the process that owns a listening TCP or UDP port.
//! Provides functionality to:
//! - Resolve one port to the PID listening on it
//! - Resolve several ports against a single snapshot
//! - List every listening port with its owning PID
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Parsing rules and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! - macOS: Uses `netstat -anv`, once for TCP and once for UDP
//! - Linux: Uses `ss -tunlp`
//! - Windows: Uses `netstat -ano`
//!
//! Every query runs the tool again; nothing is cached.

// Hexagonal architecture layers
pub mod domain;
pub mod ports;
pub mod adapters;
pub mod application;

pub mod config;
pub mod error;
pub mod platform;
pub mod query;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use adapters::ShellRunner;
pub use application::{PortResolver, TableParser};
pub use config::{Config, ConfigStore};
pub use domain::{extract_pid, PortMap, Record, Table};
pub use error::{Error, Result};
pub use platform::{Columns, Platform, PlatformProfile};
pub use ports::CommandRunner;

/// Find the PID listening on `port` on this machine.
pub async fn pid_from_port(port: u16) -> Result<u32> {
    PortResolver::detect()?.resolve_one(port).await
}

/// Find the PIDs listening on each of `ports` on this machine.
pub async fn pids_from_ports(ports: &[u16]) -> Result<PortMap> {
    PortResolver::detect()?.resolve_all(ports).await
}

/// List every listening port on this machine with its owning PID.
pub async fn list_ports() -> Result<PortMap> {
    PortResolver::detect()?.list_all().await
}
