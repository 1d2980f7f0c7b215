//! Error types for the portpid-core library.

use thiserror::Error;

/// Result type alias for portpid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving ports to processes.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller passed a value that is not a port (or not a list of ports).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Host operating system is not one of the recognized platforms.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),

    /// The external tool could not be spawned or exited abnormally.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// The external tool binary could not be located.
    #[error("Command not found: {0}")]
    ToolMissing(String),

    /// No listening socket for the port carries a usable process ID.
    #[error("Couldn't find a process with port `{0}`")]
    PortNotFound(u16),

    /// A concurrent lookup was cancelled before it produced a result.
    #[error("Lookup cancelled: {0}")]
    Cancelled(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error came from running the external tool.
    pub fn is_command_error(&self) -> bool {
        matches!(self, Error::CommandFailed { .. } | Error::ToolMissing(_))
    }
}
