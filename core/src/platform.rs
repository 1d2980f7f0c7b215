//! Platform selection: which tool to run and where its columns are.
//!
//! | Platform | Commands                                       | Address | PID |
//! |----------|------------------------------------------------|---------|-----|
//! | macOS    | `netstat -anv -p tcp`, `netstat -anv -p udp`   | 3       | 8   |
//! | Linux    | `ss -tunlp`                                    | 4       | 6   |
//! | Windows  | `netstat -ano`                                 | 1       | 4   |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::error::{Error, Result};

/// A recognized host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

impl Platform {
    /// All recognized platforms.
    pub const ALL: [Platform; 3] = [Platform::Darwin, Platform::Linux, Platform::Windows];

    /// Map an OS identity string to a platform.
    ///
    /// Accepts Rust's `std::env::consts::OS` names as well as `darwin`
    /// and `win32`.
    pub fn from_os(identity: &str) -> Result<Self> {
        match identity {
            "macos" | "darwin" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "windows" | "win32" => Ok(Platform::Windows),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }

    /// The platform this process is running on.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Column layout of this platform's tool output.
    pub fn columns(self) -> Columns {
        match self {
            Platform::Darwin => Columns::new(3, 8),
            Platform::Linux => Columns::new(4, 6),
            Platform::Windows => Columns::new(1, 4),
        }
    }

    /// Commands whose combined output forms the table.
    ///
    /// macOS `netstat` cannot list TCP and UDP sockets with PIDs in one
    /// call, so it gets one command per protocol.
    pub fn commands(self) -> &'static [&'static str] {
        match self {
            Platform::Darwin => &["netstat -anv -p tcp", "netstat -anv -p udp"],
            Platform::Linux => &["ss -tunlp"],
            Platform::Windows => &["netstat -ano"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_os(s)
    }
}

/// Zero-based indices of the fields the resolver reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Columns {
    /// Field holding `address:port` (or `address.port`).
    pub address: usize,
    /// Field holding the owning process ID, possibly embedded in text.
    pub pid: usize,
}

impl Columns {
    pub const fn new(address: usize, pid: usize) -> Self {
        Self { address, pid }
    }
}

/// Commands and column layout used for every query.
///
/// Built once at startup and handed to the parser and resolver; it never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformProfile {
    platform: Platform,
    columns: Columns,
    commands: Vec<String>,
}

impl PlatformProfile {
    /// The built-in profile for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            columns: platform.columns(),
            commands: platform.commands().iter().map(|c| c.to_string()).collect(),
        }
    }

    /// The built-in profile for the host platform.
    pub fn detect() -> Result<Self> {
        Platform::current().map(Self::for_platform)
    }

    /// Apply overrides from a loaded configuration.
    pub fn with_config(mut self, config: &Config) -> Result<Self> {
        if let Some(commands) = &config.commands {
            if commands.is_empty() {
                return Err(Error::Config("`commands` must not be empty".to_string()));
            }
            if commands.iter().any(|c| c.trim().is_empty()) {
                return Err(Error::Config("`commands` contains a blank command".to_string()));
            }
            warn!(platform = %self.platform, ?commands, "using configured commands");
            self.commands = commands.clone();
        }
        if let Some(address) = config.address_column {
            warn!(platform = %self.platform, address, "using configured address column");
            self.columns.address = address;
        }
        if let Some(pid) = config.pid_column {
            warn!(platform = %self.platform, pid, "using configured pid column");
            self.columns.pid = pid;
        }
        Ok(self)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}
