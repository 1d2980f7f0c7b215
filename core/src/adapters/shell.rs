//! Command runner backed by `tokio::process`.

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::CommandRunner;

/// Runs commands as child processes and captures their output.
///
/// The command string is split on whitespace into a program and its
/// arguments; no shell is involved, so quoting is not interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<String> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| Error::CommandFailed {
            command: command.to_string(),
            reason: "empty command".to_string(),
        })?;

        debug!(command, "running network-status tool");

        let output = Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::ToolMissing(program.to_string()),
                _ => Error::CommandFailed {
                    command: command.to_string(),
                    reason: format!("Failed to run {}: {}", program, e),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.lines().find(|l| !l.trim().is_empty()) {
                Some(line) => format!("{}: {}", output.status, line.trim()),
                None => output.status.to_string(),
            };
            return Err(Error::CommandFailed {
                command: command.to_string(),
                reason,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(command, bytes = stdout.len(), "captured tool output");
        Ok(stdout.trim_end().to_string())
    }
}
