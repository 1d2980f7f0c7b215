//! In-memory command runner for tests.
//!
//! [`FakeRunner`] answers commands with canned output and records every
//! command it was asked to run, so callers can assert that validation
//! happened before any tool was spawned.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::ports::CommandRunner;

/// A `CommandRunner` that never spawns anything.
///
/// Commands without a canned response fail with `Error::ToolMissing`.
#[derive(Debug, Default)]
pub struct FakeRunner {
    outputs: HashMap<String, String>,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `stdout`.
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), stdout.to_string());
        self
    }

    /// Fail `command` as if it exited non-zero with `reason`.
    pub fn with_failure(mut self, command: &str, reason: &str) -> Self {
        self.failures.insert(command.to_string(), reason.to_string());
        self
    }

    /// Commands run so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, command: &str) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.to_string());
        }

        if let Some(reason) = self.failures.get(command) {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                reason: reason.clone(),
            });
        }

        match self.outputs.get(command) {
            Some(stdout) => Ok(stdout.trim_end().to_string()),
            None => Err(Error::ToolMissing(
                command.split_whitespace().next().unwrap_or_default().to_string(),
            )),
        }
    }
}
