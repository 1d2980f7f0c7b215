//! Command runner port (interface).

use crate::error::Result;

/// Port for running external network-status tools.
///
/// This trait defines the narrow boundary the parser depends on:
/// a command string goes in, captured standard output comes out.
/// Implementations handle the actual process spawning.
pub trait CommandRunner: Send + Sync {
    /// Run `command` and return its standard output with trailing
    /// whitespace trimmed.
    ///
    /// Fails with `Error::ToolMissing` when the program cannot be found and
    /// `Error::CommandFailed` when it cannot be spawned or exits non-zero.
    fn run(&self, command: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

impl<R: CommandRunner> CommandRunner for &R {
    async fn run(&self, command: &str) -> Result<String> {
        (**self).run(command).await
    }
}
