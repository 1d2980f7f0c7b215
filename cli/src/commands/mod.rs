//! Subcommand implementations.

pub mod config;
pub mod find;
pub mod list;

use anyhow::Result;
use portpid_core::{ConfigStore, PlatformProfile, PortResolver, ShellRunner};
use tracing::debug;

/// Build a resolver for this host, applying any configured overrides.
pub async fn resolver(store: &ConfigStore) -> Result<PortResolver<ShellRunner>> {
    let profile = profile(store).await?;
    Ok(PortResolver::new(ShellRunner::new(), profile))
}

/// The detected platform profile with configuration applied.
pub async fn profile(store: &ConfigStore) -> Result<PlatformProfile> {
    let config = store.load().await?;
    let profile = PlatformProfile::detect()?.with_config(&config)?;
    debug!(
        platform = %profile.platform(),
        config = %store.path().display(),
        "using platform profile"
    );
    Ok(profile)
}

/// Attach a hint to errors caused by the external tool.
pub fn explain(err: portpid_core::Error) -> anyhow::Error {
    let from_tool = err.is_command_error();
    let err = anyhow::Error::new(err);
    if from_tool {
        err.context("could not read the socket table; is the platform's netstat/ss available?")
    } else {
        err
    }
}
