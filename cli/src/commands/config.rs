//! Config command - show the platform profile in effect.

use anyhow::Result;
use portpid_core::ConfigStore;

pub async fn show(store: &ConfigStore, json: bool) -> Result<()> {
    let profile = super::profile(store).await?;

    if json {
        let out = serde_json::json!({
            "configPath": store.path(),
            "profile": profile,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let columns = profile.columns();
    println!("Config file:    {}", store.path().display());
    println!("Platform:       {}", profile.platform());
    println!("Address column: {}", columns.address);
    println!("PID column:     {}", columns.pid);
    println!("Commands:");
    for command in profile.commands() {
        println!("  {}", command);
    }
    Ok(())
}
