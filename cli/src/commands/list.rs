//! List command - show all listening ports.

use anyhow::Result;
use portpid_core::ConfigStore;

use super::explain;

pub async fn run(store: &ConfigStore, json: bool) -> Result<()> {
    let resolver = super::resolver(store).await?;
    let ports = resolver.list_all().await.map_err(explain)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ports)?);
        return Ok(());
    }

    if ports.is_empty() {
        println!("No listening ports found.");
        return Ok(());
    }

    // Table header
    println!("{:<6} {}", "PORT", "PID");
    println!("{}", "-".repeat(16));

    for (port, pid) in ports.iter() {
        println!("{:<6} {}", port, pid);
    }

    println!("\nTotal: {} ports", ports.len());
    Ok(())
}
