//! Find command - show the PID listening on each port.

use anyhow::Result;
use portpid_core::query::parse_port;
use portpid_core::ConfigStore;

use super::explain;

pub async fn run(store: &ConfigStore, raw_ports: &[String], json: bool) -> Result<()> {
    // Reject bad input before anything is spawned.
    let ports = raw_ports
        .iter()
        .map(|p| parse_port(p))
        .collect::<portpid_core::Result<Vec<u16>>>()?;

    let resolver = super::resolver(store).await?;

    if let [port] = ports[..] {
        let pid = resolver.resolve_one(port).await.map_err(explain)?;
        if json {
            println!("{}", serde_json::json!({ "port": port, "pid": pid }));
        } else {
            println!("{}", pid);
        }
        return Ok(());
    }

    let pids = resolver.resolve_all(&ports).await.map_err(explain)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pids)?);
        return Ok(());
    }

    println!("{:<6} {}", "PORT", "PID");
    for (port, pid) in pids.iter() {
        println!("{:<6} {}", port, pid);
    }
    Ok(())
}
