//! Example: List every listening port and resolve a few of them.
//!
//! Usage: `cargo run -p portpid-core --example list_ports [PORT]...`

use portpid_core::query::parse_port;
use portpid_core::PortResolver;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let resolver = match PortResolver::detect() {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("Scanning ports on {}...\n", resolver.profile().platform());

    match resolver.list_all().await {
        Ok(ports) => {
            if ports.is_empty() {
                println!("No listening ports found.");
            } else {
                println!("{:<6} {}", "PORT", "PID");
                println!("{}", "-".repeat(16));
                for (port, pid) in ports.iter() {
                    println!("{:<6} {}", port, pid);
                }
                println!("\nTotal: {} ports", ports.len());
            }
        }
        Err(e) => {
            eprintln!("Error scanning ports: {}", e);
            return;
        }
    }

    let requested: Result<Vec<u16>, _> = std::env::args().skip(1).map(|a| parse_port(&a)).collect();
    match requested {
        Ok(ports) if !ports.is_empty() => match resolver.resolve_all(&ports).await {
            Ok(pids) => {
                println!();
                for (port, pid) in pids.iter() {
                    println!("port {} -> pid {}", port, pid);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        },
        Ok(_) => {}
        Err(e) => eprintln!("Error: {}", e),
    }
}
