//! Log output setup.
//!
//! stdout is reserved for command output; all logs go to stderr.
//! `PORTPID_LOG` (or `RUST_LOG`) overrides the level chosen by `-v`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Call once at startup.
pub fn init(verbose: u8) {
    let level = level_for(verbose);
    let filter = EnvFilter::try_from_env("PORTPID_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("portpid={level},portpid_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
