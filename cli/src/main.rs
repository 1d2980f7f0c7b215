//! PortPid CLI - Find the process listening on a port
//!
//! A command-line tool for resolving ports to process IDs
//! and listing every listening port with its owner.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portpid_core::ConfigStore;

#[derive(Parser)]
#[command(name = "portpid")]
#[command(author, version, about = "Find the process listening on a port")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file [default: ~/.portpid/config.json]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the PID listening on each port
    #[command(alias = "pid")]
    Find {
        /// Port numbers to look up
        #[arg(required = true)]
        ports: Vec<String>,
    },

    /// List all listening ports
    #[command(alias = "ls")]
    List,

    /// Show the platform profile in effect
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = match cli.config {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new()?,
    };

    match cli.command {
        Commands::Find { ports } => commands::find::run(&store, &ports, cli.json).await?,
        Commands::List => commands::list::run(&store, cli.json).await?,
        Commands::Config => commands::config::show(&store, cli.json).await?,
    }

    Ok(())
}
