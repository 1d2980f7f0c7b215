//! Port to process resolution service.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinSet;
use tracing::{debug, trace};

use crate::adapters::ShellRunner;
use crate::domain::{extract_pid_from, listening_port, matches_port, PortMap, Table};
use crate::error::{Error, Result};
use crate::platform::{Columns, PlatformProfile};
use crate::ports::CommandRunner;
use crate::query::{port_from_json, ports_from_json};

use super::TableParser;

/// Application service answering "which process owns this port?".
///
/// Every query fetches a fresh table through the [`TableParser`]; results
/// are never cached between calls.
pub struct PortResolver<R: CommandRunner> {
    parser: TableParser<R>,
}

impl PortResolver<ShellRunner> {
    /// Create a resolver for the host platform that spawns real commands.
    pub fn detect() -> Result<Self> {
        Ok(Self::new(ShellRunner::new(), PlatformProfile::detect()?))
    }
}

impl<R: CommandRunner> PortResolver<R> {
    /// Create a resolver that runs `profile`'s commands through `runner`.
    pub fn new(runner: R, profile: PlatformProfile) -> Self {
        Self::from_parser(TableParser::new(runner, profile))
    }

    pub fn from_parser(parser: TableParser<R>) -> Self {
        Self { parser }
    }

    pub fn profile(&self) -> &PlatformProfile {
        self.parser.profile()
    }

    fn columns(&self) -> Columns {
        self.parser.profile().columns()
    }

    /// Find the PID of the process listening on `port`.
    ///
    /// The first record whose address ends in `:<port>` or `.<port>` and
    /// whose process column carries a PID wins.
    pub async fn resolve_one(&self, port: u16) -> Result<u32> {
        let table = self.parser.fetch_table().await?;
        find_pid(&table, self.columns(), port)
    }

    /// Like [`resolve_one`](Self::resolve_one), for a port that has not been
    /// validated yet. Validation happens before any command runs.
    pub async fn resolve_one_json(&self, value: &Value) -> Result<u32> {
        let port = port_from_json(value)?;
        self.resolve_one(port).await
    }

    /// Find the PIDs for several ports against one table snapshot.
    ///
    /// Lookups run concurrently. If any port cannot be resolved the whole
    /// call fails with the error of the first such port in input order;
    /// partial results are never returned.
    pub async fn resolve_all(&self, ports: &[u16]) -> Result<PortMap> {
        let table = Arc::new(self.parser.fetch_table().await?);
        let columns = self.columns();

        let mut lookups = JoinSet::new();
        for (i, &port) in ports.iter().enumerate() {
            let table = Arc::clone(&table);
            lookups.spawn(async move { (i, find_pid(&table, columns, port)) });
        }

        let results = gather_lookups(lookups, ports.len()).await?;

        let mut resolved = PortMap::new();
        for (&port, result) in ports.iter().zip(results) {
            resolved.insert(port, result?);
        }

        debug!(requested = ports.len(), resolved = resolved.len(), "resolved ports");
        Ok(resolved)
    }

    /// Like [`resolve_all`](Self::resolve_all), for input that has not been
    /// validated yet. Validation happens before any command runs.
    pub async fn resolve_all_json(&self, value: &Value) -> Result<PortMap> {
        let ports = ports_from_json(value)?;
        self.resolve_all(&ports).await
    }

    /// Map every listening port in the table to its owning PID.
    ///
    /// Rows without a port suffix or without a PID are skipped. When a port
    /// appears more than once the later row wins.
    pub async fn list_all(&self) -> Result<PortMap> {
        let table = self.parser.fetch_table().await?;
        Ok(list_table(&table, self.columns()))
    }
}

/// Collect indexed lookup results back into input order.
///
/// A panicking lookup resumes the panic here. A cancelled lookup fails the
/// whole batch with `Error::Cancelled`.
async fn gather_lookups(
    mut lookups: JoinSet<(usize, Result<u32>)>,
    len: usize,
) -> Result<Vec<Result<u32>>> {
    let mut results: Vec<Option<Result<u32>>> = (0..len).map(|_| None).collect();
    while let Some(joined) = lookups.join_next().await {
        let (i, result) = match joined {
            Ok(done) => done,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => return Err(Error::Cancelled(e.to_string())),
        };
        results[i] = Some(result);
    }

    results
        .into_iter()
        .map(|result| result.ok_or_else(|| Error::Cancelled("lookup never completed".into())))
        .collect()
}

/// Resolve `port` against an already fetched table.
pub fn find_pid(table: &Table, columns: Columns, port: u16) -> Result<u32> {
    table
        .iter()
        .filter(|record| {
            record
                .field(columns.address)
                .is_some_and(|address| matches_port(address, port))
        })
        .find_map(|record| extract_pid_from(record.field(columns.pid)))
        .ok_or(Error::PortNotFound(port))
}

/// Build the port listing for an already fetched table.
pub fn list_table(table: &Table, columns: Columns) -> PortMap {
    let mut ports = PortMap::new();

    for record in table {
        let Some(port) = record.field(columns.address).and_then(listening_port) else {
            trace!(fields = ?record.fields(), "skipping row without a port");
            continue;
        };
        let Some(pid) = extract_pid_from(record.field(columns.pid)) else {
            trace!(port, "skipping row without a pid");
            continue;
        };
        ports.insert(port, pid);
    }

    ports
}
