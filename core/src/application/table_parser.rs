//! Table fetching service.

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::{Record, Table};
use crate::error::Result;
use crate::platform::PlatformProfile;
use crate::ports::CommandRunner;

/// Runs the platform's network-status commands and parses their output.
///
/// Nothing is cached: every call to [`TableParser::fetch_table`] runs the
/// commands again.
pub struct TableParser<R: CommandRunner> {
    runner: R,
    profile: PlatformProfile,
}

impl<R: CommandRunner> TableParser<R> {
    /// Create a parser that runs `profile`'s commands through `runner`.
    pub fn new(runner: R, profile: PlatformProfile) -> Self {
        Self { runner, profile }
    }

    pub fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// Run the commands and parse the combined output into a table.
    ///
    /// All commands run concurrently (macOS runs TCP and UDP at once) and
    /// their outputs are joined in declared order. Any command failure
    /// fails the fetch.
    pub async fn fetch_table(&self) -> Result<Table> {
        let outputs = try_join_all(
            self.profile
                .commands()
                .iter()
                .map(|command| self.runner.run(command)),
        )
        .await?;
        let output = outputs.join("\n");

        let table = parse_table(&output);
        debug!(
            platform = %self.profile.platform(),
            records = table.len(),
            "parsed network-status table"
        );
        Ok(table)
    }
}

/// Whether a line describes a socket rather than a header or summary.
///
/// The first token must start with `tcp` or `udp` in any case, which also
/// admits `tcp4`, `tcp6`, `udp46` and Windows' `TCP`.
pub fn is_protocol_line(line: &str) -> bool {
    let head = line.trim_start().as_bytes();
    match head.get(..3) {
        Some(proto) => proto.eq_ignore_ascii_case(b"tcp") || proto.eq_ignore_ascii_case(b"udp"),
        None => false,
    }
}

/// Keep the protocol lines of `output` and tokenize each into a record.
pub fn parse_table(output: &str) -> Table {
    Table::new(
        output
            .lines()
            .filter(|line| is_protocol_line(line))
            .map(Record::from_line)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::testing::FakeRunner;

    #[test]
    fn test_is_protocol_line() {
        assert!(is_protocol_line("tcp   LISTEN 0 128 0.0.0.0:22 0.0.0.0:*"));
        assert!(is_protocol_line("  TCP    0.0.0.0:135    0.0.0.0:0    LISTENING    1020"));
        assert!(is_protocol_line("udp4       0      0  *.5353"));
        assert!(is_protocol_line("tcp6"));
        assert!(!is_protocol_line("Netid State Recv-Q Send-Q"));
        assert!(!is_protocol_line("Active Internet connections (including servers)"));
        assert!(!is_protocol_line("Proto Recv-Q Send-Q  Local Address"));
        assert!(!is_protocol_line(""));
        assert!(!is_protocol_line("tc"));
    }

    #[test]
    fn test_parse_ss_output() {
        let output = r#"Netid State  Recv-Q Send-Q Local Address:Port Peer Address:Port Process
udp   UNCONN 0      0      127.0.0.53%lo:53   0.0.0.0:*     users:(("systemd-resolve",pid=612,fd=13))
tcp   LISTEN 0      4096   0.0.0.0:22         0.0.0.0:*     users:(("sshd",pid=901,fd=3))"#;

        let table = parse_table(output);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].field(4), Some("127.0.0.53%lo:53"));
        assert_eq!(table.records()[1].field(6), Some("users:((\"sshd\",pid=901,fd=3))"));
    }

    #[test]
    fn test_parse_windows_output() {
        let output = "\r\nActive Connections\r\n\r\n  Proto  Local Address          Foreign Address        State           PID\r\n  TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1020\r\n  UDP    0.0.0.0:5353           *:*                                    2244\r\n";

        let table = parse_table(output);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].field(1), Some("0.0.0.0:135"));
        assert_eq!(table.records()[0].field(4), Some("1020"));
        assert_eq!(table.records()[1].field(3), Some("2244"));
    }

    #[test]
    fn test_one_record_per_protocol_line() {
        let table = parse_table("tcp\nheader\nudp a b\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].fields(), ["tcp"]);
    }

    #[tokio::test]
    async fn test_fetch_single_command() {
        let runner =
            FakeRunner::new().with_output("ss -tunlp", "Netid State\ntcp LISTEN 0 1 *:80 *:* x");
        let parser = TableParser::new(&runner, PlatformProfile::for_platform(Platform::Linux));

        let table = parser.fetch_table().await.unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(runner.calls(), vec!["ss -tunlp"]);
    }

    #[tokio::test]
    async fn test_fetch_joins_in_declared_order() {
        let runner = FakeRunner::new()
            .with_output("netstat -anv -p tcp", "tcp4 0 0 *.22 *.* LISTEN 131072 131072 88 0")
            .with_output("netstat -anv -p udp", "udp4 0 0 *.5353 *.* 786896 9216 412 0");
        let parser = TableParser::new(&runner, PlatformProfile::for_platform(Platform::Darwin));

        let table = parser.fetch_table().await.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].field(0), Some("tcp4"));
        assert_eq!(table.records()[1].field(0), Some("udp4"));
        assert_eq!(runner.call_count(), 2);
    }

    fn profile_with(commands: &[&str]) -> PlatformProfile {
        let config = crate::config::Config {
            commands: Some(commands.iter().map(|c| c.to_string()).collect()),
            ..Default::default()
        };
        PlatformProfile::for_platform(Platform::Linux)
            .with_config(&config)
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_three_commands_in_declared_order() {
        let runner = FakeRunner::new()
            .with_output("ss -tlnp", "tcp LISTEN 0 1 *:80 *:* a")
            .with_output("ss -ulnp", "udp UNCONN 0 0 *:53 *:* b")
            .with_output("ss -wlnp", "tcp LISTEN 0 1 *:443 *:* c");
        let parser = TableParser::new(&runner, profile_with(&["ss -tlnp", "ss -ulnp", "ss -wlnp"]));

        let table = parser.fetch_table().await.unwrap();
        let addresses: Vec<_> = table.iter().map(|r| r.field(4).unwrap()).collect();
        assert_eq!(addresses, ["*:80", "*:53", "*:443"]);
        assert_eq!(runner.call_count(), 3);
    }

    #[tokio::test]
    async fn test_fetch_three_commands_fails_if_any_fails() {
        let runner = FakeRunner::new()
            .with_output("ss -tlnp", "tcp LISTEN 0 1 *:80 *:* a")
            .with_failure("ss -ulnp", "exit status: 2")
            .with_output("ss -wlnp", "tcp LISTEN 0 1 *:443 *:* c");
        let parser = TableParser::new(&runner, profile_with(&["ss -tlnp", "ss -ulnp", "ss -wlnp"]));

        let err = parser.fetch_table().await.unwrap_err();
        assert!(matches!(err, crate::error::Error::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_fetch_fails_if_either_command_fails() {
        let runner = FakeRunner::new()
            .with_output("netstat -anv -p tcp", "tcp4 0 0 *.22 *.* LISTEN 131072 131072 88 0");
        let parser = TableParser::new(&runner, PlatformProfile::for_platform(Platform::Darwin));

        let err = parser.fetch_table().await.unwrap_err();
        assert!(err.is_command_error());
    }
}
