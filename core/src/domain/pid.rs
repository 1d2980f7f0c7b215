//! Process ID extraction from the owning-process column.
//!
//! Tools render the owner differently:
//! - `netstat` prints a bare number: `1234`
//! - some tools quote the name first: `"node",1234`
//! - `ss` prints `users:(("node",pid=1234,fd=19))`

/// The patterns a PID may follow inside a process field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidRule {
    /// Digits at the very start of the field.
    Leading,
    /// Digits right after a closing quote and comma: `"name",1234`.
    QuotedName,
    /// Digits right after `",pid=`: `"name",pid=1234`.
    QuotedNamePid,
}

impl PidRule {
    /// Text that must immediately precede the digits.
    pub fn prefix(self) -> &'static str {
        match self {
            PidRule::Leading => "",
            PidRule::QuotedName => "\",",
            PidRule::QuotedNamePid => "\",pid=",
        }
    }

    /// Parse the digits directly after this rule's prefix at the start of `s`.
    fn anchored(self, s: &str) -> Option<u32> {
        s.strip_prefix(self.prefix()).and_then(parse_digits)
    }

    /// Apply this rule alone, returning the first PID it finds.
    pub fn extract(self, field: &str) -> Option<u32> {
        match self {
            PidRule::Leading => self.anchored(field),
            _ => field
                .match_indices(self.prefix())
                .find_map(|(i, _)| self.anchored(&field[i..])),
        }
    }
}

/// Extract the first PID any rule finds, scanning left to right.
///
/// Returns `None` when no rule applies. A PID of `0` is only returned if
/// the tool actually printed `0`.
pub fn extract_pid(field: &str) -> Option<u32> {
    if let Some(pid) = PidRule::Leading.anchored(field) {
        return Some(pid);
    }

    // `",pid=` starts with `",`, so both quoted rules anchor on the same
    // occurrences; the leftmost occurrence that satisfies either one wins.
    field.match_indices(PidRule::QuotedName.prefix()).find_map(|(i, _)| {
        let rest = &field[i..];
        PidRule::QuotedName
            .anchored(rest)
            .or_else(|| PidRule::QuotedNamePid.anchored(rest))
    })
}

/// Extract a PID from a column that may be missing from a short line.
pub fn extract_pid_from(field: Option<&str>) -> Option<u32> {
    field.and_then(extract_pid)
}

/// Parse the run of ASCII digits at the start of `s`.
fn parse_digits(s: &str) -> Option<u32> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}
