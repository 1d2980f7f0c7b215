//! Port matching against the local-address column.
//!
//! Address formats vary by tool:
//! - `ss`: `0.0.0.0:8080`, `[::]:8080`, `*:8080`
//! - BSD `netstat`: `127.0.0.1.8080`, `*.8080`, `::1.8080`
//! - Windows `netstat`: `0.0.0.0:8080`, `[::]:8080`

/// Characters that may separate an address from its port.
const PORT_SEPARATORS: [char; 2] = [':', '.'];

/// Whether `address` ends with `:<port>` or `.<port>`.
pub fn matches_port(address: &str, port: u16) -> bool {
    let digits = port.to_string();
    address
        .strip_suffix(digits.as_str())
        .is_some_and(|rest| rest.ends_with(PORT_SEPARATORS))
}

/// The listening port at the end of an address field.
///
/// Takes the trailing digit run, which must follow a separator. Returns
/// `None` for wildcards like `*.*` and for values outside the port range.
pub fn listening_port(address: &str) -> Option<u16> {
    // The last non-digit byte always ends its character, so the next
    // index is a char boundary even after multibyte text.
    let digits_start = address
        .bytes()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |i| i + 1);
    let digits = &address[digits_start..];
    if digits.is_empty() {
        return None;
    }

    let rest = &address[..digits_start];
    if !rest.ends_with(PORT_SEPARATORS) {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_colon_and_dot() {
        assert!(matches_port("0.0.0.0:8080", 8080));
        assert!(matches_port("[::]:8080", 8080));
        assert!(matches_port("*.8080", 8080));
        assert!(matches_port("127.0.0.1.3000", 3000));
    }

    #[test]
    fn test_matches_whole_port_only() {
        assert!(!matches_port("0.0.0.0:8080", 80));
        assert!(!matches_port("0.0.0.0:18080", 8080));
        assert!(!matches_port("8080", 8080));
        assert!(!matches_port("", 0));
    }

    #[test]
    fn test_port_zero() {
        assert!(!matches_port("0.0.0.0:68", 0));
        assert!(matches_port("*:0", 0));
    }

    #[test]
    fn test_listening_port() {
        assert_eq!(listening_port("0.0.0.0:22"), Some(22));
        assert_eq!(listening_port("[::1]:631"), Some(631));
        assert_eq!(listening_port("192.168.1.10.5353"), Some(5353));
        assert_eq!(listening_port("*.137"), Some(137));
    }

    #[test]
    fn test_listening_port_rejects_unparseable() {
        assert_eq!(listening_port("*.*"), None);
        assert_eq!(listening_port("*:*"), None);
        assert_eq!(listening_port("12345"), None);
        assert_eq!(listening_port("0.0.0.0:99999"), None);
        assert_eq!(listening_port("fe80::1%lo0"), None);
        assert_eq!(listening_port(""), None);
    }

    #[test]
    fn test_listening_port_after_multibyte_char() {
        assert_eq!(listening_port("ñ80"), None);
        assert_eq!(listening_port("\u{FFFD}80"), None);
        assert_eq!(listening_port("hôte:80"), Some(80));
        assert!(!matches_port("ñ80", 80));
    }
}
