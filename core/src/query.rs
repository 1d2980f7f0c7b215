//! Validation of loosely typed port input.
//!
//! Callers that receive ports from JSON or command-line text validate them
//! here before any external tool runs.

use serde_json::Value;

use crate::error::{Error, Result};

/// Convert a JSON value to a port number.
pub fn port_from_json(value: &Value) -> Result<u16> {
    let Value::Number(number) = value else {
        return Err(Error::InvalidInput(format!(
            "Expected a number, got {}",
            type_name(value)
        )));
    };

    let Some(port) = number.as_i64() else {
        return Err(Error::InvalidInput(format!(
            "Expected an integer port, got {}",
            number
        )));
    };

    u16::try_from(port)
        .map_err(|_| Error::InvalidInput(format!("Port {} is out of range 0-65535", port)))
}

/// Convert a JSON array to a list of port numbers.
///
/// Every element is validated; the first invalid one fails the whole list.
pub fn ports_from_json(value: &Value) -> Result<Vec<u16>> {
    let Value::Array(items) = value else {
        return Err(Error::InvalidInput(format!(
            "Expected an array, got {}",
            type_name(value)
        )));
    };

    items.iter().map(port_from_json).collect()
}

/// Parse a port given as text, e.g. a command-line argument.
pub fn parse_port(input: &str) -> Result<u16> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput(format!(
            "Expected a number, got `{}`",
            input
        )));
    }

    trimmed
        .parse()
        .map_err(|_| Error::InvalidInput(format!("Port {} is out of range 0-65535", trimmed)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
