//! Tool argument decoding
//!
//! Callers send loosely typed JSON. Count and duration arguments accept
//! exactly three shapes:
//!
//! - a JSON integer `>= 0`
//! - a finite JSON float `>= 0`, truncated toward zero
//! - a JSON string holding a base-10 integer `>= 0`
//!
//! Every rejection is reported as [`Error::InvalidArgument`].

use serde_json::Value as JsonValue;

use crate::{Error, Result};

/// Decode a required non-negative integer argument
pub fn parse_non_negative(input: &JsonValue, name: &str) -> Result<u64> {
    let value = match input.get(name) {
        None | Some(JsonValue::Null) => return Err(missing(name)),
        Some(value) => value,
    };

    let parsed = match value {
        JsonValue::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && *f < u64::MAX as f64)
                .map(|f| f.trunc() as u64)
        }),
        JsonValue::String(s) => s.parse::<u64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        Error::InvalidArgument(format!("parameter '{}' must be a non-negative integer", name))
    })
}

/// Decode a required string argument
pub fn required_str<'a>(input: &'a JsonValue, name: &str) -> Result<&'a str> {
    match input.get(name) {
        None | Some(JsonValue::Null) => Err(missing(name)),
        Some(JsonValue::String(s)) => Ok(s.as_str()),
        Some(_) => Err(Error::InvalidArgument(format!(
            "parameter '{}' must be a string",
            name
        ))),
    }
}

/// Decode an optional string argument; absent, null and empty all map to `None`
pub fn optional_str<'a>(input: &'a JsonValue, name: &str) -> Result<Option<&'a str>> {
    match input.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) if s.is_empty() => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(Error::InvalidArgument(format!(
            "parameter '{}' must be a string",
            name
        ))),
    }
}

fn missing(name: &str) -> Error {
    Error::InvalidArgument(format!("missing required parameter '{}'", name))
}
