//! Parsing of variables supplied from outside a template: `NAME=VALUE`
//! arguments and JSON objects read from stdin or config files.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::io::Read;

/// Splits a `NAME=VALUE` argument at its first `=`.
///
/// The value may be empty and may contain further `=` characters; the name
/// may not be empty.
pub fn parse_assignment(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidAssignment(s.to_string())),
    }
}

/// Converts a JSON value to the text stored in a variable.
///
/// # Errors
/// * `Error::ConfigError` for arrays and objects, which have no textual form
pub fn value_to_string(key: &str, value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::ConfigError(format!(
            "variable '{key}' must be a string, number or boolean"
        ))),
    }
}

/// Converts a map of JSON values to variable values, keeping its order.
pub fn values_to_strings(
    values: IndexMap<String, serde_json::Value>,
) -> Result<IndexMap<String, String>> {
    values
        .into_iter()
        .map(|(key, value)| {
            let text = value_to_string(&key, &value)?;
            Ok((key, text))
        })
        .collect()
}

/// Reads a JSON object of variables, e.g. from stdin.
///
/// Empty input yields no variables.
pub fn read_variables<R: Read>(mut reader: R) -> Result<IndexMap<String, String>> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    if buf.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    let values: IndexMap<String, serde_json::Value> = serde_json::from_str(&buf)?;
    values_to_strings(values)
}
