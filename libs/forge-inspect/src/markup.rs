//! TOML and YAML viewers
//!
//! Both parse into a JSON-equivalent tree so one pretty-printer serves
//! every markup the tool reads. YAML documents with non-string keys cannot
//! cross into JSON and are reported as errors.

use serde_json::Value;

use crate::error::Result;

/// Parse a TOML document into a JSON tree
pub fn toml_to_json(input: &str) -> Result<Value> {
    let value: toml::Value = toml::from_str(input)?;
    Ok(serde_json::to_value(value)?)
}

/// Parse a YAML document into a JSON tree
pub fn yaml_to_json(input: &str) -> Result<Value> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)?;
    Ok(serde_json::to_value(value)?)
}

/// Pretty-print a JSON tree
pub fn pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
