//! Shared output helpers for command handlers

use colored::*;

/// Print one labelled row: right-aligned cyan label, plain value
pub fn kv(label: &str, value: &str) {
    println!("{:>24}  {}", label.bright_cyan(), value);
}

/// Print a section heading
pub fn heading(text: &str) {
    println!();
    println!("{}", text.bright_yellow());
}

/// Serialize a value as pretty JSON to stdout
pub fn json<T: serde::Serialize>(value: &T) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
