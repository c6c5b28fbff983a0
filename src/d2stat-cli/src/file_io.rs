//! I/O helpers for consistent file/stdout handling

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write bytes to a file path or stdout if path is None
pub fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data).with_context(|| format!("Failed to write {}", p.display())),
        None => io::stdout()
            .write_all(data)
            .context("Failed to write to stdout"),
    }
}

/// Serialize a value as pretty JSON (with trailing newline)
pub fn to_json(value: &impl Serialize) -> Result<Vec<u8>> {
    let mut json = serde_json::to_vec_pretty(value).context("Failed to serialize JSON")?;
    json.push(b'\n');
    Ok(json)
}

/// Write a value as pretty JSON to a file path or stdout if path is None
pub fn write_json(path: Option<&Path>, value: &impl Serialize) -> Result<()> {
    write_output(path, &to_json(value)?)
}
