// In app/src/report.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Serializes `report` as 2-space indented JSON, writes it to `path`, and
/// returns the JSON so the caller can echo it.
pub fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, &json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(json)
}
