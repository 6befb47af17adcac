// In crates/dataset/src/lib.rs

use std::fs;
use std::path::Path;
use std::sync::Arc;

use core_types::{Error, Result, Row};
use tracing::debug;

/// The column every dataset must carry.
pub const CLOSE_COLUMN: &str = "close";

/// Loads a comma-separated table and coerces its `close` column.
///
/// The whole load fails on the first bad `close` value; a partial table is
/// never returned. Rows keep file order and every original column.
///
/// # Errors
///
/// * `DataNotFound` if `path` is not an existing regular file.
/// * `DataAccess` if the file cannot be read.
/// * `EmptyData` for a zero-byte file or a header with no data rows beneath
///   it.
/// * `MissingColumn` if the first line is blank or has no `close` column.
/// * `InvalidValue` if a `close` field is empty, missing or not a number.
/// * `MalformedData` if the CSV itself cannot be decoded.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    if !path.is_file() {
        return Err(Error::DataNotFound(path.to_path_buf()));
    }

    let content = fs::read(path).map_err(|source| Error::DataAccess {
        path: path.to_path_buf(),
        source,
    })?;
    if content.is_empty() {
        return Err(Error::EmptyData);
    }

    // The header is always the first physical line, even when it is blank.
    let first_line = content.split(|&b| b == b'\n').next().unwrap_or_default();
    if first_line.strip_suffix(b"\r").unwrap_or(first_line).is_empty() {
        return Err(Error::MissingColumn(vec![CLOSE_COLUMN]));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_slice());

    let headers = reader
        .headers()
        .map_err(|e| Error::MalformedData(e.to_string()))?
        .clone();

    // With duplicate `close` headers the last one wins.
    let close_idx = headers
        .iter()
        .enumerate()
        .filter(|(_, name)| *name == CLOSE_COLUMN)
        .map(|(idx, _)| idx)
        .last()
        .ok_or_else(|| Error::MissingColumn(vec![CLOSE_COLUMN]))?;

    let header: Arc<[String]> = headers.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::MalformedData(e.to_string()))?;
        let line = record.position().map_or(0, |pos| pos.line());

        let close = record
            .get(close_idx)
            .and_then(|field| field.trim().parse::<f64>().ok())
            .ok_or(Error::InvalidValue { line })?;

        let values = record.iter().map(String::from).collect();
        rows.push(Row::new(Arc::clone(&header), values, close));
    }

    if rows.is_empty() {
        return Err(Error::EmptyData);
    }

    debug!(rows = rows.len(), columns = header.len(), "Dataset parsed");
    Ok(rows)
}
