// In crates/core-types/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Every way a run can fail. Validation failures are all fatal; the job
/// boundary turns whichever one surfaces into an error report.
#[derive(Error, Debug)]
pub enum Error {
    // --- Configuration ---
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Unable to read configuration file: {0}")]
    ConfigRead(#[source] std::io::Error),

    #[error("Invalid configuration file structure: line {line} is not a 'key: value' pair")]
    ConfigFormat { line: usize },

    #[error("Invalid configuration file structure: missing keys {0:?}")]
    ConfigMissingKeys(Vec<&'static str>),

    #[error("Invalid configuration file structure: '{key}' must be {expected}")]
    ConfigType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("Invalid configuration file structure: '{key}' is out of range")]
    ConfigRange { key: &'static str },

    // --- Dataset ---
    #[error("Missing input file: {}", .0.display())]
    DataNotFound(PathBuf),

    #[error("Input file is not readable: {}", .path.display())]
    DataAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty input file")]
    EmptyData,

    #[error("Missing required columns in dataset: {0:?}")]
    MissingColumn(Vec<&'static str>),

    #[error("Invalid CSV file format: non-numeric close value on line {line}")]
    InvalidValue { line: u64 },

    #[error("Invalid CSV file format: {0}")]
    MalformedData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
