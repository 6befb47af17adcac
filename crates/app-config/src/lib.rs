// In crates/app-config/src/lib.rs

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::Path;

use core_types::{Error, Result};
use tracing::debug;

pub mod parser;
pub mod types;

// Re-export the most important types for easy access.
pub use parser::parse_key_values;
pub use types::{ConfigValue, Settings};

/// Version reported when the configuration cannot supply one.
pub const DEFAULT_VERSION: &str = "v1";

const REQUIRED_KEYS: [&str; 3] = ["seed", "window", "version"];

/// Loads and validates the job configuration.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the file exists,
/// 2. it can be read,
/// 3. every line is well-formed,
/// 4. `seed`, `window` and `version` are all present,
/// 5. each of them has the right type.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.is_file() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(Error::ConfigRead)?;
    let entries = parse_key_values(&content)?;
    debug!(entries = entries.len(), path = %path.display(), "Parsed configuration entries");

    validate(&entries)
}

/// Best-effort lookup of the configured version, for error reports.
pub fn version_or_default(path: &Path) -> String {
    load_settings(path)
        .map(|settings| settings.version)
        .unwrap_or_else(|_| DEFAULT_VERSION.to_string())
}

fn validate(entries: &HashMap<String, ConfigValue>) -> Result<Settings> {
    let missing: Vec<&'static str> = REQUIRED_KEYS
        .into_iter()
        .filter(|key| !entries.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(Error::ConfigMissingKeys(missing));
    }

    let seed = match &entries["seed"] {
        ConfigValue::Int(seed) => *seed,
        ConfigValue::WideInt(_) => return Err(Error::ConfigRange { key: "seed" }),
        ConfigValue::Str(_) => {
            return Err(Error::ConfigType {
                key: "seed",
                expected: "an integer",
            });
        }
    };

    let window = parse_window(&entries["window"])?;

    let version = entries["version"]
        .as_str()
        .filter(|v| !v.is_empty())
        .ok_or(Error::ConfigType {
            key: "version",
            expected: "a non-empty string",
        })?;

    Ok(Settings {
        seed,
        window,
        version: version.to_string(),
    })
}

fn parse_window(value: &ConfigValue) -> Result<NonZeroUsize> {
    let not_positive = Error::ConfigType {
        key: "window",
        expected: "a positive integer",
    };
    match value {
        ConfigValue::Int(w) if *w > 0 => usize::try_from(*w)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(Error::ConfigRange { key: "window" }),
        ConfigValue::WideInt(digits) if !digits.starts_with('-') => {
            Err(Error::ConfigRange { key: "window" })
        }
        _ => Err(not_positive),
    }
}
