// In crates/app-config/src/parser.rs

use std::collections::HashMap;

use core_types::{Error, Result};

use crate::types::ConfigValue;

/// Parses `key: value` lines into a map of coerced values.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. The split is on
/// the first `:`, so values may contain further colons. A repeated key
/// overwrites the earlier one.
pub fn parse_key_values(text: &str) -> Result<HashMap<String, ConfigValue>> {
    let mut entries = HashMap::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or(Error::ConfigFormat { line: idx + 1 })?;

        entries.insert(key.trim().to_string(), ConfigValue::parse(value.trim()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# job config\n\nseed: 42\n   \n  # indented comment\nwindow: 3\n";
        let entries = parse_key_values(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["seed"], ConfigValue::Int(42));
        assert_eq!(entries["window"], ConfigValue::Int(3));
    }

    #[test]
    fn splits_on_first_colon_only() {
        let entries = parse_key_values("source: http://host:8080/x\n").unwrap();
        assert_eq!(
            entries["source"],
            ConfigValue::Str("http://host:8080/x".into())
        );
    }

    #[test]
    fn later_duplicate_wins() {
        let entries = parse_key_values("window: 3\nwindow: 5\n").unwrap();
        assert_eq!(entries["window"], ConfigValue::Int(5));
    }

    #[test]
    fn line_without_separator_is_rejected() {
        let err = parse_key_values("seed: 1\nwindow 3\n").unwrap_err();
        assert!(matches!(err, Error::ConfigFormat { line: 2 }));
    }

    #[test]
    fn empty_text_is_empty_map() {
        assert!(parse_key_values("").unwrap().is_empty());
    }
}
