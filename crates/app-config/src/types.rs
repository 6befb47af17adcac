// In crates/app-config/src/types.rs

use std::num::NonZeroUsize;

/// A single coerced value from the job configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Str(String),
    Int(i128),
    /// Integer-shaped text too wide for `Int`.
    WideInt(String),
}

impl ConfigValue {
    /// Coerces the (already trimmed) text on the right of `key:`.
    ///
    /// * `"..."` becomes `Str` with the quotes stripped, even if the inner text
    ///   looks like a number.
    /// * An optional `-` followed by one or more ASCII digits becomes `Int`.
    ///   Values beyond `i128` keep their digits as `WideInt`.
    /// * Anything else is kept verbatim as `Str`.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with('"') && raw.ends_with('"') {
            // A lone `"` both starts and ends with a quote.
            let inner = if raw.len() >= 2 { &raw[1..raw.len() - 1] } else { "" };
            return ConfigValue::Str(inner.to_string());
        }

        let digits = raw.strip_prefix('-').unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return match raw.parse::<i128>() {
                Ok(value) => ConfigValue::Int(value),
                Err(_) => ConfigValue::WideInt(raw.to_string()),
            };
        }

        ConfigValue::Str(raw.to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(value) => Some(value),
            _ => None,
        }
    }

}

/// The validated job configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Seeds every source of randomness in a run.
    pub seed: i128,
    /// Number of closes in the rolling mean.
    pub window: NonZeroUsize,
    /// Free-form version tag echoed into every report.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_values_stay_strings() {
        assert_eq!(ConfigValue::parse("\"v1\""), ConfigValue::Str("v1".into()));
        assert_eq!(ConfigValue::parse("\"42\""), ConfigValue::Str("42".into()));
        assert_eq!(ConfigValue::parse("\"\""), ConfigValue::Str(String::new()));
        assert_eq!(ConfigValue::parse("\""), ConfigValue::Str(String::new()));
    }

    #[test]
    fn integer_shapes() {
        assert_eq!(ConfigValue::parse("42"), ConfigValue::Int(42));
        assert_eq!(ConfigValue::parse("-7"), ConfigValue::Int(-7));
        assert_eq!(ConfigValue::parse("007"), ConfigValue::Int(7));
        assert_eq!(ConfigValue::parse("-"), ConfigValue::Str("-".into()));
        assert_eq!(ConfigValue::parse("+3"), ConfigValue::Str("+3".into()));
        assert_eq!(ConfigValue::parse("3.5"), ConfigValue::Str("3.5".into()));
        assert_eq!(ConfigValue::parse("1e3"), ConfigValue::Str("1e3".into()));
    }

    #[test]
    fn integers_beyond_i64_stay_integers() {
        assert_eq!(
            ConfigValue::parse("99999999999999999999"),
            ConfigValue::Int(99_999_999_999_999_999_999)
        );
        assert_eq!(
            ConfigValue::parse("-99999999999999999999"),
            ConfigValue::Int(-99_999_999_999_999_999_999)
        );

        let huge = "1".repeat(40);
        let value = ConfigValue::parse(&huge);
        assert_eq!(value.as_str(), None);
        assert_eq!(value, ConfigValue::WideInt(huge));
    }

    #[test]
    fn unquoted_text_is_raw_string() {
        assert_eq!(ConfigValue::parse("v2"), ConfigValue::Str("v2".into()));
        assert_eq!(ConfigValue::parse(""), ConfigValue::Str(String::new()));
        assert_eq!(ConfigValue::parse("\"half"), ConfigValue::Str("\"half".into()));
    }
}
