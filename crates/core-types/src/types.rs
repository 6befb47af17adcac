// In crates/core-types/src/types.rs

use std::sync::Arc;

/// One record of the input table.
///
/// The header is shared by every row of a load, so a row only owns its raw
/// field values plus the parsed `close`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    header: Arc<[String]>,
    values: Vec<String>,
    /// The coerced value of the `close` column.
    pub close: f64,
}

impl Row {
    pub fn new(header: Arc<[String]>, values: Vec<String>, close: f64) -> Self {
        Self {
            header,
            values,
            close,
        }
    }

    /// Raw text of a column. With duplicate header names the last column wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.header.iter().rposition(|name| name == column)?;
        self.values.get(idx).map(String::as_str)
    }
}

/// The binary trading signal emitted for each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    /// No trend call: warm-up, or close at or below the rolling mean.
    #[default]
    Hold,
    /// Close strictly above the rolling mean.
    GoLong,
}

impl Signal {
    pub fn is_long(self) -> bool {
        self == Signal::GoLong
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Hold => 0,
            Signal::GoLong => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn row_lookup_prefers_last_duplicate_column() {
        let row = Row::new(
            header(&["close", "ts", "close"]),
            vec!["1".into(), "t0".into(), "2".into()],
            2.0,
        );
        assert_eq!(row.get("close"), Some("2"));
        assert_eq!(row.get("ts"), Some("t0"));
        assert_eq!(row.get("volume"), None);
    }

    #[test]
    fn signal_as_binary() {
        assert_eq!(u8::from(Signal::Hold), 0);
        assert_eq!(u8::from(Signal::GoLong), 1);
        assert!(Signal::GoLong.is_long());
        assert_eq!(Signal::default(), Signal::Hold);
    }
}
