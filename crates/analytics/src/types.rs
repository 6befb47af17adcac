// In crates/analytics/src/types.rs

use serde::Serialize;

/// Outcome tag carried by every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

/// Name of the headline metric in a `MetricsReport`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SignalRate,
}

/// The report written after a successful run.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub version: String,
    pub rows_processed: usize,
    pub metric: Metric,
    /// Fraction of rows with a long signal, rounded to 4 decimals.
    pub value: f64,
    pub seed: i128,
    pub status: ReportStatus,
    /// Wall-clock duration of the whole job. Filled in by the caller that
    /// owns the clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl MetricsReport {
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }
}

/// The report written when a run fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub version: String,
    pub status: ReportStatus,
    pub error_message: String,
}

impl ErrorReport {
    pub fn new(version: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            status: ReportStatus::Error,
            error_message: error_message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> MetricsReport {
        MetricsReport {
            version: "v1".into(),
            rows_processed: 4,
            metric: Metric::SignalRate,
            value: 0.5,
            seed: 42,
            status: ReportStatus::Success,
            latency_ms: None,
        }
    }

    #[test]
    fn success_report_field_order() {
        let json = serde_json::to_string(&report().with_latency_ms(12)).unwrap();
        assert_eq!(
            json,
            r#"{"version":"v1","rows_processed":4,"metric":"signal_rate","value":0.5,"seed":42,"status":"success","latency_ms":12}"#
        );
    }

    #[test]
    fn latency_is_omitted_until_set() {
        let json = serde_json::to_value(report()).unwrap();
        assert!(json.get("latency_ms").is_none());
    }

    #[test]
    fn error_report_shape() {
        let json = serde_json::to_string(&ErrorReport::new("v1", "Empty input file")).unwrap();
        assert_eq!(
            json,
            r#"{"version":"v1","status":"error","error_message":"Empty input file"}"#
        );
    }
}
