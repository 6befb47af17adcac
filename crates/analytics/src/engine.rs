// In crates/analytics/src/engine.rs

use core_types::Signal;
use rust_decimal::prelude::*;

use crate::types::{Metric, MetricsReport, ReportStatus};

/// Decimal places kept in the reported signal rate.
pub const VALUE_DECIMALS: u32 = 4;

/// The engine responsible for turning a signal series into metrics.
#[derive(Debug, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Builds the success report for one run.
    ///
    /// `rows_processed` is the number of signals, which the pipeline keeps
    /// equal to the number of rows loaded.
    pub fn calculate(&self, version: &str, seed: i128, signals: &[Signal]) -> MetricsReport {
        let longs = signals.iter().filter(|s| s.is_long()).count();

        MetricsReport {
            version: version.to_string(),
            rows_processed: signals.len(),
            metric: Metric::SignalRate,
            value: signal_rate(longs, signals.len()),
            seed,
            status: ReportStatus::Success,
            latency_ms: None,
        }
    }
}

/// Exact `longs / total`, rounded half-to-even at `VALUE_DECIMALS` places.
///
/// Rounding is done on the exact ratio, not on its binary approximation, so
/// `1/32 = 0.03125` lands on `0.0312` and `3/32 = 0.09375` on `0.0938`.
/// An empty series has a rate of zero.
pub fn signal_rate_exact(longs: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(longs) / Decimal::from(total))
        .round_dp_with_strategy(VALUE_DECIMALS, RoundingStrategy::MidpointNearestEven)
}

/// `signal_rate_exact` as the `f64` written into reports.
pub fn signal_rate(longs: usize, total: usize) -> f64 {
    signal_rate_exact(longs, total).to_f64().unwrap_or(0.0)
}
