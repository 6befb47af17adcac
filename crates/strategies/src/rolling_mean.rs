// In crates/strategies/src/rolling_mean.rs

use ta::{Next, Reset};

use crate::indicators::RollingMean;
use crate::types::RollingMeanSettings;
use crate::{Signal, Strategy};

/// Goes long whenever the close is strictly above its own rolling mean.
///
/// The current close is part of the window it is compared against. During
/// warm-up the strategy holds.
#[derive(Debug, Clone)]
pub struct RollingMeanStrategy {
    mean: RollingMean,
}

impl RollingMeanStrategy {
    /// Creates a new `RollingMeanStrategy` instance from its settings.
    pub fn new(settings: RollingMeanSettings) -> Self {
        Self {
            mean: RollingMean::new(settings.window),
        }
    }
}

impl Strategy for RollingMeanStrategy {
    fn assess(&mut self, close: f64) -> Signal {
        match self.mean.next(close) {
            Some(mean) if close > mean => Signal::GoLong,
            _ => Signal::Hold,
        }
    }

    fn reset(&mut self) {
        self.mean.reset();
    }
}
