// In crates/strategies/src/lib.rs

use std::num::NonZeroUsize;

pub use core_types::Signal;

pub mod indicators;
pub mod rolling_mean;
pub mod types;

pub use rolling_mean::RollingMeanStrategy;
pub use types::RollingMeanSettings;

/// The universal interface for a trading strategy.
///
/// A strategy consumes closes one at a time, in time order, and answers with a
/// `Signal` for each. It is stateful: it keeps whatever history its indicators
/// need between calls.
pub trait Strategy {
    /// Feeds the next close and returns the signal for that position.
    fn assess(&mut self, close: f64) -> Signal;

    /// Drops all accumulated history.
    fn reset(&mut self);

    /// Assesses a whole series from a clean state, one signal per close, in
    /// order.
    fn assess_series(&mut self, closes: &[f64]) -> Vec<Signal> {
        self.reset();
        closes.iter().map(|&close| self.assess(close)).collect()
    }
}

/// Computes the rolling-mean signal for every close.
///
/// A fresh strategy is used for each call, so the output depends only on the
/// arguments. Runs in O(n) time with O(window) memory.
pub fn compute_signals(closes: &[f64], window: NonZeroUsize) -> Vec<Signal> {
    let mut strategy = RollingMeanStrategy::new(RollingMeanSettings { window });
    strategy.assess_series(closes)
}
