// In crates/strategies/src/indicators.rs

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use ta::{Next, Period, Reset};

/// Simple moving average over the last `window` inputs, including the input
/// just fed in.
///
/// Kept as a running sum over a bounded buffer. The order of operations is
/// add-then-evict, so results are reproducible bit for bit across runs. While
/// fewer than `window` values have been seen the indicator yields `None`.
#[derive(Debug, Clone)]
pub struct RollingMean {
    window: NonZeroUsize,
    buffer: VecDeque<f64>,
    running_sum: f64,
}

impl RollingMean {
    pub fn new(window: NonZeroUsize) -> Self {
        Self {
            window,
            buffer: VecDeque::with_capacity(window.get() + 1),
            running_sum: 0.0,
        }
    }
}

impl Period for RollingMean {
    fn period(&self) -> usize {
        self.window.get()
    }
}

impl Next<f64> for RollingMean {
    type Output = Option<f64>;

    fn next(&mut self, input: f64) -> Self::Output {
        let window = self.window.get();

        self.buffer.push_back(input);
        self.running_sum += input;

        if self.buffer.len() > window {
            if let Some(oldest) = self.buffer.pop_front() {
                self.running_sum -= oldest;
            }
        }

        if self.buffer.len() < window {
            None
        } else {
            Some(self.running_sum / window as f64)
        }
    }
}

impl Reset for RollingMean {
    fn reset(&mut self) {
        self.buffer.clear();
        self.running_sum = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn warms_up_before_yielding() {
        let mut mean = RollingMean::new(window(3));
        assert_eq!(mean.next(1.0), None);
        assert_eq!(mean.next(2.0), None);
        assert_eq!(mean.next(3.0), Some(2.0));
        assert_eq!(mean.next(4.0), Some(3.0));
        assert_eq!(mean.period(), 3);
    }

    #[test]
    fn oldest_value_is_evicted() {
        let mut mean = RollingMean::new(window(2));
        for x in [5.0, 6.0, 7.0, 8.0, 9.0] {
            mean.next(x);
        }
        assert_eq!(mean.buffer.len(), 2);
        assert_eq!(mean.next(1.0), Some(5.0));
    }

    #[test]
    fn reset_clears_history() {
        let mut mean = RollingMean::new(window(2));
        mean.next(1.0);
        mean.next(3.0);
        mean.reset();
        assert!(mean.buffer.is_empty());
        assert_eq!(mean.next(10.0), None);
        assert_eq!(mean.next(20.0), Some(15.0));
    }

    #[test]
    fn window_of_one_is_the_input() {
        let mut mean = RollingMean::new(window(1));
        assert_eq!(mean.next(7.5), Some(7.5));
        assert_eq!(mean.next(-2.0), Some(-2.0));
    }
}
