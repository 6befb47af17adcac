use std::path::Path;

use analytics::{AnalyticsEngine, MetricsReport};
use core_types::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strategies::compute_signals;
use tracing::{Dispatch, info};

/// Runs one validate-then-compute pass over a config file and a dataset.
///
/// Every event is recorded through the `Dispatch` handed in at construction;
/// the pipeline never touches the global subscriber.
pub struct Pipeline {
    dispatch: Dispatch,
    analytics: AnalyticsEngine,
    /// Seeded from the config on each run.
    rng: Option<StdRng>,
}

impl Pipeline {
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            analytics: AnalyticsEngine::new(),
            rng: None,
        }
    }

    /// Validates the config, then the dataset, then computes the signal rate.
    ///
    /// Validation errors are returned exactly as the validators raised them.
    /// The config is always validated before the dataset is opened, so a bad
    /// config wins over a bad dataset.
    pub fn run(&mut self, input_path: &Path, config_path: &Path) -> Result<MetricsReport> {
        let dispatch = self.dispatch.clone();
        tracing::dispatcher::with_default(&dispatch, || self.run_stages(input_path, config_path))
    }

    /// The generator seeded by the most recent run, for stochastic steps
    /// layered on top of the signal.
    pub fn rng_mut(&mut self) -> Option<&mut StdRng> {
        self.rng.as_mut()
    }

    fn run_stages(&mut self, input_path: &Path, config_path: &Path) -> Result<MetricsReport> {
        // --- 1. Configuration ---
        let settings = app_config::load_settings(config_path)?;

        // Only the low 64 bits seed the generator.
        self.rng = Some(StdRng::seed_from_u64(settings.seed as u64));
        info!(
            "Config loaded: seed={}, window={}, version={}",
            settings.seed, settings.window, settings.version
        );

        // --- 2. Dataset ---
        let rows = dataset::load_rows(input_path)?;
        info!("Data loaded: {} rows", rows.len());

        // --- 3. Signals ---
        let closes: Vec<f64> = rows.iter().map(|row| row.close).collect();
        info!("Rolling mean calculated with window={}", settings.window);
        let signals = compute_signals(&closes, settings.window);
        info!("Signals generated");

        // --- 4. Metrics ---
        let report = self
            .analytics
            .calculate(&settings.version, settings.seed, &signals);
        info!(
            "Metrics: signal_rate={:.4}, rows_processed={}",
            report.value, report.rows_processed
        );

        Ok(report)
    }
}
