// In app/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use analytics::ErrorReport;
use clap::Parser;
use pipeline::Pipeline;
use tracing::{error, info};

use crate::log_context::LogContext;

mod log_context;
mod report;
mod tracing_layer;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Computes a rolling-mean trading signal over a price dataset and writes a metrics report.")]
struct Cli {
    /// Input CSV file path.
    #[arg(long)]
    input: PathBuf,

    /// Configuration file path (`key: value` lines).
    #[arg(long)]
    config: PathBuf,

    /// Output metrics JSON file path.
    #[arg(long)]
    output: PathBuf,

    /// Log file path. Lines are appended.
    #[arg(long)]
    log_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobOutcome {
    Succeeded,
    Failed,
}

impl From<JobOutcome> for ExitCode {
    fn from(outcome: JobOutcome) -> Self {
        match outcome {
            JobOutcome::Succeeded => ExitCode::SUCCESS,
            JobOutcome::Failed => ExitCode::FAILURE,
        }
    }
}

// --- Main Application Entry Point ---

fn main() -> ExitCode {
    let cli = Cli::parse();
    let started = Instant::now();

    let log = match LogContext::open(&cli.log_file) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = log.in_scope(|| run_job(&cli, &log, started));

    if let Err(e) = log.flush() {
        eprintln!("Failed to flush log file {}: {e}", cli.log_file.display());
    }

    outcome.into()
}

/// Runs the pipeline and writes exactly one report to `cli.output`.
///
/// A success report gets the wall-clock latency measured from `started`. On
/// any failure an error report is written instead, with the version re-read
/// best-effort from the config.
fn run_job(cli: &Cli, log: &LogContext, started: Instant) -> JobOutcome {
    info!("Job started");

    let mut pipeline = Pipeline::new(log.dispatch().clone());
    let metrics = match pipeline.run(&cli.input, &cli.config) {
        Ok(metrics) => metrics,
        Err(e) => {
            error!("Job failed: {e}");
            write_error_report(cli, &e.to_string());
            return JobOutcome::Failed;
        }
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let metrics = metrics.with_latency_ms(latency_ms);

    match report::write_report(&cli.output, &metrics) {
        Ok(json) => {
            println!("{json}");
            info!("Job completed successfully in {latency_ms}ms");
            JobOutcome::Succeeded
        }
        Err(e) => {
            error!("Job failed: {e:#}");
            write_error_report(cli, &format!("{e:#}"));
            JobOutcome::Failed
        }
    }
}

fn write_error_report(cli: &Cli, message: &str) {
    let version = app_config::version_or_default(&cli.config);
    let payload = ErrorReport::new(version, message);

    match report::write_report(&cli.output, &payload) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Could not write error report: {e:#}"),
    }
}
