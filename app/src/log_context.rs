// In app/src/log_context.rs

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::Dispatch;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

use crate::tracing_layer::{FileLogLayer, LogSink};

/// The log sinks of one job: the console plus an append-only log file.
///
/// Nothing is installed globally. Code runs against this context through
/// `in_scope`, or by taking the `Dispatch` explicitly. The file is flushed on
/// `flush` and again when the context is dropped.
pub struct LogContext {
    dispatch: Dispatch,
    sink: LogSink,
}

impl LogContext {
    /// Opens (or creates) `log_file` for appending and builds the subscriber.
    pub fn open(log_file: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        let sink: LogSink = Arc::new(Mutex::new(BufWriter::new(file)));

        let filter = Targets::new().with_default(tracing::Level::INFO);
        let console_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_filter(filter.clone());
        let file_layer = FileLogLayer::new(Arc::clone(&sink)).with_filter(filter);

        let subscriber = tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            sink,
        })
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this context as the current default subscriber.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn flush(&self) -> io::Result<()> {
        match self.sink.lock() {
            Ok(mut sink) => sink.flush(),
            Err(poisoned) => poisoned.into_inner().flush(),
        }
    }
}

impl Drop for LogContext {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
