// In app/src/tracing_layer.rs

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;

/// Buffered log file shared between the layer and its owning `LogContext`.
pub type LogSink = Arc<Mutex<BufWriter<File>>>;

/// Writes every event as a `timestamp - LEVEL - message` line.
pub struct FileLogLayer {
    sink: LogSink,
}

impl FileLogLayer {
    pub fn new(sink: LogSink) -> Self {
        Self { sink }
    }
}

impl<S> Layer<S> for FileLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        // Create a visitor to extract the message from the event's fields.
        let mut visitor = LogMessageVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            event.metadata().level(),
            visitor.finish()
        );

        // A poisoned sink only means another thread panicked mid-write.
        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(sink, "{line}");
    }
}

/// Captures the `message` field, then appends any structured fields as
/// `key=value`.
#[derive(Default)]
struct LogMessageVisitor {
    message: String,
    fields: String,
}

impl LogMessageVisitor {
    fn finish(self) -> String {
        self.message + &self.fields
    }

    fn push_field(&mut self, field: &Field, value: &dyn std::fmt::Display) {
        let _ = write!(self.fields, " {}={}", field.name(), value);
    }
}

impl Visit for LogMessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field, &format_args!("{value:?}"));
        }
    }
}
