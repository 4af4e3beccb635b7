//! Human-readable decision trace.
//!
//! The engine reports each strategy decision as one line of text to a
//! [`TraceSink`]. This is separate from the `tracing` spans the library
//! emits: a sink is what a driver shows its user, `tracing` is what an
//! operator filters with `RUST_LOG`.

use chrono::Local;
use tracing::info;

/// Receives one formatted line per engine decision.
pub trait TraceSink: Send + Sync {
    /// Handles one line.
    fn record(&self, line: &str);
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&self, _line: &str) {}
}

/// Forwards lines to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, line: &str) {
        info!(target: "strictly_heuristics::trace", "{line}");
    }
}

impl<F> TraceSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn record(&self, line: &str) {
        self(line)
    }
}

/// Prefixes a message with the local timestamp, `YYYYMMDD-HH:MM:SS | message`.
pub fn format_line(message: &str) -> String {
    format!("{} | {}", Local::now().format("%Y%m%d-%H:%M:%S"), message)
}

/// Formats and records one message.
pub fn emit(sink: &dyn TraceSink, message: &str) {
    sink.record(&format_line(message));
}
