//! Browser console sink for the diagnostic layer.

use neuralglass_core::logging::{DiagnosticSink, LogEntry};
use tracing::Level;

/// Writes each log entry to the browser console at the matching severity.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn record(&self, entry: LogEntry) {
        let line = entry.display_line();
        match entry.level.as_str() {
            "error" => gloo::console::error!(line),
            "warn" => gloo::console::warn!(line),
            "info" => gloo::console::info!(line),
            _ => gloo::console::debug!(line),
        }
    }
}

/// Install the global subscriber. Call once, before launching the app.
pub fn init(max_level: Level) {
    use neuralglass_core::logging::DiagnosticLayer;
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(DiagnosticLayer::new(ConsoleSink).with_max_level(max_level))
        .init();
}
