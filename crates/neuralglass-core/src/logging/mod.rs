//! Diagnostic logging for page behaviors.
//!
//! Every component logs through `tracing`. [`DiagnosticLayer`] turns those
//! events into [`LogEntry`] values and hands them to a [`DiagnosticSink`]:
//! the browser console in the web app, a bounded in-memory buffer in tests.
//!
//! ## Usage
//!
//! ```ignore
//! use neuralglass_core::logging::{DiagnosticLayer, MemorySink};
//! use tracing_subscriber::prelude::*;
//!
//! let sink = MemorySink::new(256);
//! let subscriber = tracing_subscriber::registry()
//!     .with(DiagnosticLayer::new(sink.clone()));
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::error!(error = "timeout", "Relay call failed");
//! });
//!
//! assert_eq!(sink.errors().len(), 1);
//! ```

pub mod entry;
pub mod layer;
pub mod sink;

// Re-exports for convenience
pub use entry::LogEntry;
pub use layer::DiagnosticLayer;
pub use sink::{DiagnosticSink, MemorySink};
