//! Destinations for diagnostic entries.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::RwLock;

use super::entry::LogEntry;

/// Receives every entry the [`DiagnosticLayer`](super::DiagnosticLayer) builds.
pub trait DiagnosticSink: Send + Sync + 'static {
    fn record(&self, entry: LogEntry);
}

/// Default number of entries kept by a [`MemorySink`].
const DEFAULT_CAPACITY: usize = 256;

/// Bounded in-memory buffer of recent entries (oldest are evicted).
///
/// Cloning shares the same buffer.
#[derive(Clone)]
pub struct MemorySink {
    inner: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl MemorySink {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.inner.read().iter().cloned().collect()
    }

    pub fn errors(&self) -> Vec<LogEntry> {
        self.inner
            .read()
            .iter()
            .filter(|entry| entry.is_error())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, entry: LogEntry) {
        let mut buffer = self.inner.write();
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}
