//! Structured log entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "neuralglass_core::relay")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Structured fields recorded with the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl LogEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == "error"
    }

    /// One-line rendering for text consoles: `LEVEL target: msg {fields}`.
    pub fn display_line(&self) -> String {
        let mut line = format!("{} {}: {}", self.level.to_uppercase(), self.target, self.msg);
        if let Some(fields) = &self.fields {
            line.push(' ');
            line.push_str(&fields.to_string());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_without_fields() {
        let entry = LogEntry::new("info", "neuralglass", "boot");
        assert_eq!(entry.display_line(), "INFO neuralglass: boot");
        assert!(!entry.is_error());
    }

    #[test]
    fn display_line_includes_fields() {
        let entry = LogEntry::new("error", "neuralglass_core::relay", "Relay call failed")
            .with_fields(serde_json::json!({"error": "timeout"}));
        assert_eq!(
            entry.display_line(),
            r#"ERROR neuralglass_core::relay: Relay call failed {"error":"timeout"}"#
        );
        assert!(entry.is_error());
    }
}
