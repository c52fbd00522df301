use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One unit of log/trace output returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// Timestamp as reported by the log store (opaque to the console)
    pub ts: String,

    /// Raw line text
    pub line: String,

    /// Stream labels (namespace, pod, container, ...)
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl LogLine {
    /// Line with no timestamp and no labels.
    ///
    /// Used when previously rendered text is sent back for export; the
    /// original `ts` and `labels` are not recoverable from display text.
    pub fn bare(line: impl Into<String>) -> Self {
        Self {
            ts: String::new(),
            line: line.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Display form: `"<ts> <line>"`
    pub fn display(&self) -> String {
        format!("{} {}", self.ts, self.line)
    }
}
