use crate::shared::LogLine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

/// Request body of `POST /api/export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub format: ExportFormat,
    pub lines: Vec<LogLine>,
}

impl ExportRequest {
    pub fn text(lines: Vec<LogLine>) -> Self {
        Self {
            format: ExportFormat::Text,
            lines,
        }
    }
}
