use serde::{Deserialize, Serialize};

/// Line cap sent with every console query
pub const DEFAULT_MAX_LINES: u32 = 100;

/// Aggregation window sent with every console query
pub const DEFAULT_WINDOW_SECONDS: u32 = 300;

/// Time range of a query; both ends are ISO-8601 strings passed through as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Structured filter request sent to `POST /api/query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub cluster_id: String,

    /// Path to a cluster config file on the backend host; `null` when not set
    pub cluster_config_path: Option<String>,

    #[serde(default)]
    pub components: Vec<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    pub time_range: TimeRange,

    #[serde(default = "default_max_lines")]
    pub max_lines: u32,

    #[serde(default = "default_window_seconds")]
    pub window_seconds: u32,
}

fn default_max_lines() -> u32 {
    DEFAULT_MAX_LINES
}

fn default_window_seconds() -> u32 {
    DEFAULT_WINDOW_SECONDS
}
