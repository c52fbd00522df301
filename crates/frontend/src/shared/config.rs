//! Console configuration
//!
//! Defaults are compiled in. The page's query string may override the API
//! base, the initial cluster id/config path and the event markers, e.g.
//! `?api_base=http://127.0.0.1:8000&cluster_id=prod-eu&events[0]=2024-03-15T14:02:26Z`.

use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Prefix for `/api/...` paths; empty means same origin
    pub api_base: String,
    /// Initial value of the cluster id field
    pub cluster_id: String,
    /// Initial value of the cluster config path field
    pub config_path: String,
    /// Tokens offered as `data-component` chips
    pub component_chips: Vec<String>,
    /// Tokens offered as `data-keyword` chips
    pub keyword_chips: Vec<String>,
    /// Relative ranges offered as `data-range` chips, in minutes
    pub range_minutes: Vec<u32>,
    /// Event timestamps offered as `data-event` chips, in addition to the
    /// always-present "center on event" field. Empty unless overridden.
    pub event_markers: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            cluster_id: String::new(),
            config_path: String::new(),
            component_chips: to_strings(&["kube-apiserver", "etcd", "kubelet", "coredns", "ingress"]),
            keyword_chips: to_strings(&["error", "timeout", "panic", "OOMKilled", "trace_id"]),
            range_minutes: vec![15, 30, 60],
            event_markers: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    api_base: Option<String>,
    cluster_id: Option<String>,
    config_path: Option<String>,
    events: Option<Vec<String>>,
}

impl ConsoleConfig {
    /// Defaults with overrides taken from a query string (leading `?` optional).
    ///
    /// An unparseable query string is ignored.
    pub fn from_query_string(search: &str) -> Self {
        let overrides: ConfigOverrides = match serde_qs::from_str(search.trim_start_matches('?')) {
            Ok(overrides) => overrides,
            Err(e) => {
                log::warn!("Ignoring console config overrides: {}", e);
                ConfigOverrides::default()
            }
        };

        let mut config = Self::default();
        if let Some(api_base) = overrides.api_base {
            config.api_base = api_base.trim().trim_end_matches('/').to_string();
        }
        if let Some(cluster_id) = overrides.cluster_id {
            config.cluster_id = cluster_id;
        }
        if let Some(config_path) = overrides.config_path {
            config.config_path = config_path;
        }
        if let Some(events) = overrides.events {
            config.event_markers = events;
        }
        config
    }

    /// Config for the current page location
    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query_string(&search)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
