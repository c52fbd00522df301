use crate::shared::config::ConsoleConfig;
use crate::shared::list_utils::split_list;
use contracts::usecases::u601_query_logs::{
    QueryRequest, TimeRange, DEFAULT_MAX_LINES, DEFAULT_WINDOW_SECONDS,
};
use leptos::prelude::*;

/// Form field signals of the console
#[derive(Clone, Copy)]
pub struct QueryForm {
    pub cluster_id: RwSignal<String>,
    pub config_path: RwSignal<String>,
    pub components: RwSignal<String>,
    pub keywords: RwSignal<String>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    /// Timestamp typed for "center on event"; not sent with the query
    pub event_time: RwSignal<String>,
}

impl QueryForm {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            cluster_id: RwSignal::new(config.cluster_id.clone()),
            config_path: RwSignal::new(config.config_path.clone()),
            components: RwSignal::new(String::new()),
            keywords: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            event_time: RwSignal::new(String::new()),
        }
    }

    /// Current raw field values
    pub fn snapshot(&self) -> QueryFormValues {
        QueryFormValues {
            cluster_id: self.cluster_id.get_untracked(),
            config_path: self.config_path.get_untracked(),
            components: self.components.get_untracked(),
            keywords: self.keywords.get_untracked(),
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
        }
    }
}

/// Raw text of every field, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFormValues {
    pub cluster_id: String,
    pub config_path: String,
    pub components: String,
    pub keywords: String,
    pub start_time: String,
    pub end_time: String,
}

impl QueryFormValues {
    /// Build the request body.
    ///
    /// Only trims: time formats and cluster id are left for the backend to
    /// validate.
    pub fn to_request(&self) -> QueryRequest {
        let config_path = self.config_path.trim();
        QueryRequest {
            cluster_id: self.cluster_id.trim().to_string(),
            cluster_config_path: (!config_path.is_empty()).then(|| config_path.to_string()),
            components: split_list(&self.components),
            keywords: split_list(&self.keywords),
            time_range: TimeRange {
                start: self.start_time.trim().to_string(),
                end: self.end_time.trim().to_string(),
            },
            max_lines: DEFAULT_MAX_LINES,
            window_seconds: DEFAULT_WINDOW_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_trims_and_filters() {
        let values = QueryFormValues {
            cluster_id: "  prod-eu ".to_string(),
            config_path: "   ".to_string(),
            components: "a, ,b ,".to_string(),
            keywords: " error ,timeout".to_string(),
            start_time: " 2024-03-15T13:50:00.000Z".to_string(),
            end_time: "2024-03-15T14:00:00.000Z ".to_string(),
        };

        let request = values.to_request();
        assert_eq!(request.cluster_id, "prod-eu");
        assert_eq!(request.cluster_config_path, None);
        assert_eq!(request.components, vec!["a", "b"]);
        assert_eq!(request.keywords, vec!["error", "timeout"]);
        assert_eq!(request.time_range.start, "2024-03-15T13:50:00.000Z");
        assert_eq!(request.time_range.end, "2024-03-15T14:00:00.000Z");
        assert_eq!(request.max_lines, 100);
        assert_eq!(request.window_seconds, 300);
    }

    #[test]
    fn test_malformed_input_passes_through() {
        let values = QueryFormValues {
            config_path: " /etc/clusters/prod.yaml ".to_string(),
            start_time: "last tuesday".to_string(),
            ..Default::default()
        };

        let request = values.to_request();
        assert_eq!(request.cluster_id, "");
        assert_eq!(request.cluster_config_path.as_deref(), Some("/etc/clusters/prod.yaml"));
        assert_eq!(request.time_range.start, "last tuesday");
        assert_eq!(request.time_range.end, "");
    }

    #[test]
    fn test_snapshot_reads_signals() {
        let config = ConsoleConfig {
            cluster_id: "c1".to_string(),
            ..Default::default()
        };
        let form = QueryForm::new(&config);
        form.components.set("etcd".to_string());

        let values = form.snapshot();
        assert_eq!(values.cluster_id, "c1");
        assert_eq!(values.components, "etcd");
        assert_eq!(values.keywords, "");
    }
}
