pub mod request;
pub mod response;

pub use request::{QueryRequest, TimeRange, DEFAULT_MAX_LINES, DEFAULT_WINDOW_SECONDS};
pub use response::QueryResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct QueryLogs;

impl UseCaseMetadata for QueryLogs {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "query_logs"
    }

    fn display_name() -> &'static str {
        "Query logs"
    }

    fn description() -> &'static str {
        "Fetch log/trace lines for a cluster, filtered by components, keywords and time range"
    }
}
