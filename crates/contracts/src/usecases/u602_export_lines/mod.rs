pub mod request;
pub mod response;

pub use request::{ExportFormat, ExportRequest};
pub use response::ExportResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ExportLines;

impl UseCaseMetadata for ExportLines {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "export_lines"
    }

    fn display_name() -> &'static str {
        "Export lines"
    }

    fn description() -> &'static str {
        "Write previously fetched lines to a file on the backend host"
    }
}
