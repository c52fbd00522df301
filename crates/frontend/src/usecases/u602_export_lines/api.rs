use crate::shared::api_utils::{api_url, post_json};
use contracts::usecases::u602_export_lines::{ExportRequest, ExportResponse};

const EXPORT_PATH: &str = "/api/export";

/// API client for UseCase u602
pub async fn export_lines(api_base: String, request: ExportRequest) -> Result<ExportResponse, String> {
    post_json(&api_url(&api_base, EXPORT_PATH), &request).await
}
