use crate::shared::api_utils::{api_url, post_json};
use contracts::usecases::u601_query_logs::{QueryRequest, QueryResponse};

const QUERY_PATH: &str = "/api/query";

/// API client for UseCase u601
pub async fn query_logs(api_base: String, request: QueryRequest) -> Result<QueryResponse, String> {
    post_json(&api_url(&api_base, QUERY_PATH), &request).await
}
