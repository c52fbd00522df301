//! API utilities for frontend-backend communication
//!
//! Every console request is a JSON POST; failures of any kind collapse into a
//! single `String` message.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build a full API URL from a base prefix and a path
///
/// # Example
/// ```rust
/// use logservice_console::shared::api_utils::api_url;
///
/// assert_eq!(api_url("", "/api/query"), "/api/query");
/// assert_eq!(api_url("http://127.0.0.1:8000/", "/api/query"), "http://127.0.0.1:8000/api/query");
/// ```
pub fn api_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

/// POST `body` as JSON and decode a JSON response.
///
/// A non-2xx response yields its body text verbatim as the error.
pub async fn post_json<Req, Resp>(url: &str, body: &Req) -> Result<Resp, String>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let ok = response.ok();
    if !ok {
        log::warn!("POST {} failed with HTTP {}", url, response.status());
    }
    let text = response.text().await.map_err(|e| e.to_string())?;
    decode_response(ok, text)
}

/// Turn a settled response into the console's single error kind.
///
/// Non-2xx: the body text as is. 2xx with a body that does not decode: the
/// serde error message.
pub fn decode_response<Resp: DeserializeOwned>(ok: bool, body: String) -> Result<Resp, String> {
    if !ok {
        return Err(body);
    }
    serde_json::from_str(&body).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use contracts::usecases::u601_query_logs::QueryResponse;
    use contracts::usecases::u602_export_lines::ExportResponse;

    #[test]
    fn test_decode_error_status_keeps_body() {
        let result = decode_response::<QueryResponse>(false, "boom".to_string());
        assert_eq!(result, Err("boom".to_string()));
    }

    #[test]
    fn test_decode_error_status_ignores_json_body() {
        let result = decode_response::<QueryResponse>(false, r#"{"lines":[]}"#.to_string());
        assert_eq!(result, Err(r#"{"lines":[]}"#.to_string()));
    }

    #[test]
    fn test_decode_malformed_json() {
        let result = decode_response::<QueryResponse>(true, "not json".to_string());
        assert!(!result.unwrap_err().is_empty());

        let wrong_shape = decode_response::<ExportResponse>(true, r#"{"lines":[]}"#.to_string());
        assert!(wrong_shape.is_err());
    }

    #[test]
    fn test_decode_success() {
        let result = decode_response::<QueryResponse>(true, r#"{"lines":[]}"#.to_string());
        assert_eq!(result, Ok(QueryResponse::default()));
    }

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("", "/api/query"), "/api/query");
        assert_eq!(api_url("http://127.0.0.1:8000", "/api/export"), "http://127.0.0.1:8000/api/export");
        assert_eq!(api_url("http://127.0.0.1:8000/", "/api/export"), "http://127.0.0.1:8000/api/export");
    }
}
