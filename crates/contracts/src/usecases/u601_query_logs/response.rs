use crate::shared::LogLine;
use serde::{Deserialize, Serialize};

/// Response of `POST /api/query`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub lines: Vec<LogLine>,

    /// Set when the backend stopped at `max_lines`
    #[serde(default)]
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_is_optional() {
        let response: QueryResponse =
            serde_json::from_str(r#"{"lines":[{"ts":"t1","line":"hello","labels":{"pod":"a"}}]}"#)
                .unwrap();
        assert!(!response.truncated);
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].labels.get("pod").map(String::as_str), Some("a"));
    }
}
