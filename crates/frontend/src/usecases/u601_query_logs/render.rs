use crate::shared::chat_log::{error_text, Message};
use contracts::usecases::u601_query_logs::QueryResponse;

pub const NO_LINES: &str = "(no lines)";
pub const REQUEST_FAILED: &str = "request failed";

/// `"<ts> <line>"` per line, newline-joined; `(no lines)` when empty
pub fn format_lines(response: &QueryResponse) -> String {
    let text = response
        .lines
        .iter()
        .map(|line| line.display())
        .collect::<Vec<_>>()
        .join("\n");

    if text.is_empty() {
        NO_LINES.to_string()
    } else {
        text
    }
}

/// The single message rendered once a query settles.
///
/// Truncation is reported as a note, outside the content, so a later export
/// only sends log rows.
pub fn query_outcome_message(result: Result<QueryResponse, String>, max_lines: u32) -> Message {
    match result {
        Ok(response) => {
            let message = Message::system("Results", format_lines(&response));
            if response.truncated {
                message.with_note(format!("truncated at {} lines", max_lines))
            } else {
                message
            }
        }
        Err(e) => Message::system("Error", error_text(e, REQUEST_FAILED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::LogLine;
    use std::collections::BTreeMap;

    fn line(ts: &str, text: &str) -> LogLine {
        LogLine {
            ts: ts.to_string(),
            line: text.to_string(),
            labels: BTreeMap::new(),
        }
    }

    #[test]
    fn test_single_line() {
        let response = QueryResponse {
            lines: vec![line("t1", "hello")],
            truncated: false,
        };
        assert_eq!(format_lines(&response), "t1 hello");
    }

    #[test]
    fn test_multiple_lines() {
        let response = QueryResponse {
            lines: vec![line("t1", "hello"), line("t2", "world")],
            truncated: false,
        };
        assert_eq!(format_lines(&response), "t1 hello\nt2 world");
    }

    #[test]
    fn test_no_lines() {
        assert_eq!(format_lines(&QueryResponse::default()), "(no lines)");
    }

    #[test]
    fn test_truncated_note_stays_out_of_content() {
        let response = QueryResponse {
            lines: vec![line("t1", "hello")],
            truncated: true,
        };
        let message = query_outcome_message(Ok(response), 100);
        assert_eq!(message.title, "Results");
        assert_eq!(message.content.as_deref(), Some("t1 hello"));
        assert_eq!(message.note.as_deref(), Some("truncated at 100 lines"));
    }

    #[test]
    fn test_no_note_when_complete() {
        let message = query_outcome_message(Ok(QueryResponse::default()), 100);
        assert_eq!(message.note, None);
    }

    #[test]
    fn test_outcome_messages() {
        let ok = query_outcome_message(Ok(QueryResponse::default()), 100);
        assert_eq!(ok.title, "Results");
        assert_eq!(ok.content.as_deref(), Some("(no lines)"));

        let err = query_outcome_message(Err("boom".to_string()), 100);
        assert_eq!(err.title, "Error");
        assert!(err.content.unwrap().contains("boom"));

        let empty = query_outcome_message(Err(String::new()), 100);
        assert_eq!(empty.content.as_deref(), Some("request failed"));
    }
}
