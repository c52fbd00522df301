use crate::shared::chat_log::{error_text, Message};
use contracts::shared::LogLine;
use contracts::usecases::u602_export_lines::ExportResponse;

pub const EXPORT_FAILED: &str = "export failed";

/// Rebuild lines from rendered text, one per newline-separated row.
///
/// Lossy: the original `ts` and `labels` are not recoverable, so every line
/// carries the whole displayed row as its text.
pub fn lines_from_display(text: &str) -> Vec<LogLine> {
    text.split('\n').map(LogLine::bare).collect()
}

/// The single message rendered once an export settles
pub fn export_outcome_message(result: Result<ExportResponse, String>) -> Message {
    match result {
        Ok(response) => Message::system("Exported", response.path),
        Err(e) => Message::system("Export Error", error_text(e, EXPORT_FAILED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_from_display() {
        let lines = lines_from_display("t1 hello\nt2 world");
        assert_eq!(lines, vec![LogLine::bare("t1 hello"), LogLine::bare("t2 world")]);
        assert!(lines.iter().all(|l| l.ts.is_empty() && l.labels.is_empty()));
    }

    #[test]
    fn test_outcome_messages() {
        let ok = export_outcome_message(Ok(ExportResponse {
            path: "/var/exports/logs-1.txt".to_string(),
        }));
        assert_eq!(ok.title, "Exported");
        assert_eq!(ok.content.as_deref(), Some("/var/exports/logs-1.txt"));

        let err = export_outcome_message(Err("disk full".to_string()));
        assert_eq!(err.title, "Export Error");
        assert_eq!(err.content.as_deref(), Some("disk full"));

        let fallback = export_outcome_message(Err(String::new()));
        assert_eq!(fallback.content.as_deref(), Some("export failed"));
    }
}
