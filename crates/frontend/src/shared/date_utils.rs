/// Time-range helpers for the query window
///
/// All timestamps are produced as ISO-8601 UTC strings with millisecond
/// precision, e.g. "2024-03-15T14:02:26.123Z".
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Minutes before an event used by [`event_window`]
pub const EVENT_WINDOW_MINUTES: i64 = 10;

/// Indicator width for an event-centered window, percent
pub const EVENT_WINDOW_WIDTH: f64 = 25.0;

pub const MIN_WINDOW_WIDTH: f64 = 15.0;
pub const MAX_WINDOW_WIDTH: f64 = 60.0;

/// Result of a range helper: both time fields plus the indicator width
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelection {
    pub start: String,
    pub end: String,
    pub width_percent: f64,
}

/// Format as "2024-03-15T14:02:26.123Z"
pub fn to_iso(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Indicator width for a window of `minutes`: minutes/60*100, clamped to [15, 60]
pub fn window_width_percent(minutes: u32) -> f64 {
    (f64::from(minutes) / 60.0 * 100.0).clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH)
}

/// The last `minutes` minutes ending at `now`
pub fn relative_range(now: DateTime<Utc>, minutes: u32) -> RangeSelection {
    let start = now - Duration::minutes(i64::from(minutes));
    RangeSelection {
        start: to_iso(start),
        end: to_iso(now),
        width_percent: window_width_percent(minutes),
    }
}

/// Ten minutes leading up to `event_ts`.
///
/// Returns `None` when `event_ts` is not an RFC 3339 timestamp.
pub fn event_window(event_ts: &str) -> Option<RangeSelection> {
    let end = DateTime::parse_from_rfc3339(event_ts.trim())
        .ok()?
        .with_timezone(&Utc);
    let start = end - Duration::minutes(EVENT_WINDOW_MINUTES);
    Some(RangeSelection {
        start: to_iso(start),
        end: to_iso(end),
        width_percent: EVENT_WINDOW_WIDTH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_to_iso() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(to_iso(dt), "2024-03-15T14:02:26.000Z");
    }

    #[test]
    fn test_relative_range_30_minutes() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap();
        let range = relative_range(now, 30);
        assert_eq!(range.end, "2024-03-15T14:00:00.000Z");
        assert_eq!(range.start, "2024-03-15T13:30:00.000Z");
        assert_eq!(parse(&range.end) - parse(&range.start), Duration::minutes(30));
        assert_eq!(range.width_percent, 50.0);
    }

    #[test]
    fn test_window_width_clamps() {
        assert_eq!(window_width_percent(5), 15.0);
        assert_eq!(window_width_percent(15), 25.0);
        assert_eq!(window_width_percent(90), 60.0);
        assert_eq!(window_width_percent(240), 60.0);
    }

    #[test]
    fn test_event_window() {
        let range = event_window("2024-03-15T14:02:26.123Z").unwrap();
        assert_eq!(range.end, "2024-03-15T14:02:26.123Z");
        assert_eq!(range.start, "2024-03-15T13:52:26.123Z");
        assert_eq!(range.width_percent, 25.0);
    }

    #[test]
    fn test_event_window_normalizes_offset() {
        let range = event_window("2024-03-15T16:00:00+02:00").unwrap();
        assert_eq!(range.end, "2024-03-15T14:00:00.000Z");
        assert_eq!(range.start, "2024-03-15T13:50:00.000Z");
    }

    #[test]
    fn test_event_window_invalid() {
        assert_eq!(event_window("yesterday"), None);
        assert_eq!(event_window(""), None);
    }
}
