//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Display format for dates, e.g. "Jan 1, 2000"
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Format a date-like template value for display.
///
/// Accepts RFC 3339 strings, naive `YYYY-MM-DDTHH:MM:SS` date-times,
/// plain `YYYY-MM-DD` dates, and millisecond timestamps (as a string of
/// digits or a JSON number). An unparseable string comes back unchanged
/// rather than failing, so a template never loses a field to a
/// malformed date; null yields an empty string, which templates treat
/// as "omit this field".
pub fn display_date(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => match parse_date_string(s) {
            Some(date) => date.format(DISPLAY_FORMAT).to_string(),
            None => s.clone(),
        },
        Value::Number(n) => match n.as_i64().and_then(DateTime::from_timestamp_millis) {
            Some(date) => date.format(DISPLAY_FORMAT).to_string(),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Parse the date encodings that appear in stored content
pub fn parse_date_string(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return date_from_timestamp_string(trimmed);
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Decode a millisecond-timestamp string, e.g. "946684800000"
pub fn date_from_timestamp_string(input: &str) -> Option<DateTime<Utc>> {
    input
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// Encode a date as a millisecond-timestamp string
pub fn timestamp_string_from_date(date: &DateTime<Utc>) -> String {
    date.timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_display_naive_date_time() {
        assert_eq!(display_date(&json!("2000-01-01T00:00:00")), "Jan 1, 2000");
    }

    #[test]
    fn test_display_rfc3339() {
        assert_eq!(display_date(&json!("2000-01-02T03:04:05Z")), "Jan 2, 2000");
    }

    #[test]
    fn test_display_plain_date() {
        assert_eq!(display_date(&json!("2024-11-30")), "Nov 30, 2024");
    }

    #[test]
    fn test_display_timestamp_string() {
        assert_eq!(display_date(&json!("946684800000")), "Jan 1, 2000");
    }

    #[test]
    fn test_display_timestamp_number() {
        assert_eq!(display_date(&json!(946684800000i64)), "Jan 1, 2000");
    }

    #[test]
    fn test_unparseable_input_passes_through() {
        assert_eq!(display_date(&json!("Invalid Date")), "Invalid Date");
        assert_eq!(display_date(&json!("soonish")), "soonish");
    }

    #[test]
    fn test_null_displays_as_empty() {
        assert_eq!(display_date(&Value::Null), "");
    }

    #[test]
    fn test_day_is_not_zero_padded() {
        assert_eq!(display_date(&json!("2024-03-05")), "Mar 5, 2024");
    }

    #[test]
    fn test_timestamp_string_round_trip() {
        let date = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let encoded = timestamp_string_from_date(&date);
        assert_eq!(encoded, "946684800000");
        assert_eq!(date_from_timestamp_string(&encoded), Some(date));
    }
}
