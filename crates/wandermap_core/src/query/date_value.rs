//! Lenient date interpretation used by list sorting.
//!
//! Sort keys are free-form strings (`startDate`, and for newest/oldest the
//! record id). They are read as instants with the following rules:
//!
//! - `""` is the Unix epoch.
//! - `YYYY`, `YYYY-MM` and `YYYY-MM-DD` are the first instant of that
//!   year, month or day in UTC.
//! - `YYYY-MM-DDTHH:MM[:SS[.fff]]` without an offset is read as UTC.
//! - RFC 3339 timestamps are read exactly.
//! - Anything else is invalid. This includes the 13-digit millisecond
//!   strings issued as ids, so newest/oldest leaves generated records in
//!   their incoming order.
//!
//! A comparison that involves an invalid value reports `Equal`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Milliseconds since the Unix epoch, or `None` when `text` is not a date.
pub fn date_value(text: &str) -> Option<i64> {
    if text.is_empty() {
        return Some(0);
    }
    if let Some(date) = parse_partial_date(text) {
        return date.and_hms_opt(0, 0, 0).map(|start| start.and_utc().timestamp_millis());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.timestamp_millis());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|timestamp| timestamp.and_utc().timestamp_millis())
}

/// Orders two strings by their date values; invalid values compare equal.
pub fn compare_date_values(left: &str, right: &str) -> Ordering {
    match (date_value(left), date_value(right)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => Ordering::Equal,
    }
}

fn parse_partial_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    match bytes.len() {
        4 if digits(0..4) => NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1),
        7 if digits(0..4) && bytes[4] == b'-' && digits(5..7) => {
            NaiveDate::from_ymd_opt(text[..4].parse().ok()?, text[5..].parse().ok()?, 1)
        }
        10 => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_date_values, date_value};
    use std::cmp::Ordering;

    #[test]
    fn empty_string_is_epoch() {
        assert_eq!(date_value(""), Some(0));
    }

    #[test]
    fn iso_dates_are_utc_midnight() {
        assert_eq!(date_value("1970-01-02"), Some(86_400_000));
        assert_eq!(date_value("1970-02"), Some(31 * 86_400_000));
        assert_eq!(date_value("2024-06-15"), date_value("2024-06-15T00:00"));
    }

    #[test]
    fn timestamps_parse_with_and_without_offset() {
        assert_eq!(date_value("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(date_value("1970-01-01T02:00:00+02:00"), Some(0));
        assert_eq!(date_value("1970-01-01T00:00:00.250"), Some(250));
    }

    #[test]
    fn four_digit_strings_are_years() {
        let thousand = date_value("1000").unwrap();
        let two_thousand = date_value("2000").unwrap();
        assert!(thousand < two_thousand);
        assert_eq!(date_value("2000"), date_value("2000-01-01"));
    }

    #[test]
    fn generated_ids_and_garbage_are_invalid() {
        assert_eq!(date_value("1717171717171"), None);
        assert_eq!(date_value("12"), None);
        assert_eq!(date_value("next summer"), None);
        assert_eq!(date_value("2024-13-01"), None);
    }

    #[test]
    fn invalid_values_compare_equal() {
        assert_eq!(compare_date_values("1000", "2000"), Ordering::Less);
        assert_eq!(compare_date_values("1717171717171", "2000"), Ordering::Equal);
        assert_eq!(compare_date_values("soon", "later"), Ordering::Equal);
    }
}
