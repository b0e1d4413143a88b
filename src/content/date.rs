//! Front-matter date normalization

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_yaml::Value;

/// Timestamp layouts that carry an explicit offset
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

/// Timestamp layouts without an offset, read as UTC
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Calendar-date layouts accepted when ordering entries
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Normalize a raw front-matter date into a `YYYY-MM-DD` string.
///
/// Timestamps with a time component are converted to UTC and truncated to
/// the day. Any other string passes through untouched. A four-digit number
/// is read as a year. Everything else yields `None`.
///
/// # Examples
/// ```ignore
/// normalize_date(&"2024-03-01T10:00:00Z".into()) // -> Some("2024-03-01")
/// ```
pub fn normalize_date(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            match parse_timestamp(s) {
                Some(dt) => Some(dt.format("%Y-%m-%d").to_string()),
                None => Some(s.to_string()),
            }
        }
        Value::Number(n) => {
            let year = n.as_i64().filter(|y| (1000..=9999).contains(y))?;
            Some(format!("{:04}-01-01", year))
        }
        _ => None,
    }
}

/// Parse a date-time string that includes a time of day
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    None
}

/// Loosely parse a normalized date into a UTC instant
pub fn parse_loose(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    if let Some(dt) = parse_timestamp(s) {
        return Some(dt);
    }

    // Month or year precision: "2024-03", "2024"
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        let d = NaiveDate::parse_from_str(&format!("{}-01-01", s), "%Y-%m-%d").ok()?;
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Ordering key for listings: seconds since the epoch, with missing or
/// unparseable dates pinned to the epoch itself.
pub fn date_sort_key(date: Option<&str>) -> i64 {
    date.and_then(parse_loose)
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}
