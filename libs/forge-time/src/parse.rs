//! Timestamp parsing and format tables
//!
//! Input is either a bare unix timestamp (ten digits or fewer means
//! seconds, more means milliseconds) or a textual datetime. Naive
//! datetimes are taken as UTC. The format table mirrors what the tool
//! displays: one labelled rendering per row.

use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc,
};
use serde::Serialize;

use crate::error::{Result, TimeError};

/// One labelled rendering of an instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatEntry {
    pub label: &'static str,
    pub value: String,
}

/// Textual datetime layouts tried in order after RFC 3339 / RFC 2822
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

/// Parse a timestamp or datetime string into a UTC instant
///
/// # Examples
/// ```
/// use forge_time::parse_instant;
///
/// let a = parse_instant("2024-03-01T12:00:00Z").unwrap();
/// let b = parse_instant("1709294400").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_instant("not a date").is_err());
/// ```
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeError::parse("empty input"));
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let number: i64 = trimmed
            .parse()
            .map_err(|_| TimeError::parse(format!("timestamp '{}' out of range", trimmed)))?;
        let parsed = if trimmed.len() <= 10 {
            Utc.timestamp_opt(number, 0).single()
        } else {
            Utc.timestamp_millis_opt(number).single()
        };
        return parsed
            .ok_or_else(|| TimeError::out_of_range(format!("timestamp '{}'", trimmed)));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Utc.from_utc_datetime(&dt));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()));
        }
    }

    Err(TimeError::parse(format!(
        "'{}' is not a recognized timestamp or datetime",
        trimmed
    )))
}

/// Render the format table for an instant
///
/// `reference` anchors the relative-time row (pass `Utc::now()` outside
/// tests).
pub fn format_table(instant: DateTime<Utc>, reference: DateTime<Utc>) -> Vec<FormatEntry> {
    let quarter = (instant.month0() / 3) + 1;
    vec![
        entry(
            "ISO 8601 (UTC)",
            instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        entry(
            "Local Time",
            instant
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        ),
        entry("Unix Timestamp (seconds)", instant.timestamp().to_string()),
        entry("Unix Timestamp (ms)", instant.timestamp_millis().to_string()),
        entry("Relative Time", relative(instant, reference)),
        entry("RFC 2822", instant.to_rfc2822()),
        entry("YYYY/MM/DD", instant.format("%Y/%m/%d").to_string()),
        entry("MM/DD/YYYY", instant.format("%m/%d/%Y").to_string()),
        entry("DD/MM/YYYY", instant.format("%d/%m/%Y").to_string()),
        entry("Date Only", instant.format("%Y-%m-%d").to_string()),
        entry("Time Only", instant.format("%H:%M:%S").to_string()),
        entry("Day of Week", instant.format("%A").to_string()),
        entry("ISO Week of Year", instant.iso_week().week().to_string()),
        entry("Day of Year", instant.ordinal().to_string()),
        entry("Quarter", format!("Q{}", quarter)),
    ]
}

fn entry(label: &'static str, value: String) -> FormatEntry {
    FormatEntry { label, value }
}

/// Humanize the distance between an instant and a reference point
pub fn relative(instant: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let delta = reference.signed_duration_since(instant);
    let past = delta.num_seconds() >= 0;
    let seconds = delta.num_seconds().abs();

    let phrase = if seconds < 45 {
        "a few seconds".to_string()
    } else if seconds < 90 {
        "a minute".to_string()
    } else if seconds < 45 * 60 {
        format!("{} minutes", (seconds + 30) / 60)
    } else if seconds < 90 * 60 {
        "an hour".to_string()
    } else if seconds < 22 * 3600 {
        format!("{} hours", (seconds + 1800) / 3600)
    } else if seconds < 36 * 3600 {
        "a day".to_string()
    } else if seconds < 26 * 86400 {
        format!("{} days", (seconds + 43200) / 86400)
    } else if seconds < 46 * 86400 {
        "a month".to_string()
    } else if seconds < 320 * 86400 {
        format!("{} months", seconds / (30 * 86400))
    } else if seconds < 548 * 86400 {
        "a year".to_string()
    } else {
        format!("{} years", seconds / (365 * 86400))
    };

    if past {
        format!("{} ago", phrase)
    } else {
        format!("in {}", phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<Utc> {
        parse_instant(s).unwrap()
    }

    #[test]
    fn test_parse_unix_seconds_and_millis() {
        let seconds = instant("1709294400");
        let millis = instant("1709294400000");
        assert_eq!(seconds, millis);
        assert_eq!(seconds.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = instant("2024-03-01T14:00:00+02:00");
        assert_eq!(dt.timestamp(), 1709294400);
    }

    #[test]
    fn test_parse_naive_forms() {
        assert_eq!(
            instant("2024-03-01 12:00:00").timestamp(),
            1709294400
        );
        assert_eq!(instant("2024-03-01").format("%H:%M").to_string(), "00:00");
        assert_eq!(instant("2024/03/01").ordinal(), 61);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_instant("not a date").is_err());
        assert!(parse_instant("").is_err());
        assert!(parse_instant("2024-13-40").is_err());
    }

    #[test]
    fn test_format_table_rows() {
        let dt = instant("2024-03-01T12:00:00Z");
        let table = format_table(dt, dt);
        let get = |label: &str| {
            table
                .iter()
                .find(|e| e.label == label)
                .map(|e| e.value.clone())
                .unwrap()
        };

        assert_eq!(get("ISO 8601 (UTC)"), "2024-03-01T12:00:00.000Z");
        assert_eq!(get("Unix Timestamp (seconds)"), "1709294400");
        assert_eq!(get("Unix Timestamp (ms)"), "1709294400000");
        assert_eq!(get("YYYY/MM/DD"), "2024/03/01");
        assert_eq!(get("MM/DD/YYYY"), "03/01/2024");
        assert_eq!(get("DD/MM/YYYY"), "01/03/2024");
        assert_eq!(get("Day of Week"), "Friday");
        assert_eq!(get("Day of Year"), "61");
        assert_eq!(get("ISO Week of Year"), "9");
        assert_eq!(get("Quarter"), "Q1");
        assert_eq!(get("Relative Time"), "a few seconds ago");
    }

    #[test]
    fn test_relative_phrases() {
        let base = instant("2024-03-01T12:00:00Z");
        let shift = |secs: i64| base + chrono::Duration::seconds(secs);

        assert_eq!(relative(shift(-10), base), "a few seconds ago");
        assert_eq!(relative(shift(-60), base), "a minute ago");
        assert_eq!(relative(shift(-600), base), "10 minutes ago");
        assert_eq!(relative(shift(-3600), base), "an hour ago");
        assert_eq!(relative(shift(-7200), base), "2 hours ago");
        assert_eq!(relative(shift(-86400), base), "a day ago");
        assert_eq!(relative(shift(-86400 * 10), base), "10 days ago");
        assert_eq!(relative(shift(-86400 * 40), base), "a month ago");
        assert_eq!(relative(shift(-86400 * 90), base), "3 months ago");
        assert_eq!(relative(shift(-86400 * 400), base), "a year ago");
        assert_eq!(relative(shift(-86400 * 800), base), "2 years ago");
        assert_eq!(relative(shift(600), base), "in 10 minutes");
    }
}
