//! Cron expression building, explanation and schedule preview
//!
//! Works on standard 5-field crontab expressions (minute, hour, day of
//! month, month, day of week; day-of-week 0 or 7 is Sunday). Upcoming
//! trigger times come from the `cron` crate, which wants a seconds field
//! and name-based weekdays, so expressions are normalized before parsing.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use cron::Schedule;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Ready-made expressions offered by the CLI
pub const PRESETS: [(&str, &str); 11] = [
    ("Every Minute", "* * * * *"),
    ("Every 5 Minutes", "*/5 * * * *"),
    ("Every 15 Minutes", "*/15 * * * *"),
    ("Every Hour", "0 * * * *"),
    ("Every 4 Hours", "0 */4 * * *"),
    ("Every Day at Midnight", "0 0 * * *"),
    ("Every Weekday (Mon-Fri)", "0 0 * * 1-5"),
    ("Every Weekend (Sat-Sun)", "0 0 * * 6,0"),
    ("Every Wednesday", "0 0 * * 3"),
    ("First of Every Month", "0 0 1 * *"),
    ("Yearly (Jan 1st)", "0 0 1 1 *"),
];

/// A parsed 5-field expression with its explanation and next trigger times
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CronReport {
    pub expression: String,
    pub description: String,
    pub upcoming: Vec<DateTime<Utc>>,
}

/// Join per-field values into an expression
pub fn build(minute: &str, hour: &str, dom: &str, month: &str, dow: &str) -> String {
    format!("{} {} {} {} {}", minute, hour, dom, month, dow)
}

/// Explain an expression and list its next `count` trigger times
pub fn report(expression: &str, count: usize) -> Result<CronReport> {
    let description = describe(expression)?;
    let upcoming = upcoming(expression, count)?;
    Ok(CronReport {
        expression: expression.trim().to_string(),
        description,
        upcoming,
    })
}

/// Produce an English description of a 5-field expression
///
/// # Examples
/// ```
/// use forge_gen::cron::describe;
///
/// assert_eq!(describe("* * * * *").unwrap(), "Every minute.");
/// assert_eq!(
///     describe("0 0 * * 1-5").unwrap(),
///     "At midnight, on Mon-Fri."
/// );
/// ```
pub fn describe(expression: &str) -> Result<String> {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    let [minute, hour, dom, month, dow] = parts.as_slice() else {
        return Err(GenError::invalid_cron(
            "expected 5 fields: minute hour day month weekday",
        ));
    };

    let time_desc = if *minute == "*" && *hour == "*" {
        "Every minute".to_string()
    } else if minute.contains('/') && *hour == "*" {
        let step = minute.split('/').nth(1).unwrap_or("?");
        format!("Every {} minutes", step)
    } else if *minute == "0" && *hour == "*" {
        "At the start of every hour".to_string()
    } else if *minute == "0" && *hour == "0" {
        "At midnight".to_string()
    } else if hour.contains('/') {
        let step = hour.split('/').nth(1).unwrap_or("?");
        format!("At minute {}, every {} hours", minute, step)
    } else {
        let h = if *hour == "*" { "every hour" } else { *hour };
        let m = if *minute == "*" {
            "every minute".to_string()
        } else if minute.len() == 1 {
            format!("0{}", minute)
        } else {
            (*minute).to_string()
        };
        format!("At {}:{}", h, m)
    };

    let mut date_desc: Vec<String> = Vec::new();
    if *dom != "*" && *dom != "?" {
        date_desc.push(format!("on day {} of the month", dom));
    }
    if *month != "*" {
        let name = month
            .parse::<usize>()
            .ok()
            .and_then(|n| MONTHS.get(n.wrapping_sub(1)))
            .map_or_else(|| (*month).to_string(), |s| (*s).to_string());
        date_desc.push(format!("in {}", name));
    }
    if *dow != "*" && *dow != "?" {
        let name = match *dow {
            "1-5" => "Mon-Fri".to_string(),
            "0,6" | "6,0" => "Sat-Sun".to_string(),
            other => other
                .parse::<usize>()
                .ok()
                .and_then(|n| DAYS.get(n % 7))
                .map_or_else(|| other.to_string(), |s| (*s).to_string()),
        };
        date_desc.push(format!("on {}", name));
    }

    if date_desc.is_empty() {
        Ok(format!("{}.", time_desc))
    } else {
        Ok(format!("{}, {}.", time_desc, date_desc.join(", ")))
    }
}

/// List the next `count` trigger times of an expression
pub fn upcoming(expression: &str, count: usize) -> Result<Vec<DateTime<Utc>>> {
    let schedule = parse_schedule(expression)?;
    Ok(schedule.after(&Utc::now()).take(count).collect())
}

/// Validate a 5-field expression without running it
pub fn validate(expression: &str) -> Result<()> {
    parse_schedule(expression).map(|_| ())
}

fn parse_schedule(expression: &str) -> Result<Schedule> {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    if parts.len() != 5 {
        return Err(GenError::invalid_cron(
            "expected 5 fields: minute hour day month weekday",
        ));
    }
    // The cron crate wants a leading seconds field and is ambiguous about
    // numeric weekdays, so pin day-of-week to names before parsing.
    let normalized = format!(
        "0 {} {} {} {} {}",
        parts[0],
        parts[1],
        parts[2],
        parts[3],
        normalize_dow(parts[4])
    );
    Schedule::from_str(&normalized).map_err(|e| GenError::invalid_cron(e.to_string()))
}

/// Replace numeric day-of-week tokens (0-7, 0 and 7 both Sunday) with names
fn normalize_dow(field: &str) -> String {
    field
        .split(',')
        .map(|part| {
            let (range, step) = match part.split_once('/') {
                Some((r, s)) => (r, Some(s)),
                None => (part, None),
            };
            let mapped = match range.split_once('-') {
                Some((a, b)) => format!("{}-{}", map_dow_token(a), map_dow_token(b)),
                None => map_dow_token(range),
            };
            match step {
                Some(s) => format!("{}/{}", mapped, s),
                None => mapped,
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn map_dow_token(token: &str) -> String {
    match token.parse::<usize>() {
        Ok(n) if n <= 7 => DAYS[n % 7].to_string(),
        _ => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_build() {
        assert_eq!(build("0", "12", "*", "*", "1"), "0 12 * * 1");
    }

    #[test]
    fn test_describe_time_patterns() {
        assert_eq!(describe("* * * * *").unwrap(), "Every minute.");
        assert_eq!(describe("*/5 * * * *").unwrap(), "Every 5 minutes.");
        assert_eq!(
            describe("0 * * * *").unwrap(),
            "At the start of every hour."
        );
        assert_eq!(describe("0 0 * * *").unwrap(), "At midnight.");
        assert_eq!(
            describe("15 */4 * * *").unwrap(),
            "At minute 15, every 4 hours."
        );
        assert_eq!(describe("30 9 * * *").unwrap(), "At 9:30.");
        assert_eq!(describe("5 9 * * *").unwrap(), "At 9:05.");
    }

    #[test]
    fn test_describe_date_clauses() {
        assert_eq!(
            describe("0 0 1 * *").unwrap(),
            "At midnight, on day 1 of the month."
        );
        assert_eq!(
            describe("0 0 1 1 *").unwrap(),
            "At midnight, on day 1 of the month, in Jan."
        );
        assert_eq!(describe("0 0 * * 3").unwrap(), "At midnight, on Wed.");
        assert_eq!(describe("0 0 * * 6,0").unwrap(), "At midnight, on Sat-Sun.");
    }

    #[test]
    fn test_describe_rejects_wrong_field_count() {
        assert!(describe("* * *").is_err());
        assert!(describe("").is_err());
    }

    #[test]
    fn test_validate_and_upcoming() {
        assert!(validate("* * * * *").is_ok());
        assert!(validate("0 0 * * 1-5").is_ok());
        assert!(validate("99 * * * *").is_err());
        assert!(validate("not a cron").is_err());

        let times = upcoming("* * * * *", 3).unwrap();
        assert_eq!(times.len(), 3);
        let now = Utc::now();
        assert!(times.iter().all(|t| *t > now - chrono::Duration::minutes(1)));
    }

    #[test]
    fn test_upcoming_yearly() {
        let times = upcoming("0 0 1 1 *", 2).unwrap();
        for t in times {
            assert_eq!(t.month(), 1);
            assert_eq!(t.day(), 1);
            assert_eq!(t.hour(), 0);
            assert_eq!(t.minute(), 0);
        }
    }

    #[test]
    fn test_numeric_weekday_normalization() {
        assert_eq!(normalize_dow("0"), "Sun");
        assert_eq!(normalize_dow("7"), "Sun");
        assert_eq!(normalize_dow("1-5"), "Mon-Fri");
        assert_eq!(normalize_dow("6,0"), "Sat,Sun");
        assert_eq!(normalize_dow("*"), "*");
        assert_eq!(normalize_dow("*/2"), "*/2");
        assert_eq!(normalize_dow("Mon"), "Mon");
    }

    #[test]
    fn test_report_bundles_everything() {
        let report = report("0 0 * * 1-5", 2).unwrap();
        assert_eq!(report.description, "At midnight, on Mon-Fri.");
        assert_eq!(report.upcoming.len(), 2);
        for t in &report.upcoming {
            let weekday = t.weekday().number_from_monday();
            assert!((1..=5).contains(&weekday));
        }
    }
}
