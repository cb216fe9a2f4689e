//! Calendar position of a date
//!
//! Answers the "what week is it" family of questions: ISO week number and
//! its Monday-Sunday span, day-of-year progress and how many ISO weeks the
//! year has.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeError};

/// Calendar breakdown of one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarReport {
    pub date: NaiveDate,
    pub year: i32,
    pub iso_week: u32,
    /// Monday of the ISO week
    pub week_start: NaiveDate,
    /// Sunday of the ISO week
    pub week_end: NaiveDate,
    /// The seven dates of the ISO week, Monday first
    pub week_dates: Vec<NaiveDate>,
    pub day_of_year: u32,
    pub days_in_year: u32,
    pub days_remaining: u32,
    pub iso_weeks_in_year: u32,
}

/// Compute the calendar report for a date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use forge_time::calendar::report;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let cal = report(date).unwrap();
/// assert_eq!(cal.iso_week, 9);
/// assert_eq!(cal.day_of_year, 61);
/// assert_eq!(cal.days_in_year, 366);
/// ```
pub fn report(date: NaiveDate) -> Result<CalendarReport> {
    let year = date.year();
    let week_start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let week_end = week_start + Duration::days(6);
    let week_dates = (0..7).map(|i| week_start + Duration::days(i)).collect();

    let days_in_year = if is_leap_year(year) { 366 } else { 365 };
    let day_of_year = date.ordinal();

    // ISO 8601: December 28th always falls in the year's last week
    let dec_28 = NaiveDate::from_ymd_opt(year, 12, 28)
        .ok_or_else(|| TimeError::out_of_range(format!("year {}", year)))?;
    let iso_weeks_in_year = dec_28.iso_week().week();

    Ok(CalendarReport {
        date,
        year,
        iso_week: date.iso_week().week(),
        week_start,
        week_end,
        week_dates,
        day_of_year,
        days_in_year,
        days_remaining: days_in_year - day_of_year,
        iso_weeks_in_year,
    })
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_span_is_monday_to_sunday() {
        // 2024-03-01 is a Friday
        let cal = report(date(2024, 3, 1)).unwrap();
        assert_eq!(cal.week_start, date(2024, 2, 26));
        assert_eq!(cal.week_end, date(2024, 3, 3));
        assert_eq!(cal.week_start.weekday(), Weekday::Mon);
        assert_eq!(cal.week_end.weekday(), Weekday::Sun);
        assert_eq!(cal.week_dates.len(), 7);
        assert_eq!(cal.week_dates[0], cal.week_start);
        assert_eq!(cal.week_dates[6], cal.week_end);
    }

    #[test]
    fn test_leap_year_counts() {
        let cal = report(date(2024, 3, 1)).unwrap();
        assert_eq!(cal.days_in_year, 366);
        assert_eq!(cal.day_of_year, 61);
        assert_eq!(cal.days_remaining, 305);

        let cal = report(date(2023, 3, 1)).unwrap();
        assert_eq!(cal.days_in_year, 365);
        assert_eq!(cal.day_of_year, 60);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_iso_weeks_in_year() {
        // 2020 is a long ISO year (53 weeks), 2024 is not
        assert_eq!(report(date(2020, 6, 1)).unwrap().iso_weeks_in_year, 53);
        assert_eq!(report(date(2024, 6, 1)).unwrap().iso_weeks_in_year, 52);
    }

    #[test]
    fn test_iso_week_at_year_boundary() {
        // 2024-12-30 (Monday) belongs to week 1 of 2025
        let cal = report(date(2024, 12, 30)).unwrap();
        assert_eq!(cal.iso_week, 1);
        // but day-of-year bookkeeping stays in 2024
        assert_eq!(cal.year, 2024);
        assert_eq!(cal.day_of_year, 365);
    }
}
