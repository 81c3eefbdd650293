//! Date utility functions
//!
//! Helpers for the fixed `YYYY-MM-DD` display format and for the date-picker's
//! field-by-field adjustments.

use chrono::{Datelike, Local, NaiveDate};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format a NaiveDate with a configured strftime format.
///
/// The format string is validated at config load time.
pub fn format_with(d: NaiveDate, format: &str) -> String {
    d.format(format).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };

    // First of next month minus first of this month
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1);
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 31,
    }
}

/// Build a date from components, clamping the day to the month's length.
///
/// Moving the picker from Jan 31 to February yields Feb 28/29 rather than an
/// invalid date.
pub fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month)).max(1);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(today)
}

/// Step one field of a date up or down, clamping the day as needed.
pub fn step_year(date: NaiveDate, delta: i32) -> NaiveDate {
    clamped_ymd(date.year() + delta, date.month(), date.day())
}

pub fn step_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + delta;
    let year = total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as u32;
    clamped_ymd(year, month, date.day())
}

pub fn step_day(date: NaiveDate, delta: i64) -> NaiveDate {
    date + chrono::Duration::days(delta)
}
