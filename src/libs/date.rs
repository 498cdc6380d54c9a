//! Calendar-date codec for spreadsheet cells.
//!
//! Task dates reach the dashboard in several encodings:
//!
//! - `Date(2024,0,15)`: the visualization endpoint's native wrapper. The month
//!   is zero-indexed and optional time components may follow the day.
//! - `15/01/2024` or `5/1/2024`: day-first text as typed into the sheet.
//! - Generic strings such as `2024-01-15`, `2024-01-15T09:30:00Z` or
//!   `Mon, 15 Jan 2024 09:30:00 +0000`.
//! - Serial day numbers counted from 1899-12-30, as spreadsheets store them.
//!
//! Every encoding resolves to a [`NaiveDate`]. Time of day is discarded, so
//! comparisons between dates are exact at day granularity. `DD/MM/YYYY` is
//! the textual form used for display and storage.

use super::cell::CellValue;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Display and storage format for calendar dates.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Short month names in calendar order, used for the monthly series.
pub const MONTH_NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

const DATE_FORMATS: [&str; 7] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d.%m.%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

const DATE_TIME_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Epoch of spreadsheet serial day numbers.
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Largest serial number a spreadsheet accepts (31/12/9999).
const MAX_SERIAL: f64 = 2_958_465.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("date value is empty")]
    Empty,
    #[error("unrecognized date value '{0}'")]
    Unrecognized(String),
    #[error("date '{0}' does not exist in the calendar")]
    OutOfRange(String),
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses `D/M/YYYY` or `DD/MM/YYYY` text.
///
/// Day and month take one or two digits, the year exactly four.
pub fn parse_display_date(value: &str) -> Result<NaiveDate, DateError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateError::Empty);
    }

    let parts: Vec<&str> = value.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(DateError::Unrecognized(value.to_string()));
    };

    let is_digits = |part: &str, min: usize, max: usize| (min..=max).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit());
    if !is_digits(day, 1, 2) || !is_digits(month, 1, 2) || !is_digits(year, 4, 4) {
        return Err(DateError::Unrecognized(value.to_string()));
    }

    let (day, month, year) = (number(day, value)?, number(month, value)?, number(year, value)?);
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| DateError::OutOfRange(value.to_string()))
}

/// Parses any of the textual encodings a date cell may carry.
pub fn parse_sheet_date(value: &str) -> Result<NaiveDate, DateError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateError::Empty);
    }

    if let Some(inner) = value.strip_prefix("Date(").and_then(|rest| rest.strip_suffix(')')) {
        return parse_native(inner, value);
    }

    if value.contains('/') && value.split('/').count() == 3 && value.len() <= 10 {
        if let Ok(date) = parse_display_date(value) {
            return Ok(date);
        }
    }

    parse_generic(value)
}

/// Resolves a cell to a calendar date.
pub fn parse_cell_date(cell: &CellValue) -> Result<NaiveDate, DateError> {
    match cell {
        CellValue::Text(text) => parse_sheet_date(text),
        CellValue::Number(serial) => from_serial(*serial),
        CellValue::Bool(value) => Err(DateError::Unrecognized(value.to_string())),
    }
}

/// Re-encodes any supported date text as `DD/MM/YYYY`.
pub fn normalize_date_text(value: &str) -> Result<String, DateError> {
    parse_sheet_date(value).map(format_date)
}

/// The day after `today`.
pub fn tomorrow(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Zero-based month index of `date` (January is 0).
pub fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}

fn parse_native(inner: &str, original: &str) -> Result<NaiveDate, DateError> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(DateError::Unrecognized(original.to_string()));
    }

    let year = parts[0].parse::<i32>().map_err(|_| DateError::Unrecognized(original.to_string()))?;
    let month = number(parts[1], original)?;
    let day = number(parts[2], original)?;

    let month = month.checked_add(1).ok_or_else(|| DateError::OutOfRange(original.to_string()))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::OutOfRange(original.to_string()))
}

fn parse_generic(value: &str) -> Result<NaiveDate, DateError> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.date_naive());
    }
    if let Ok(date_time) = DateTime::parse_from_rfc2822(value) {
        return Ok(date_time.date_naive());
    }
    if let Some(date_time) = DATE_TIME_FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(value, format).ok()) {
        return Ok(date_time.date());
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| DateError::Unrecognized(value.to_string()))
}

fn from_serial(serial: f64) -> Result<NaiveDate, DateError> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_SERIAL {
        return Err(DateError::OutOfRange(serial.to_string()));
    }
    let (year, month, day) = SERIAL_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|epoch| epoch.checked_add_signed(Duration::days(serial.trunc() as i64)))
        .ok_or_else(|| DateError::OutOfRange(serial.to_string()))
}

fn number(part: &str, original: &str) -> Result<u32, DateError> {
    part.parse::<u32>().map_err(|_| DateError::Unrecognized(original.to_string()))
}
