use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("value cannot be empty")]
    Empty,
    #[error("invalid time format: expected HH:MM")]
    InvalidTimeFormat,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
}

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| TimeParseError::InvalidTimeFormat)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| TimeParseError::InvalidDateFormat)
}

/// Blank input means "no date".
pub fn parse_optional_date(input: Option<&str>) -> Result<Option<NaiveDate>, TimeParseError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::{
        format_date, format_datetime, format_time_of_day, parse_date, parse_optional_date,
        parse_time_of_day, TimeParseError,
    };
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn parse_time_of_day_accepts_hours_and_minutes() {
        assert_eq!(
            parse_time_of_day(" 09:30 ").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_time_of_day_rejects_seconds() {
        assert_eq!(
            parse_time_of_day("09:45:59").unwrap_err(),
            TimeParseError::InvalidTimeFormat
        );
        assert_eq!(
            parse_time_of_day("17:05:00").unwrap_err(),
            TimeParseError::InvalidTimeFormat
        );
    }

    #[test]
    fn parse_time_of_day_rejects_bad_input() {
        assert_eq!(parse_time_of_day("").unwrap_err(), TimeParseError::Empty);
        assert_eq!(
            parse_time_of_day("25:00").unwrap_err(),
            TimeParseError::InvalidTimeFormat
        );
        assert_eq!(
            parse_time_of_day("9h30").unwrap_err(),
            TimeParseError::InvalidTimeFormat
        );
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert_eq!(
            parse_date("2025-02-30").unwrap_err(),
            TimeParseError::InvalidDateFormat
        );
    }

    #[test]
    fn parse_optional_date_treats_blank_as_absent() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert!(parse_optional_date(Some("2025-01-01")).unwrap().is_some());
    }

    #[test]
    fn format_helpers_use_minute_resolution() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();
        let time = NaiveTime::from_hms_opt(13, 45, 0).unwrap();
        assert_eq!(format_time_of_day(time), "13:45");
        assert_eq!(format_date(date), "2030-01-15");
        assert_eq!(format_datetime(date.and_time(time)), "2030-01-15 13:45");
    }
}
