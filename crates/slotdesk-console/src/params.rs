//! Turns submitted form parameters into a form configuration.

use chrono::Weekday;
use slotdesk_core::time::{parse_optional_date, parse_time_of_day, TimeParseError};
use slotdesk_core::{AppointmentFormConfig, CoreError, FormTitle, OpenDays};
use std::collections::HashMap;
use thiserror::Error;

pub const PARAM_TITLE: &str = "title";
pub const PARAM_TIME_START: &str = "time_start";
pub const PARAM_TIME_END: &str = "time_end";
pub const PARAM_DURATION: &str = "duration_minutes";
pub const PARAM_VALIDITY_START: &str = "validity_start";
pub const PARAM_VALIDITY_END: &str = "validity_end";
pub const PARAM_CAPACITY: &str = "max_capacity_per_slot";
pub const PARAM_PEOPLE: &str = "max_people_per_appointment";

const OPEN_DAY_PARAMS: [(&str, Weekday); 7] = [
    ("open_monday", Weekday::Mon),
    ("open_tuesday", Weekday::Tue),
    ("open_wednesday", Weekday::Wed),
    ("open_thursday", Weekday::Thu),
    ("open_friday", Weekday::Fri),
    ("open_saturday", Weekday::Sat),
    ("open_sunday", Weekday::Sun),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormParamError {
    #[error("missing parameter: {0}")]
    Missing(&'static str),
    #[error("invalid title: {0}")]
    Title(#[source] CoreError),
    #[error("invalid time for {field}: {source}")]
    Time {
        field: &'static str,
        #[source]
        source: TimeParseError,
    },
    #[error("invalid date for {field}: {source}")]
    Date {
        field: &'static str,
        #[source]
        source: TimeParseError,
    },
    #[error("invalid number for {field}: {value}")]
    Number { field: &'static str, value: String },
}

impl FormParamError {
    pub fn field(&self) -> &'static str {
        match self {
            FormParamError::Missing(field) => field,
            FormParamError::Title(_) => PARAM_TITLE,
            FormParamError::Time { field, .. }
            | FormParamError::Date { field, .. }
            | FormParamError::Number { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub title: FormTitle,
    pub config: AppointmentFormConfig,
}

pub fn parse_form_params(
    params: &HashMap<String, String>,
) -> Result<FormSubmission, FormParamError> {
    let raw_title = params
        .get(PARAM_TITLE)
        .ok_or(FormParamError::Missing(PARAM_TITLE))?;
    let title = FormTitle::new(raw_title).map_err(FormParamError::Title)?;

    let time_start = parse_time(params, PARAM_TIME_START)?;
    let time_end = parse_time(params, PARAM_TIME_END)?;
    let duration_minutes = parse_count(params, PARAM_DURATION)?;
    let validity_start = parse_date(params, PARAM_VALIDITY_START)?;
    let validity_end = parse_date(params, PARAM_VALIDITY_END)?;
    let max_capacity_per_slot = parse_count(params, PARAM_CAPACITY)?;
    let max_people_per_appointment = parse_count(params, PARAM_PEOPLE)?;

    let mut open_days = OpenDays::none();
    for (key, day) in OPEN_DAY_PARAMS {
        open_days.set(day, is_checked(params.get(key).map(String::as_str)));
    }

    Ok(FormSubmission {
        title,
        config: AppointmentFormConfig {
            time_start,
            time_end,
            duration_minutes,
            validity_start,
            validity_end,
            max_capacity_per_slot,
            max_people_per_appointment,
            open_days,
        },
    })
}

fn required<'a>(
    params: &'a HashMap<String, String>,
    field: &'static str,
) -> Result<&'a str, FormParamError> {
    match params.get(field).map(|value| value.trim()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FormParamError::Missing(field)),
    }
}

fn parse_time(
    params: &HashMap<String, String>,
    field: &'static str,
) -> Result<chrono::NaiveTime, FormParamError> {
    let raw = required(params, field)?;
    parse_time_of_day(raw).map_err(|source| FormParamError::Time { field, source })
}

fn parse_date(
    params: &HashMap<String, String>,
    field: &'static str,
) -> Result<Option<chrono::NaiveDate>, FormParamError> {
    parse_optional_date(params.get(field).map(String::as_str))
        .map_err(|source| FormParamError::Date { field, source })
}

fn parse_count(params: &HashMap<String, String>, field: &'static str) -> Result<u32, FormParamError> {
    let raw = required(params, field)?;
    raw.parse::<u32>().map_err(|_| FormParamError::Number {
        field,
        value: raw.to_string(),
    })
}

fn is_checked(value: Option<&str>) -> bool {
    match value.map(|raw| raw.trim().to_ascii_lowercase()) {
        Some(raw) => matches!(raw.as_str(), "on" | "true" | "1" | "yes"),
        None => false,
    }
}
