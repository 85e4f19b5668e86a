use crate::domain::AppointmentFormConfig;
use crate::error::CoreError;
use crate::rules::validation::validate;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const MAX_PLAN_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub capacity: u32,
}

pub fn validate_plan_days(days: i64) -> Result<i64, CoreError> {
    if days <= 0 || days > MAX_PLAN_DAYS {
        return Err(CoreError::InvalidPlanDays(days));
    }
    Ok(days)
}

pub fn slots_for_date(
    config: &AppointmentFormConfig,
    date: NaiveDate,
) -> Result<Vec<Slot>, CoreError> {
    validate(config).into_result()?;
    Ok(plan_day(config, date))
}

pub fn slots_between(
    config: &AppointmentFormConfig,
    from: NaiveDate,
    days: i64,
) -> Result<Vec<Slot>, CoreError> {
    let days = validate_plan_days(days)?;
    validate(config).into_result()?;

    let mut slots = Vec::new();
    for date in from.iter_days().take(days as usize) {
        slots.extend(plan_day(config, date));
    }
    Ok(slots)
}

// Assumes `config` has already been validated.
fn plan_day(config: &AppointmentFormConfig, date: NaiveDate) -> Vec<Slot> {
    if !config.is_valid_on(date) || !config.open_days.is_open(date.weekday()) {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(config.duration_minutes));
    let count = config.window_seconds() / step.num_seconds();
    let first = date.and_time(config.time_start);

    (0..count)
        .map(|index| {
            let starts_at = first + step * index as i32;
            Slot {
                starts_at,
                ends_at: starts_at + step,
                capacity: config.max_capacity_per_slot,
            }
        })
        .collect()
}
