use crate::domain::ids::FormId;
use crate::domain::open_days::OpenDays;
use crate::error::CoreError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Structural settings of an appointment form, as submitted for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentFormConfig {
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    pub duration_minutes: u32,
    pub validity_start: Option<NaiveDate>,
    pub validity_end: Option<NaiveDate>,
    pub max_capacity_per_slot: u32,
    pub max_people_per_appointment: u32,
    pub open_days: OpenDays,
}

impl AppointmentFormConfig {
    /// Signed number of seconds from `time_start` to `time_end`.
    pub fn window_seconds(&self) -> i64 {
        (self.time_end - self.time_start).num_seconds()
    }

    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.validity_start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.validity_end {
            if date > end {
                return false;
            }
        }
        true
    }
}

impl Default for AppointmentFormConfig {
    fn default() -> Self {
        Self {
            time_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            time_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            duration_minutes: 30,
            validity_start: None,
            validity_end: None,
            max_capacity_per_slot: 1,
            max_people_per_appointment: 1,
            open_days: OpenDays::weekdays(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormTitle(String);

impl FormTitle {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        Ok(Self(normalize_title(raw)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title given to a duplicated form.
    pub fn copy_title(&self) -> Self {
        Self(format!("Copy of {}", self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentForm {
    pub id: FormId,
    pub title: FormTitle,
    pub config: AppointmentFormConfig,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Trims the title and collapses inner whitespace runs to one space.
pub fn normalize_title(raw: &str) -> Result<String, CoreError> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Err(CoreError::EmptyTitle);
    }
    Ok(collapsed)
}

#[cfg(test)]
mod tests {
    use super::{normalize_title, AppointmentFormConfig, FormTitle};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn normalize_title_collapses_whitespace() {
        assert_eq!(
            normalize_title("  Passport   renewal ").unwrap(),
            "Passport renewal"
        );
        assert!(normalize_title(" \t ").is_err());
    }

    #[test]
    fn copy_title_prefixes_original() {
        let title = FormTitle::new("Passports").unwrap();
        assert_eq!(title.copy_title().as_str(), "Copy of Passports");
    }

    #[test]
    fn window_seconds_is_signed() {
        let config = AppointmentFormConfig {
            time_start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            time_end: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            ..Default::default()
        };
        assert_eq!(config.window_seconds(), -150 * 60);
    }

    #[test]
    fn is_valid_on_respects_open_ended_bounds() {
        let config = AppointmentFormConfig {
            validity_start: None,
            validity_end: NaiveDate::from_ymd_opt(2025, 1, 31),
            ..Default::default()
        };
        assert!(config.is_valid_on(NaiveDate::from_ymd_opt(1999, 6, 1).unwrap()));
        assert!(config.is_valid_on(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(!config.is_valid_on(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
    }
}
