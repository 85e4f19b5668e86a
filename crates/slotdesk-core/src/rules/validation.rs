//! Structural checks run on an appointment form before it is stored.
//!
//! Every rule is evaluated on each call and the failing ones are reported
//! together, in a fixed order, so an editor can show all problems at once.

use crate::domain::AppointmentFormConfig;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    TimeStartAfterTimeEnd,
    DurationExceedsWindow,
    DurationNotMultipleOfWindow,
    ValidityStartAfterValidityEnd,
    PeopleExceedCapacity,
    NoWorkingDayOpen,
}

impl ViolationCode {
    pub const ALL: [ViolationCode; 6] = [
        ViolationCode::TimeStartAfterTimeEnd,
        ViolationCode::DurationExceedsWindow,
        ViolationCode::DurationNotMultipleOfWindow,
        ViolationCode::ValidityStartAfterValidityEnd,
        ViolationCode::PeopleExceedCapacity,
        ViolationCode::NoWorkingDayOpen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCode::TimeStartAfterTimeEnd => "time_start_after_time_end",
            ViolationCode::DurationExceedsWindow => "duration_exceeds_window",
            ViolationCode::DurationNotMultipleOfWindow => "duration_not_multiple_of_window",
            ViolationCode::ValidityStartAfterValidityEnd => "validity_start_after_validity_end",
            ViolationCode::PeopleExceedCapacity => "people_exceed_capacity",
            ViolationCode::NoWorkingDayOpen => "no_working_day_open",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationCode {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        ViolationCode::ALL
            .into_iter()
            .find(|code| code.as_str() == value)
            .ok_or_else(|| CoreError::UnknownViolationCode(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "violations", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    /// Never empty.
    Invalid(Vec<ViolationCode>),
}

impl ValidationResult {
    fn from_violations(violations: Vec<ViolationCode>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violations(&self) -> &[ViolationCode] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }

    pub fn contains(&self, code: ViolationCode) -> bool {
        self.violations().contains(&code)
    }

    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violations) => Err(CoreError::InvalidForm(violations)),
        }
    }
}

/// Stateless; a unit value so callers can hold it next to other collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormConstraintValidator;

impl FormConstraintValidator {
    pub fn validate(&self, config: &AppointmentFormConfig) -> ValidationResult {
        let mut violations = Vec::new();

        if config.time_start > config.time_end {
            violations.push(ViolationCode::TimeStartAfterTimeEnd);
        }

        // Compared in seconds so a sub-minute tail still breaks divisibility.
        let span = config.window_seconds();
        let duration = i64::from(config.duration_minutes) * 60;
        if duration == 0 || duration > span {
            violations.push(ViolationCode::DurationExceedsWindow);
        } else if span % duration != 0 {
            violations.push(ViolationCode::DurationNotMultipleOfWindow);
        }

        if let (Some(start), Some(end)) = (config.validity_start, config.validity_end) {
            if start > end {
                violations.push(ViolationCode::ValidityStartAfterValidityEnd);
            }
        }

        if config.max_people_per_appointment > config.max_capacity_per_slot {
            violations.push(ViolationCode::PeopleExceedCapacity);
        }

        if !config.open_days.any_open() {
            violations.push(ViolationCode::NoWorkingDayOpen);
        }

        ValidationResult::from_violations(violations)
    }
}

pub fn validate(config: &AppointmentFormConfig) -> ValidationResult {
    FormConstraintValidator.validate(config)
}
