use crate::rules::validation::ViolationCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("form title is required")]
    EmptyTitle,
    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),
    #[error("unknown violation code: {0}")]
    UnknownViolationCode(String),
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("message template for {0} cannot be empty")]
    EmptyMessageTemplate(ViolationCode),
    #[error("invalid plan length in days: {0}")]
    InvalidPlanDays(i64),
    #[error("form configuration is invalid: {}", join_codes(.0))]
    InvalidForm(Vec<ViolationCode>),
}

fn join_codes(codes: &[ViolationCode]) -> String {
    codes
        .iter()
        .map(|code| code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
