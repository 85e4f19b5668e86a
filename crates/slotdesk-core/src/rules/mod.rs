pub mod slots;
pub mod validation;

pub use slots::{slots_between, slots_for_date, validate_plan_days, Slot, MAX_PLAN_DAYS};
pub use validation::{validate, FormConstraintValidator, ValidationResult, ViolationCode};
