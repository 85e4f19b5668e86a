pub mod form;
pub mod ids;
pub mod open_days;

pub use form::{normalize_title, AppointmentForm, AppointmentFormConfig, FormTitle};
pub use ids::FormId;
pub use open_days::{parse_weekday, weekday_label, OpenDays};
