use crate::error::CoreError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekdays on which a form accepts bookings, indexed Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct OpenDays([bool; 7]);

impl OpenDays {
    pub fn none() -> Self {
        Self([false; 7])
    }

    pub fn all() -> Self {
        Self([true; 7])
    }

    pub fn weekdays() -> Self {
        Self([true, true, true, true, true, false, false])
    }

    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut open = Self::none();
        for day in days {
            open.set(day, true);
        }
        open
    }

    pub fn parse_list<'a, I>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut open = Self::none();
        for name in names {
            open.set(parse_weekday(name)?, true);
        }
        Ok(open)
    }

    pub fn is_open(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }

    pub fn set(&mut self, day: Weekday, open: bool) {
        self.0[day.num_days_from_monday() as usize] = open;
    }

    pub fn any_open(&self) -> bool {
        self.0.iter().any(|open| *open)
    }

    pub fn iter_open(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.iter().copied().filter(|day| self.is_open(*day))
    }
}

impl From<OpenDays> for Vec<String> {
    fn from(days: OpenDays) -> Self {
        days.iter_open()
            .map(|day| weekday_label(day).to_string())
            .collect()
    }
}

impl TryFrom<Vec<String>> for OpenDays {
    type Error = CoreError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        OpenDays::parse_list(names.iter().map(String::as_str))
    }
}

pub fn parse_weekday(raw: &str) -> Result<Weekday, CoreError> {
    let trimmed = raw.trim();
    Weekday::from_str(trimmed).map_err(|_| CoreError::InvalidWeekday(raw.to_string()))
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_weekday, OpenDays};
    use chrono::Weekday;

    #[test]
    fn parse_weekday_accepts_short_and_long_names() {
        assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday(" Friday ").unwrap(), Weekday::Fri);
        assert!(parse_weekday("funday").is_err());
    }

    #[test]
    fn none_has_no_open_day() {
        assert!(!OpenDays::none().any_open());
        assert!(OpenDays::from_days([Weekday::Sun]).any_open());
    }

    #[test]
    fn iter_open_runs_monday_first() {
        let days = OpenDays::parse_list(["sun", "wed", "mon"]).unwrap();
        let open: Vec<Weekday> = days.iter_open().collect();
        assert_eq!(open, vec![Weekday::Mon, Weekday::Wed, Weekday::Sun]);
    }

    #[test]
    fn serializes_as_day_names() {
        let days = OpenDays::from_days([Weekday::Tue, Weekday::Sat]);
        let json = serde_json::to_string(&days).unwrap();
        assert_eq!(json, r#"["tuesday","saturday"]"#);
        let back: OpenDays = serde_json::from_str(&json).unwrap();
        assert_eq!(back, days);
    }
}
