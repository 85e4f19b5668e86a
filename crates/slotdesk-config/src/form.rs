use std::path::{Path, PathBuf};

use serde::Deserialize;
use slotdesk_core::time::{parse_optional_date, parse_time_of_day};
use slotdesk_core::{AppointmentFormConfig, FormTitle, OpenDays};

use crate::{read_file, ConfigError, Result};

/// A form definition read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFile {
    pub title: FormTitle,
    pub config: AppointmentFormConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawForm {
    title: String,
    time_start: String,
    time_end: String,
    duration_minutes: u32,
    validity_start: Option<String>,
    validity_end: Option<String>,
    max_capacity_per_slot: u32,
    max_people_per_appointment: u32,
    #[serde(default)]
    open_days: Vec<String>,
}

pub fn load_form(path: &Path) -> Result<FormFile> {
    if !path.exists() {
        return Err(ConfigError::MissingFormFile(path.to_path_buf()));
    }
    let contents = read_file(path)?;
    parse_form(path, &contents)
}

fn parse_form(path: &Path, contents: &str) -> Result<FormFile> {
    let raw: RawForm = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |field: &'static str, message: String| ConfigError::InvalidFormField {
        path: PathBuf::from(path),
        field,
        message,
    };

    let title = FormTitle::new(&raw.title).map_err(|err| invalid("title", err.to_string()))?;
    let time_start =
        parse_time_of_day(&raw.time_start).map_err(|err| invalid("time_start", err.to_string()))?;
    let time_end =
        parse_time_of_day(&raw.time_end).map_err(|err| invalid("time_end", err.to_string()))?;
    let validity_start = parse_optional_date(raw.validity_start.as_deref())
        .map_err(|err| invalid("validity_start", err.to_string()))?;
    let validity_end = parse_optional_date(raw.validity_end.as_deref())
        .map_err(|err| invalid("validity_end", err.to_string()))?;
    let open_days = OpenDays::parse_list(raw.open_days.iter().map(String::as_str))
        .map_err(|err| invalid("open_days", err.to_string()))?;

    Ok(FormFile {
        title,
        config: AppointmentFormConfig {
            time_start,
            time_end,
            duration_minutes: raw.duration_minutes,
            validity_start,
            validity_end,
            max_capacity_per_slot: raw.max_capacity_per_slot,
            max_people_per_appointment: raw.max_people_per_appointment,
            open_days,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{load_form, parse_form};
    use crate::ConfigError;
    use chrono::{NaiveDate, Weekday};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PASSPORTS: &str = r#"
title = "Passports"
time_start = "09:00"
time_end = "12:00"
duration_minutes = 45
validity_end = "2025-12-31"
max_capacity_per_slot = 3
max_people_per_appointment = 1
open_days = ["monday", "fri"]
"#;

    #[test]
    fn parse_form_reads_all_fields() {
        let form = parse_form(Path::new("form.toml"), PASSPORTS).expect("parse");
        assert_eq!(form.title.as_str(), "Passports");
        assert_eq!(form.config.duration_minutes, 45);
        assert_eq!(form.config.validity_start, None);
        assert_eq!(
            form.config.validity_end,
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert!(form.config.open_days.is_open(Weekday::Fri));
        assert!(!form.config.open_days.is_open(Weekday::Tue));
    }

    #[test]
    fn parse_form_names_bad_field() {
        let contents = PASSPORTS.replace("\"09:00\"", "\"nine\"");
        let err = parse_form(Path::new("form.toml"), &contents).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidFormField {
                field: "time_start",
                ..
            }
        ));
    }

    #[test]
    fn parse_form_rejects_unknown_weekday() {
        let contents = PASSPORTS.replace("\"fri\"", "\"caturday\"");
        let err = parse_form(Path::new("form.toml"), &contents).unwrap_err();
        assert!(err.to_string().contains("open_days"));
    }

    #[test]
    fn load_form_reports_missing_file() {
        let temp = TempDir::new().expect("tempdir");
        let err = load_form(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFormFile(_)));
    }

    #[test]
    fn load_form_reads_from_disk() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("form.toml");
        fs::write(&path, PASSPORTS).expect("write form");
        let form = load_form(&path).expect("load");
        assert_eq!(form.config.max_capacity_per_slot, 3);
    }
}
