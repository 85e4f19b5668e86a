pub mod form;

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use slotdesk_core::rules::validate_plan_days;
use slotdesk_core::{Locale, MessageCatalog, ViolationCode};
use thiserror::Error;

pub use form::{load_form, FormFile};

const APP_DIR: &str = "slotdesk";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PLAN_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub plan_days: i64,
    catalog: MessageCatalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan_days: DEFAULT_PLAN_DAYS,
            catalog: MessageCatalog::new(Locale::En),
        }
    }
}

impl AppConfig {
    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    /// Catalog for the configured locale with `[messages]` overrides applied.
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
    #[error("invalid plan_days value: {0}")]
    InvalidPlanDays(i64),
    #[error("unknown violation code in [messages]: {0}")]
    UnknownMessageCode(String),
    #[error("empty message for {0}")]
    EmptyMessage(ViolationCode),
    #[error("form file not found: {0}")]
    MissingFormFile(PathBuf),
    #[error("invalid form field {field} in {path}: {message}")]
    InvalidFormField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    locale: Option<String>,
    plan_days: Option<i64>,
    messages: Option<BTreeMap<String, String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = read_file(path)?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(locale) = parsed.locale {
        let locale =
            Locale::from_str(&locale).map_err(|_| ConfigError::InvalidLocale(locale.clone()))?;
        config.catalog = MessageCatalog::new(locale);
    }

    if let Some(days) = parsed.plan_days {
        config.plan_days = validate_plan_days(days).map_err(|_| ConfigError::InvalidPlanDays(days))?;
    }

    if let Some(messages) = parsed.messages {
        for (key, text) in messages {
            let code = ViolationCode::from_str(&key)
                .map_err(|_| ConfigError::UnknownMessageCode(key.clone()))?;
            config
                .catalog
                .set_override(code, &text)
                .map_err(|_| ConfigError::EmptyMessage(code))?;
        }
    }

    Ok(config)
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, AppConfig, ConfigError, ConfigFile};
    use slotdesk_core::{Locale, MessageCatalog, ViolationCode};
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let mut messages = BTreeMap::new();
        messages.insert(
            "people_exceed_capacity".to_string(),
            " Too many people ".to_string(),
        );
        let parsed = ConfigFile {
            locale: Some("FR".to_string()),
            plan_days: Some(14),
            messages: Some(messages),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.locale(), Locale::Fr);
        assert_eq!(merged.plan_days, 14);
        assert_eq!(
            merged.catalog().render(ViolationCode::PeopleExceedCapacity),
            "Too many people"
        );
        assert_eq!(
            merged.catalog().render(ViolationCode::NoWorkingDayOpen),
            MessageCatalog::new(Locale::Fr).render(ViolationCode::NoWorkingDayOpen)
        );
    }

    #[test]
    fn merge_config_keeps_locale_with_overrides() {
        let mut messages = BTreeMap::new();
        messages.insert("no_working_day_open".to_string(), "Choisir".to_string());
        let merged = merge_config(ConfigFile {
            locale: Some("fr".to_string()),
            plan_days: None,
            messages: Some(messages),
        })
        .expect("merge");
        let catalog = merged.catalog();
        assert_eq!(catalog.locale(), Locale::Fr);
        assert_eq!(catalog.render(ViolationCode::NoWorkingDayOpen), "Choisir");
        assert_eq!(catalog.entries().len(), 6);
    }

    #[test]
    fn merge_config_rejects_unknown_codes_and_blank_messages() {
        let mut messages = BTreeMap::new();
        messages.insert("too_late".to_string(), "x".to_string());
        let err = merge_config(ConfigFile {
            locale: None,
            plan_days: None,
            messages: Some(messages),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMessageCode(code) if code == "too_late"));

        let mut messages = BTreeMap::new();
        messages.insert("no_working_day_open".to_string(), "  ".to_string());
        let err = merge_config(ConfigFile {
            locale: None,
            plan_days: None,
            messages: Some(messages),
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyMessage(ViolationCode::NoWorkingDayOpen)
        ));
    }

    #[test]
    fn merge_config_rejects_out_of_range_plan_days() {
        let err = merge_config(ConfigFile {
            locale: None,
            plan_days: Some(0),
            messages: None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlanDays(0)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "locale = \"fr\"\nplan_days = 3\n[messages]\nno_working_day_open = \"Pick a day\"\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.locale(), Locale::Fr);
        assert_eq!(config.plan_days, 3);
        assert_eq!(
            config.catalog().render(ViolationCode::NoWorkingDayOpen),
            "Pick a day"
        );
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "theme = \"dark\"\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn default_catalog_is_english() {
        let config = AppConfig::default();
        let catalog = config.catalog();
        assert_eq!(catalog.locale(), Locale::En);
    }
}
