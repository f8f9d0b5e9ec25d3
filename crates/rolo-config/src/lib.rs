use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rolo_core::rules::{validate_within_days, DEFAULT_WITHIN_DAYS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolo";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Reminder window, in days, for the `birthdays` command.
    pub upcoming_days: i64,
    /// Address book location; overridden by the `--book-path` flag.
    pub book_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_WITHIN_DAYS,
            book_path: None,
        }
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
    #[error("invalid upcoming_days value: {0}")]
    InvalidUpcomingDays(i64),
    #[error("invalid book_path value")]
    InvalidBookPath,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
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
    upcoming_days: Option<i64>,
    book_path: Option<PathBuf>,
}

/// Loads the config file, falling back to defaults when no file exists.
/// An explicitly requested path must exist; the default location need not.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
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

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(days) = parsed.upcoming_days {
        config.upcoming_days =
            validate_within_days(days).map_err(|_| ConfigError::InvalidUpcomingDays(days))?;
    }

    if let Some(path) = parsed.book_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidBookPath);
        }
        config.book_path = Some(path);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, AppConfig, ConfigError};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).expect("write config");
        (temp, path)
    }

    #[test]
    fn defaults_when_file_missing() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        let config = load_at_path(&path, false).expect("load");
        assert!(config.is_none());
        assert_eq!(AppConfig::default().upcoming_days, 7);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfigFile(_)));
    }

    #[test]
    fn parses_upcoming_days_and_book_path() {
        let (_temp, path) = write_config("upcoming_days = 14\nbook_path = \"/tmp/book.json\"\n");
        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.upcoming_days, 14);
        assert_eq!(config.book_path.as_deref(), Some(Path::new("/tmp/book.json")));
    }

    #[test]
    fn rejects_out_of_range_upcoming_days() {
        let (_temp, path) = write_config("upcoming_days = 0\n");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUpcomingDays(0)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let (_temp, path) = write_config("upcomming_days = 7\n");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_empty_book_path() {
        let (_temp, path) = write_config("book_path = \"\"\n");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBookPath));
    }
}
