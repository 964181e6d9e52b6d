//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/beingbetter/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/beingbetter/` (~/.config/beingbetter/)
//! - State/Logs: `$XDG_STATE_HOME/beingbetter/` (~/.local/state/beingbetter/)

use crate::error::{Error, Result};
use crate::locale::DateOrder;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Locale extensions and overrides, keyed by locale identifier
    #[serde(default)]
    pub locales: HashMap<String, LocaleEntry>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics configuration
#[derive(Debug, Deserialize)]
pub struct AnalyticsConfig {
    /// Locale unknown identifiers fall back to
    #[serde(default = "default_locale_id")]
    pub default_locale: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale_id(),
        }
    }
}

fn default_locale_id() -> String {
    crate::locale::DEFAULT_LOCALE.to_string()
}

/// One `[locales.<id>]` entry.
///
/// For a known locale the stopwords merge into the built-in set and the
/// other fields override; for a new locale `weekdays` is required (exactly
/// 7 labels, Monday first).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LocaleEntry {
    /// Extra stopwords, lowercased on load
    #[serde(default)]
    pub stopwords: Vec<String>,

    /// Weekday abbreviations, Monday first
    pub weekdays: Option<Vec<String>>,

    /// Day-label field order
    pub date_order: Option<DateOrder>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/beingbetter/config.toml` (~/.config/beingbetter/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("beingbetter").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/beingbetter/` (~/.local/state/beingbetter/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("beingbetter")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/beingbetter/beingbetter.log` (~/.local/state/beingbetter/beingbetter.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("beingbetter.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analytics.default_locale, "en");
        assert!(config.locales.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.max_files, 5);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analytics]
default_locale = "pl"

[locales.pl]
stopwords = ["bardzo"]

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.analytics.default_locale, "pl");
        assert_eq!(config.locales["pl"].stopwords, vec!["bardzo"]);
        assert!(config.locales["pl"].weekdays.is_none());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_locale_entry_fields() {
        let toml = r#"
[locales.de]
weekdays = ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."]
date_order = "day-month"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let entry = &config.locales["de"];
        assert_eq!(entry.weekdays.as_ref().unwrap().len(), 7);
        assert_eq!(entry.date_order, Some(DateOrder::DayMonth));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analytics]\ndefault_locale = \"pl\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analytics.default_locale, "pl");

        let missing = dir.path().join("absent.toml");
        assert!(matches!(Config::load_from(&missing), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "analytics = nonsense").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
