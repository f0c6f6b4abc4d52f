//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_BINARY_NAME, APP_DATA_DIR};
use crate::models::RgbColor;
use crate::tui::keyboard_avoiding::Platform;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Platform profile; detected from the build target when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Rows covered by an on-screen keyboard (touch terminals)
    #[serde(default)]
    pub keyboard_inset: u16,
}

impl UiConfig {
    /// Effective platform profile.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}

/// Color token overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ColorsConfig {
    /// Background gradient stops as hex strings, start first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<[String; 2]>,
}

/// Asset overrides (paths to text-art files).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssetsConfig {
    /// Back icon art
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_icon: Option<PathBuf>,
    /// Logo art
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; defaults to the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join(format!("{APP_BINARY_NAME}.log"))),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Wallie/config.toml`
/// - macOS: `~/Library/Application Support/Wallie/config.toml`
/// - Windows: `%APPDATA%\Wallie\config.toml`
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Color overrides
    #[serde(default)]
    pub colors: ColorsConfig,
    /// Asset overrides
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - gradient stops are valid hex colors
    /// - the logging filter is not empty
    ///
    /// Asset paths are not checked here; unreadable assets degrade to
    /// placeholders at load time.
    pub fn validate(&self) -> Result<()> {
        if let Some(stops) = &self.colors.gradient {
            for stop in stops {
                RgbColor::from_hex(stop).context("Invalid gradient color in [colors]")?;
            }
        }

        if self.logging.level.trim().is_empty() {
            anyhow::bail!("Logging level must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.platform, None);
        assert_eq!(config.ui.keyboard_inset, 0);
        assert_eq!(config.colors.gradient, None);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_parse_full_config() {
        let content = r##"
[ui]
theme_mode = "Light"
platform = "Ios"
keyboard_inset = 6

[colors]
gradient = ["#112233", "#445566"]

[assets]
logo = "/tmp/logo.txt"

[logging]
level = "debug"
"##;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert_eq!(config.ui.platform(), Platform::Ios);
        assert_eq!(config.ui.keyboard_inset, 6);
        assert_eq!(
            config.colors.gradient,
            Some(["#112233".to_string(), "#445566".to_string()])
        );
        assert_eq!(config.assets.logo, Some(PathBuf::from("/tmp/logo.txt")));
        assert_eq!(config.assets.back_icon, None);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_gradient_requires_two_stops() {
        let content = r##"
[colors]
gradient = ["#112233"]
"##;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_gradient() {
        let mut config = Config::new();
        config.colors.gradient = Some(["#112233".to_string(), "green".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_log_level() {
        let mut config = Config::new();
        config.logging.level = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_to_and_load_from() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config.ui.platform = Some(Platform::Android);
        config.colors.gradient = Some(["#000000".to_string(), "#FFFFFF".to_string()]);

        config.save_to(&path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Config::load_from(&temp_dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_load_from_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui\ntheme_mode = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_log_file_path_override() {
        let logging = LoggingConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("/tmp/custom.log")),
        };
        assert_eq!(logging.file_path().unwrap(), PathBuf::from("/tmp/custom.log"));
    }
}
