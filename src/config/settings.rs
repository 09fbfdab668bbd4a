//! Configuration settings for rundist.
//!
//! Settings are loaded from `~/.rundist/config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::RunDistError;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "runningDistanceHistory";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Calculator and history settings.
    pub calculator: CalculatorConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default)]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Calculator and history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Key the session history is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Label printed after distances.
    #[serde(default = "default_distance_unit")]
    pub distance_unit: String,
    /// Number of sessions shown by `history list`.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_distance_unit() -> String {
    "km".to_string()
}

const fn default_history_limit() -> usize {
    10
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: ColorSetting::default(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            distance_unit: default_distance_unit(),
            history_limit: default_history_limit(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, RunDistError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RunDistError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            RunDistError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), RunDistError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| RunDistError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            RunDistError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, RunDistError> {
        serde_yaml::to_string(self)
            .map_err(|e| RunDistError::Config(format!("Failed to serialize config: {e}")))
    }

    fn validate(&self) -> Result<(), RunDistError> {
        if self.calculator.storage_key.trim().is_empty() {
            return Err(RunDistError::Config(
                "calculator.storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.calculator.storage_key, "runningDistanceHistory");
        assert_eq!(config.calculator.distance_unit, "km");
        assert_eq!(config.calculator.history_limit, 10);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.calculator.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.calculator.storage_key = "trackSessions".to_string();
        config.calculator.distance_unit = "mi".to_string();
        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded.calculator.storage_key, "trackSessions");
        assert_eq!(loaded.calculator.distance_unit, "mi");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
calculator:
  storage_key: intervals
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.calculator.storage_key, "intervals");
        assert_eq!(config.calculator.distance_unit, "km");
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "calculator:\n  storage_key: ''\n").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(RunDistError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "general: [not, a, map").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }
}
