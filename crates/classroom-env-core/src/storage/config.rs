//! TOML-based application configuration.
//!
//! Holds the panel's starting state:
//! - Initial season and time-of-day selection
//! - Initial control values
//! - Output preferences for the CLI
//!
//! Configuration is read from `~/.config/classroom-env/config.toml`. It is
//! never written by the application.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;
use crate::climate::{Season, TimeOfDay};
use crate::error::{ConfigError, Result};
use crate::recommendation::CurrentSettings;

/// Initial selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_season")]
    pub season: Season,
    #[serde(default = "default_time")]
    pub time: TimeOfDay,
}

/// Initial control values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_humidity")]
    pub humidity: f64,
    #[serde(default = "default_ventilation")]
    pub ventilation: f64,
    #[serde(default = "default_lighting")]
    pub lighting: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON instead of text.
    #[serde(default)]
    pub json: bool,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_season() -> Season {
    Season::Spring
}
fn default_time() -> TimeOfDay {
    TimeOfDay::Morning
}
fn default_temperature() -> f64 {
    22.0
}
fn default_humidity() -> f64 {
    50.0
}
fn default_ventilation() -> f64 {
    4.0
}
fn default_lighting() -> f64 {
    500.0
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            season: default_season(),
            time: default_time(),
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            humidity: default_humidity(),
            ventilation: default_ventilation(),
            lighting: default_lighting(),
        }
    }
}

impl ControlsConfig {
    pub fn settings(&self) -> CurrentSettings {
        CurrentSettings::new(
            self.temperature,
            self.humidity,
            self.ventilation,
            self.lighting,
        )
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, or defaults if no file exists there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Get a config value as string by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` if no value exists at `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        let json = serde_json::to_value(self)?;
        let val = Self::get_json_value_by_path(&json, key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        Ok(match val {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.selection.season, Season::Spring);
        assert_eq!(cfg.selection.time, TimeOfDay::Morning);
        assert_eq!(cfg.controls.settings(), CurrentSettings::new(22.0, 50.0, 4.0, 500.0));
        assert!(!cfg.output.json);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [selection]
            season = "winter"

            [controls]
            humidity = 38.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.selection.season, Season::Winter);
        assert_eq!(cfg.selection.time, TimeOfDay::Morning);
        assert_eq!(cfg.controls.humidity, 38.5);
        assert_eq!(cfg.controls.lighting, 500.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.controls.temperature, 22.0);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[selection]\nseason = \"monsoon\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Config(ConfigError::ParseFailed { .. })
        ));
    }

    #[test]
    fn test_get_by_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("selection.season").unwrap(), "spring");
        assert_eq!(cfg.get("controls.lighting").unwrap(), "500.0");
        assert_eq!(cfg.get("output.json").unwrap(), "false");
        assert!(matches!(
            cfg.get("ui.theme"),
            Err(CoreError::Config(ConfigError::UnknownKey(_)))
        ));
        assert!(cfg.get("").is_err());
    }
}
