//! Configuration storage.

pub mod config;

pub use config::{Config, ControlsConfig, OutputConfig, SelectionConfig};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/classroom-env[-dev]/` based on CLASSROOM_ENV.
///
/// Set CLASSROOM_ENV=dev to use the development config directory. The
/// directory is not created.
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("CLASSROOM_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("classroom-env-dev")
    } else {
        base_dir.join("classroom-env")
    })
}
