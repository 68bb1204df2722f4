//! Core error types for classroom-env-core.
//!
//! The evaluator itself is total over its typed inputs; every error here is
//! raised at a boundary (parsing names, building a settings snapshot, loading
//! configuration) before a value reaches the evaluator.

use std::path::PathBuf;
use thiserror::Error;

use crate::climate::Attribute;

/// Core error type for classroom-env-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A season, time of day or attribute name outside the fixed enumeration.
    #[error("Invalid {kind} value: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// A current-settings snapshot lacks one of the four attributes.
    #[error("Missing value for attribute '{0}'")]
    MissingAttributeValue(Attribute),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Lookup of a dot-separated key that does not exist
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// The platform home directory could not be determined
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

impl CoreError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        CoreError::InvalidEnumValue {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_enum_message() {
        let err = CoreError::invalid("season", "monsoon");
        assert_eq!(err.to_string(), "Invalid season value: 'monsoon'");
    }

    #[test]
    fn test_missing_attribute_message() {
        let err = CoreError::MissingAttributeValue(Attribute::Lighting);
        assert_eq!(err.to_string(), "Missing value for attribute 'lighting'");
    }

    #[test]
    fn test_config_error_converts() {
        let err: CoreError = ConfigError::UnknownKey("ui.theme".into()).into();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
    }
}
