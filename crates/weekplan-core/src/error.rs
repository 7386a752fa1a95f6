//! Core error types for weekplan-core.
//!
//! The timeline compiler never fails; these errors come from the layers
//! around it (configuration, fixture loading, form builders, session edits).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weekplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Fixture data could not be read or decoded
    #[error("Fixture error: {0}")]
    Fixture(String),

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
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors raised by form builders and session edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required form field was left empty
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// Not an "HH:MM" clock time
    #[error("Invalid time for '{field}': {value:?} (expected HH:MM)")]
    InvalidTime { field: &'static str, value: String },

    /// Day of week outside 1..=7
    #[error("Invalid day of week {0} (expected 1 = Monday .. 7 = Sunday)")]
    InvalidDayOfWeek(u8),

    /// Not a "#RGB" or "#RRGGBB" colour
    #[error("Invalid colour for '{field}': {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// Not one of the accepted values
    #[error("Invalid value for '{field}': {value:?}")]
    InvalidValue { field: &'static str, value: String },

    /// Referenced entity does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
