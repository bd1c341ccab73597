//! Core error types for soberpath-core.
//!
//! Almost nothing in the core can fail: unknown ids are no-ops and an empty
//! collection has a defined percentage. What remains is input validation and
//! configuration I/O, both modelled here with thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for soberpath-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home/config directory could not be prepared
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
///
/// Raised when user input cannot become an entity. Callers recover locally
/// by declining the mutation and re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming whitespace
    #[error("title must not be empty")]
    EmptyTitle,

    /// Free-form content is empty after trimming whitespace
    #[error("content must not be empty")]
    EmptyContent,

    /// Two items share an id
    #[error("duplicate item id: {0}")]
    DuplicateId(String),

    /// A required field was not supplied
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A confirmation needs at least one enabled entry
    #[error("select at least one {0}")]
    NothingSelected(&'static str),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_converts_into_core_error() {
        let err: CoreError = ValidationError::EmptyTitle.into();
        assert_eq!(err.to_string(), "Validation error: title must not be empty");
    }

    #[test]
    fn unknown_key_message_names_the_key() {
        let err = ConfigError::UnknownKey("ui.nope".into());
        assert_eq!(err.to_string(), "unknown config key: ui.nope");
    }
}
