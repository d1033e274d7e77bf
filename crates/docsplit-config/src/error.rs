//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown configuration format
    #[error("Unknown configuration format for file: {path}\nSupported formats: .yml, .yaml, .toml, .json")]
    UnknownFormat { path: PathBuf },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration {path}:\n{message}")]
    YamlError { path: String, message: String },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration {path}:\n{message}")]
    TomlError { path: String, message: String },

    /// JSON parsing error
    #[error("Failed to parse JSON configuration {path}:\n{message}")]
    JsonError { path: String, message: String },

    /// IO error
    #[error("Failed to read configuration file: {path}\n{source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Value outside the allowed range
    #[error("Invalid value {value} for {field}: must be between {min} and {max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Generic validation failure
    #[error("Invalid configuration for {field}: {message}")]
    ValidationError { field: String, message: String },
}
