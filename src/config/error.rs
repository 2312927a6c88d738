//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Unsupported default output format '{0}'")]
    UnsupportedDefaultFormat(String),

    #[error("Maximum file size must be greater than zero")]
    InvalidMaxFileSize,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
