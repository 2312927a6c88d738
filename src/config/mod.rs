//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DHA_LICENSE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dha_license::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//!
//! println!("Writing documents to {}", config.output.directory.display());
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output directory, default format and size limit
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DHA_LICENSE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DHA_LICENSE__OUTPUT__DIRECTORY=out` -> `output.directory = "out"`
    /// - `DHA_LICENSE__LOGGING__FORMAT=json` -> `logging.format = Json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("DHA_LICENSE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when values cannot be parsed, or
    /// `ConfigError::ValidationFailed` when a value is out of range.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
