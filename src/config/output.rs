//! Output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::document::DEFAULT_MAX_FILE_SIZE_BYTES;
use crate::ports::OutputFormat;

/// Where and how generated documents are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for documents saved without an explicit path
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Format used when none is requested
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Saves larger than this fail
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

impl OutputConfig {
    /// The default format, parsed
    pub fn format(&self) -> Result<OutputFormat, ValidationError> {
        self.default_format
            .parse()
            .map_err(|_| ValidationError::UnsupportedDefaultFormat(self.default_format.clone()))
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.directory.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("output.directory"));
        }
        if self.max_file_size_bytes == 0 {
            return Err(ValidationError::InvalidMaxFileSize);
        }
        self.format()?;
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            default_format: default_format(),
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("generated_docs")
}

fn default_format() -> String {
    OutputFormat::Docx.as_str().to_string()
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.directory, PathBuf::from("generated_docs"));
        assert_eq!(config.format(), Ok(OutputFormat::Docx));
        assert_eq!(config.max_file_size_bytes, 16 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_format_is_case_insensitive() {
        let config = OutputConfig {
            default_format: "PDF".to_string(),
            ..Default::default()
        };
        assert_eq!(config.format(), Ok(OutputFormat::Pdf));
    }

    #[test]
    fn test_unknown_default_format_fails() {
        let config = OutputConfig {
            default_format: "rtf".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnsupportedDefaultFormat("rtf".to_string()))
        );
    }

    #[test]
    fn test_zero_max_file_size_fails() {
        let config = OutputConfig {
            max_file_size_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxFileSize));
    }

    #[test]
    fn test_empty_directory_fails() {
        let config = OutputConfig {
            directory: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("output.directory"))
        );
    }
}
