//! Legal instrument types the generator knows how to render.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a kind of legal instrument.
///
/// Parsing is separate from registration: a type that parses may still have
/// no renderer registered with a given selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// DHA residential licence, form 'A'.
    DhaLicenseA,
}

impl DocumentType {
    /// Every known document type.
    pub const ALL: [DocumentType; 1] = [DocumentType::DhaLicenseA];

    /// Stable identifier used on the command line and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::DhaLicenseA => "dha_license_a",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentType::DhaLicenseA => "DHA License 'A'",
        }
    }

    /// One-line description shown in listings.
    pub fn description(&self) -> &'static str {
        match self {
            DocumentType::DhaLicenseA => "Defence Housing Authority Residential License Type A",
        }
    }

    /// Base file name for generated output.
    pub fn file_stem(&self) -> &'static str {
        match self {
            DocumentType::DhaLicenseA => "dha_license_a",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}

/// A document type name that matches no known instrument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);
