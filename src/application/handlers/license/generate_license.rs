//! GenerateLicenseHandler - Command handler for producing a licence file.
//!
//! Validates the field dictionary, selects the renderer for the requested
//! document type and format, and saves the result.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::renderer_registry::RendererSelector;
use crate::domain::license::{DocumentType, LicenseFields};
use crate::ports::{OutputFormat, RenderError};

/// Command to generate one licence document on disk.
#[derive(Debug, Clone)]
pub struct GenerateLicenseCommand {
    /// Registered document type name, e.g. `dha_license_a`.
    pub document_type: String,
    /// Output format name: `docx`, `pdf`, `markdown` or `html`.
    pub format: String,
    /// Values to interpolate.
    pub fields: LicenseFields,
    /// Explicit target path; defaults to `{output_dir}/{stem}.{ext}`.
    pub output_path: Option<PathBuf>,
}

impl GenerateLicenseCommand {
    /// Command for the built-in licence in `format`, saved to the default path.
    pub fn licence_a(fields: LicenseFields, format: impl Into<String>) -> Self {
        Self {
            document_type: DocumentType::DhaLicenseA.as_str().to_string(),
            format: format.into(),
            fields,
            output_path: None,
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }
}

/// Result of successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateLicenseResult {
    /// Where the document was written.
    pub path: PathBuf,
    /// Format that was rendered.
    pub format: OutputFormat,
    /// MIME type to serve the file with.
    pub content_type: &'static str,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the file.
    pub checksum: String,
}

/// Handler for generating licence documents.
///
/// # Dependencies
///
/// - `RendererSelector`: picks the renderer and supplies the date and storage
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateLicenseHandler::new(selector, "generated_docs");
/// let cmd = GenerateLicenseCommand::licence_a(fields, "pdf");
/// let result = handler.handle(cmd)?;
/// println!("{} ({} bytes)", result.path.display(), result.size_bytes);
/// ```
pub struct GenerateLicenseHandler {
    selector: Arc<RendererSelector>,
    output_dir: PathBuf,
}

impl GenerateLicenseHandler {
    pub fn new(selector: Arc<RendererSelector>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            selector,
            output_dir: output_dir.into(),
        }
    }

    /// Default target for a document type and format.
    pub fn default_path(&self, document_type: &str, format: OutputFormat) -> PathBuf {
        let stem = document_type
            .parse::<DocumentType>()
            .map(|t| t.file_stem().to_string())
            .unwrap_or_else(|_| document_type.trim().to_lowercase());
        self.output_dir.join(format!("{}.{}", stem, format.extension()))
    }

    pub fn handle(&self, cmd: GenerateLicenseCommand) -> Result<GenerateLicenseResult, RenderError> {
        // 1. Reject blank fields before doing any work
        cmd.fields.validate()?;

        // 2. Pick the renderer
        let renderer = self
            .selector
            .select(&cmd.document_type, &cmd.format, cmd.fields)?;
        let format = renderer.format();

        // 3. Render and save
        let path = cmd
            .output_path
            .unwrap_or_else(|| self.default_path(&cmd.document_type, format));
        let stored = renderer.save(&path)?;

        tracing::info!(
            document_type = %cmd.document_type,
            %format,
            path = %stored.path.display(),
            checksum = %stored.checksum,
            "Generated licence document"
        );

        Ok(GenerateLicenseResult {
            path: stored.path,
            format,
            content_type: format.content_type(),
            size_bytes: stored.size_bytes,
            checksum: stored.checksum,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
