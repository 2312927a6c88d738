//! Document Renderer Port - One filled licence, one output format.
//!
//! A renderer is built from a field dictionary and a `RenderContext`. It can
//! produce its in-memory form (`generate`), the encoded bytes
//! (`render_bytes`), or persist those bytes through the storage port
//! (`save`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::layout::{FlowElement, RichDocument};

use super::document_file_storage::{DocumentFileStorage, StorageError, StoredDocument};

/// Port for turning a licence into one output format.
///
/// # Contract
///
/// Implementations must:
/// - Be deterministic for identical fields and execution date
/// - Place every field value verbatim in the output
/// - Fail with `RenderError::MissingField` rather than emit a blank
///   placeholder
///
/// # Usage
///
/// ```rust,ignore
/// let renderer = selector.select("dha_license_a", "pdf", fields)?;
/// let stored = renderer.save(Path::new("generated_docs/licence.pdf"))?;
/// println!("{} bytes, sha256 {}", stored.size_bytes, stored.checksum);
/// ```
pub trait DocumentRenderer: Send + Sync {
    /// The format this renderer produces.
    fn format(&self) -> OutputFormat;

    /// Shared execution date and storage.
    fn context(&self) -> &RenderContext;

    /// Build the in-memory document.
    fn generate(&self) -> Result<RenderedDocument, RenderError>;

    /// Build and encode the document.
    fn render_bytes(&self) -> Result<Vec<u8>, RenderError>;

    /// Encode the document and write it to `path`, replacing any existing
    /// file. Parent directories are created as needed.
    fn save(&self, path: &Path) -> Result<StoredDocument, RenderError> {
        let bytes = self.render_bytes()?;
        let stored = self.context().storage.write(path, &bytes)?;

        tracing::info!(
            format = %self.format(),
            path = %stored.path.display(),
            size_bytes = stored.size_bytes,
            "Saved rendered document"
        );

        Ok(stored)
    }
}

/// Inputs every renderer shares besides the field dictionary.
#[derive(Clone)]
pub struct RenderContext {
    /// Date the licence is executed on; drives the "made this ... day of"
    /// wording and the template `current_date`.
    pub executed_on: NaiveDate,

    /// Where `save` writes to.
    pub storage: Arc<dyn DocumentFileStorage>,
}

impl RenderContext {
    pub fn new(executed_on: NaiveDate, storage: Arc<dyn DocumentFileStorage>) -> Self {
        Self {
            executed_on,
            storage,
        }
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("executed_on", &self.executed_on)
            .finish_non_exhaustive()
    }
}

/// Output formats a licence can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Office Open XML word-processing document.
    Docx,
    /// Paginated A4 PDF.
    Pdf,
    /// Markdown text.
    Markdown,
    /// Standalone print-styled HTML page.
    Html,
}

impl OutputFormat {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Docx,
        OutputFormat::Pdf,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ];

    /// The accepted names, comma separated.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Html => "text/html",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "docx" => Ok(OutputFormat::Docx),
            "pdf" => Ok(OutputFormat::Pdf),
            "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(RenderError::unsupported_format(s)),
        }
    }
}

/// MIME type to serve a saved file with, keyed by its extension.
///
/// Unknown extensions fall back to `application/octet-stream`.
pub fn content_type_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "docx" => OutputFormat::Docx.content_type(),
        "pdf" => OutputFormat::Pdf.content_type(),
        "markdown" | "md" => OutputFormat::Markdown.content_type(),
        "html" => OutputFormat::Html.content_type(),
        _ => "application/octet-stream",
    }
}

/// In-memory result of `DocumentRenderer::generate`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedDocument {
    Docx(RichDocument),
    Pdf(Vec<FlowElement>),
    Markdown(String),
    Html(String),
}

impl RenderedDocument {
    pub fn format(&self) -> OutputFormat {
        match self {
            RenderedDocument::Docx(_) => OutputFormat::Docx,
            RenderedDocument::Pdf(_) => OutputFormat::Pdf,
            RenderedDocument::Markdown(_) => OutputFormat::Markdown,
            RenderedDocument::Html(_) => OutputFormat::Html,
        }
    }

    /// All visible text, one paragraph per line for the structured formats.
    pub fn text(&self) -> String {
        match self {
            RenderedDocument::Docx(doc) => doc.plain_text(),
            RenderedDocument::Pdf(flow) => flow
                .iter()
                .filter_map(FlowElement::text)
                .collect::<Vec<_>>()
                .join("\n"),
            RenderedDocument::Markdown(text) | RenderedDocument::Html(text) => text.clone(),
        }
    }
}

/// Errors that can occur while selecting, rendering or saving a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Requested output format is not one of the supported set.
    #[error("Unsupported output format '{requested}'. Valid formats: {valid}")]
    UnsupportedFormat { requested: String, valid: String },

    /// No renderer is registered for the document type.
    #[error("No renderer registered for document type '{0}'")]
    UnregisteredDocumentType(String),

    /// A template referenced a name absent from the field dictionary.
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The field dictionary failed validation.
    #[error("Invalid licence fields: {0}")]
    InvalidFields(#[from] ValidationError),

    /// Template engine failure other than a missing field.
    #[error("Template rendering failed: {0}")]
    Template(String),

    /// Encoding the in-memory document to bytes failed.
    #[error("{format} encoding failed: {message}")]
    Encoding { format: OutputFormat, message: String },

    /// Writing the encoded document failed.
    #[error("Failed to save document: {0}")]
    Storage(#[from] StorageError),
}

impl RenderError {
    /// Create an unsupported format error listing the valid formats.
    pub fn unsupported_format(requested: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            requested: requested.into(),
            valid: OutputFormat::valid_names(),
        }
    }

    /// Create an unregistered document type error.
    pub fn unregistered(document_type: impl Into<String>) -> Self {
        Self::UnregisteredDocumentType(document_type.into())
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a template error.
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    /// Create an encoding error.
    pub fn encoding(format: OutputFormat, message: impl Into<String>) -> Self {
        Self::Encoding {
            format,
            message: message.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::{Alignment, StyleName};

    // ───────────────────────────────────────────────────────────────
    // OutputFormat tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("docx".parse::<OutputFormat>().unwrap(), OutputFormat::Docx);
        assert_eq!("PDF".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("Markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
    }

    #[test]
    fn output_format_rejects_aliases() {
        assert!("md".parse::<OutputFormat>().is_err());
        assert!("htm".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn unsupported_format_lists_valid_formats() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();

        match &err {
            RenderError::UnsupportedFormat { requested, valid } => {
                assert_eq!(requested, "xml");
                assert_eq!(valid, "docx, pdf, markdown, html");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Unsupported output format 'xml'. Valid formats: docx, pdf, markdown, html"
        );
    }

    #[test]
    fn output_format_display_round_trips_through_parse() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn output_format_extensions_are_correct() {
        assert_eq!(OutputFormat::Docx.extension(), "docx");
        assert_eq!(OutputFormat::Pdf.extension(), "pdf");
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Html.extension(), "html");
    }

    // ───────────────────────────────────────────────────────────────
    // Content types
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn content_type_for_known_extensions() {
        assert_eq!(
            content_type_for_extension("docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for_extension("pdf"), "application/pdf");
        assert_eq!(content_type_for_extension("md"), "text/markdown");
        assert_eq!(content_type_for_extension("markdown"), "text/markdown");
        assert_eq!(content_type_for_extension("HTML"), "text/html");
    }

    #[test]
    fn content_type_falls_back_to_octet_stream() {
        assert_eq!(content_type_for_extension("xml"), "application/octet-stream");
        assert_eq!(content_type_for_extension(""), "application/octet-stream");
    }

    // ───────────────────────────────────────────────────────────────
    // RenderedDocument
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn rendered_document_reports_its_format() {
        let rendered = RenderedDocument::Markdown("# x".to_string());
        assert_eq!(rendered.format(), OutputFormat::Markdown);
    }

    #[test]
    fn rendered_document_text_skips_spacers() {
        let rendered = RenderedDocument::Pdf(vec![
            FlowElement::paragraph("one", StyleName::Body),
            FlowElement::spacer(12.0),
            FlowElement::PageBreak,
            FlowElement::paragraph("two", StyleName::Body),
        ]);
        assert_eq!(rendered.text(), "one\ntwo");
    }

    #[test]
    fn rendered_docx_text_joins_paragraphs() {
        let mut doc = RichDocument::new();
        doc.push("a", Alignment::Center);
        doc.push("b", Alignment::Justify);
        assert_eq!(RenderedDocument::Docx(doc).text(), "a\nb");
    }

    // ───────────────────────────────────────────────────────────────
    // RenderError
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn unregistered_error_names_the_type() {
        let err = RenderError::unregistered("dha_license_b");
        assert!(err.to_string().contains("dha_license_b"));
    }

    #[test]
    fn missing_field_error_names_the_field() {
        let err = RenderError::missing_field("plot_colour");
        assert_eq!(err.to_string(), "Missing required field: plot_colour");
    }

    #[test]
    fn storage_error_converts() {
        let err: RenderError = StorageError::io("disk full").into();
        assert!(matches!(err, RenderError::Storage(_)));
    }

    #[test]
    fn document_renderer_is_object_safe() {
        fn check<T: DocumentRenderer + ?Sized>() {}
        check::<dyn DocumentRenderer>();
    }
}
