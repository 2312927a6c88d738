//! Renderer registry and selector.
//!
//! The registry maps a document type name to a factory that builds the
//! renderer for a given output format. It is an explicit value handed to the
//! selector at construction; there is no process-wide registration.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapters::document::{DocxRenderer, HtmlRenderer, MarkdownRenderer, PdfRenderer};
use crate::domain::foundation::Clock;
use crate::domain::license::{DocumentType, LicenseFields};
use crate::ports::{DocumentFileStorage, DocumentRenderer, OutputFormat, RenderContext, RenderError};

/// Builds the renderer for one document type in the requested format.
pub type RendererFactory =
    fn(OutputFormat, LicenseFields, RenderContext) -> Box<dyn DocumentRenderer>;

/// Document type name to renderer factory.
///
/// Names are matched case-insensitively.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    factories: BTreeMap<String, RendererFactory>,
}

impl RendererRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with every built-in document type registered.
    pub fn standard() -> Self {
        Self::empty().with(DocumentType::DhaLicenseA.as_str(), licence_a_renderer)
    }

    /// Registers `factory` for `document_type`, replacing any previous entry.
    pub fn register(&mut self, document_type: &str, factory: RendererFactory) {
        self.factories
            .insert(document_type.trim().to_lowercase(), factory);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, document_type: &str, factory: RendererFactory) -> Self {
        self.register(document_type, factory);
        self
    }

    pub fn get(&self, document_type: &str) -> Option<RendererFactory> {
        self.factories
            .get(&document_type.trim().to_lowercase())
            .copied()
    }

    pub fn contains(&self, document_type: &str) -> bool {
        self.get(document_type).is_some()
    }

    /// Registered names in sorted order.
    pub fn document_types(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("document_types", &self.document_types())
            .finish()
    }
}

/// Factory for the Licence 'A' instrument in all four formats.
pub fn licence_a_renderer(
    format: OutputFormat,
    fields: LicenseFields,
    context: RenderContext,
) -> Box<dyn DocumentRenderer> {
    match format {
        OutputFormat::Docx => Box::new(DocxRenderer::new(fields, context)),
        OutputFormat::Pdf => Box::new(PdfRenderer::new(fields, context)),
        OutputFormat::Markdown => Box::new(MarkdownRenderer::new(fields, context)),
        OutputFormat::Html => Box::new(HtmlRenderer::new(fields, context)),
    }
}

/// Picks the renderer for a (document type, output format) pair.
///
/// # Usage
///
/// ```rust,ignore
/// let selector = RendererSelector::new(
///     RendererRegistry::standard(),
///     Arc::new(SystemClock),
///     Arc::new(LocalDocumentFileStorage::new()),
/// );
/// let renderer = selector.select("dha_license_a", "markdown", fields)?;
/// ```
pub struct RendererSelector {
    registry: RendererRegistry,
    clock: Arc<dyn Clock>,
    storage: Arc<dyn DocumentFileStorage>,
}

impl RendererSelector {
    pub fn new(
        registry: RendererRegistry,
        clock: Arc<dyn Clock>,
        storage: Arc<dyn DocumentFileStorage>,
    ) -> Self {
        Self {
            registry,
            clock,
            storage,
        }
    }

    /// Builds the renderer for `document_type` in `format`.
    ///
    /// The format is checked before the document type, so a bad format is
    /// reported even when the type is also unknown.
    ///
    /// # Errors
    ///
    /// - `RenderError::UnsupportedFormat` naming the valid formats
    /// - `RenderError::UnregisteredDocumentType` naming the requested type
    pub fn select(
        &self,
        document_type: &str,
        format: &str,
        fields: LicenseFields,
    ) -> Result<Box<dyn DocumentRenderer>, RenderError> {
        let format: OutputFormat = format.parse().map_err(|e| {
            tracing::warn!(format, "Rejected unsupported output format");
            e
        })?;

        let factory = self.registry.get(document_type).ok_or_else(|| {
            tracing::warn!(document_type, "No renderer registered");
            RenderError::unregistered(document_type)
        })?;

        let context = RenderContext::new(self.clock.today(), Arc::clone(&self.storage));
        tracing::debug!(
            document_type,
            %format,
            executed_on = %context.executed_on,
            "Selected renderer"
        );

        Ok(factory(format, fields, context))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
