//! Document adapters - Implementations for rendering and storage.
//!
//! This module provides adapters for the document-related ports:
//! - `DocxRenderer` - Word-processor document packaged as `.docx`
//! - `PdfRenderer` - A4 PDF laid out with built-in Helvetica
//! - `MarkdownRenderer` / `HtmlRenderer` - Handlebars text templates
//! - `LocalDocumentFileStorage` - Stores documents on local filesystem

mod docx_package;
mod docx_renderer;
mod local_file_storage;
pub mod pdf_layout;
mod pdf_renderer;
mod pdf_writer;
mod template_renderer;

pub use docx_package::{document_xml, DocxPackageError};
pub use docx_renderer::DocxRenderer;
pub use local_file_storage::{LocalDocumentFileStorage, DEFAULT_MAX_FILE_SIZE_BYTES};
pub use pdf_renderer::PdfRenderer;
pub use template_renderer::{
    render_licence_template, template_context, Escaping, HtmlRenderer, MarkdownRenderer,
    CURRENT_DATE, HTML_TEMPLATE, MARKDOWN_TEMPLATE,
};
