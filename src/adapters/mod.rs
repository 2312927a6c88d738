//! Adapters - Implementations of port interfaces.
//!
//! - `document` - Format renderers and local file storage

pub mod document;

pub use document::{
    DocxRenderer, HtmlRenderer, LocalDocumentFileStorage, MarkdownRenderer, PdfRenderer,
};
