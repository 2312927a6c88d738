//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Rendering Ports
//!
//! - `DocumentRenderer` - One licence rendered to one output format
//! - `DocumentFileStorage` - Persists encoded documents

mod document_file_storage;
mod document_renderer;

pub use document_file_storage::{DocumentFileStorage, StorageError, StoredDocument};
pub use document_renderer::{
    content_type_for_extension, DocumentRenderer, OutputFormat, RenderContext, RenderError,
    RenderedDocument,
};
