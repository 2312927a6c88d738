//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports:
//! renderer selection, validation, and saving generated documents.

pub mod handlers;
pub mod renderer_registry;

pub use handlers::{GenerateLicenseCommand, GenerateLicenseHandler, GenerateLicenseResult};
pub use renderer_registry::{licence_a_renderer, RendererFactory, RendererRegistry, RendererSelector};
