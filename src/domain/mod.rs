//! Domain layer containing the licence vocabulary and document models.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (clock, validation errors)
//! - `license` - Field dictionary, derived values and legal wording
//! - `layout` - Format-specific in-memory document models

pub mod foundation;
pub mod layout;
pub mod license;
