//! Command handlers.

pub mod license;

pub use license::{GenerateLicenseCommand, GenerateLicenseHandler, GenerateLicenseResult};
