//! Licence command handlers.

mod generate_license;

pub use generate_license::{GenerateLicenseCommand, GenerateLicenseHandler, GenerateLicenseResult};
