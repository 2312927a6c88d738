//! Foundation module - Shared domain primitives.
//!
//! Contains the clock abstraction and validation errors used across
//! the licence domain.

mod clock;
mod errors;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::ValidationError;
