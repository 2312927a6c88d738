//! DHA Licence - Multi-format legal document generator
//!
//! This crate fills the DHA residential Licence 'A' instrument from a field
//! dictionary and renders it as DOCX, PDF, Markdown or HTML.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
