//! In-memory document models produced by the renderers before encoding.
//!
//! - `rich_text` - paragraphs for the word-processor format
//! - `flow` - styled flowables for the paginated PDF format

pub mod flow;
pub mod rich_text;

pub use flow::{FlowElement, FontWeight, PageGeometry, ParagraphStyle, StyleName, A4};
pub use rich_text::{RichDocument, RichParagraph};

use serde::Serialize;

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Alignment {
    Left,
    Center,
    Justify,
}
