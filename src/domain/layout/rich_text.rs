//! Word-processor document model: a flat run of aligned paragraphs.

use super::Alignment;

/// Point size applied to every paragraph.
pub const BODY_FONT_SIZE_PT: u8 = 12;

/// Page margin on all four sides, in inches.
pub const MARGIN_INCHES: f32 = 1.0;

/// One paragraph. Tabs and line breaks inside `text` are kept as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct RichParagraph {
    pub text: String,
    pub alignment: Alignment,
    pub font_size_pt: u8,
    /// Starts a new page before this paragraph.
    pub page_break_before: bool,
}

/// Ordered paragraphs plus page margins.
#[derive(Debug, Clone, PartialEq)]
pub struct RichDocument {
    pub margin_inches: f32,
    pub paragraphs: Vec<RichParagraph>,
}

impl Default for RichDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl RichDocument {
    pub fn new() -> Self {
        Self {
            margin_inches: MARGIN_INCHES,
            paragraphs: Vec::new(),
        }
    }

    /// Appends a paragraph at the body font size.
    pub fn push(&mut self, text: impl Into<String>, alignment: Alignment) {
        self.paragraphs.push(RichParagraph {
            text: text.into(),
            alignment,
            font_size_pt: BODY_FONT_SIZE_PT,
            page_break_before: false,
        });
    }

    /// Starts a new page headed by a left-aligned page number.
    pub fn push_page_number(&mut self, number: &str) {
        self.paragraphs.push(RichParagraph {
            text: number.to_string(),
            alignment: Alignment::Left,
            font_size_pt: BODY_FONT_SIZE_PT,
            page_break_before: true,
        });
    }

    /// Appends `count` empty paragraphs.
    pub fn push_blank(&mut self, count: usize) {
        for _ in 0..count {
            self.push("", Alignment::Justify);
        }
    }

    /// Concatenated paragraph text, one paragraph per line.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
