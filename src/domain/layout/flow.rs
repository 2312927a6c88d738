//! Flowable page-layout model: styled paragraphs, spacers and page breaks.
//!
//! All measurements are PostScript points (1/72 inch).

use serde::Serialize;

use super::Alignment;

/// A4 portrait with one-inch margins.
pub const A4: PageGeometry = PageGeometry {
    width: 595.28,
    height: 841.89,
    margin: 72.0,
};

/// Page size and uniform margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// Width available to text between the side margins.
    pub fn frame_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Baseline ceiling: y of the top margin, measured from the page bottom.
    pub fn frame_top(&self) -> f32 {
        self.height - self.margin
    }

    /// y of the bottom margin.
    pub fn frame_bottom(&self) -> f32 {
        self.margin
    }
}

/// Typeface weight; the writer maps these onto built-in Helvetica faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Named paragraph styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StyleName {
    Title,
    Subtitle,
    Body,
    Heading,
    Clause,
    PageNumber,
}

/// Resolved typographic parameters of a style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub weight: FontWeight,
    pub font_size: f32,
    pub leading: f32,
    pub space_after: f32,
    pub alignment: Alignment,
    pub left_indent: f32,
    /// Added to `left_indent` on the first line; negative for a hanging indent.
    pub first_line_indent: f32,
}

impl StyleName {
    pub fn style(&self) -> ParagraphStyle {
        let base = ParagraphStyle {
            weight: FontWeight::Regular,
            font_size: 11.0,
            leading: 13.0,
            space_after: 0.0,
            alignment: Alignment::Justify,
            left_indent: 0.0,
            first_line_indent: 0.0,
        };

        match self {
            StyleName::Title => ParagraphStyle {
                weight: FontWeight::Bold,
                font_size: 14.0,
                leading: 16.0,
                space_after: 6.0,
                alignment: Alignment::Center,
                ..base
            },
            StyleName::Subtitle => ParagraphStyle {
                weight: FontWeight::Bold,
                font_size: 12.0,
                leading: 14.0,
                space_after: 4.0,
                alignment: Alignment::Center,
                ..base
            },
            StyleName::Body => ParagraphStyle {
                first_line_indent: 36.0,
                ..base
            },
            StyleName::Heading => ParagraphStyle {
                weight: FontWeight::Bold,
                font_size: 12.0,
                leading: 14.0,
                space_after: 12.0,
                alignment: Alignment::Center,
                ..base
            },
            StyleName::Clause => ParagraphStyle {
                left_indent: 36.0,
                first_line_indent: -36.0,
                ..base
            },
            StyleName::PageNumber => ParagraphStyle {
                leading: 14.0,
                alignment: Alignment::Left,
                left_indent: 36.0,
                ..base
            },
        }
    }
}

/// One item in the layout flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowElement {
    Paragraph { text: String, style: StyleName },
    Spacer { height: f32 },
    PageBreak,
}

impl FlowElement {
    pub fn paragraph(text: impl Into<String>, style: StyleName) -> Self {
        FlowElement::Paragraph {
            text: text.into(),
            style,
        }
    }

    pub fn spacer(height: f32) -> Self {
        FlowElement::Spacer { height }
    }

    /// Paragraph text, if this element is a paragraph.
    pub fn text(&self) -> Option<&str> {
        match self {
            FlowElement::Paragraph { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_frame_leaves_one_inch_margins() {
        assert!((A4.frame_width() - 451.28).abs() < 0.01);
        assert!((A4.frame_top() - 769.89).abs() < 0.01);
        assert_eq!(A4.frame_bottom(), 72.0);
    }

    #[test]
    fn body_style_indents_first_line() {
        let style = StyleName::Body.style();
        assert_eq!(style.first_line_indent, 36.0);
        assert_eq!(style.left_indent, 0.0);
        assert_eq!(style.alignment, Alignment::Justify);
    }

    #[test]
    fn clause_style_hangs_the_marker() {
        let style = StyleName::Clause.style();
        assert_eq!(style.left_indent + style.first_line_indent, 0.0);
        assert_eq!(style.left_indent, 36.0);
    }

    #[test]
    fn title_styles_are_centered_and_bold() {
        for name in [StyleName::Title, StyleName::Subtitle, StyleName::Heading] {
            let style = name.style();
            assert_eq!(style.alignment, Alignment::Center);
            assert_eq!(style.weight, FontWeight::Bold);
        }
    }

    #[test]
    fn text_is_only_available_on_paragraphs() {
        assert_eq!(
            FlowElement::paragraph("2", StyleName::PageNumber).text(),
            Some("2")
        );
        assert_eq!(FlowElement::spacer(12.0).text(), None);
        assert_eq!(FlowElement::PageBreak.text(), None);
    }
}
