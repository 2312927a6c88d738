//! PDF renderer for the Licence 'A' instrument.
//!
//! `build` produces the flow; `render_bytes` lays it out on A4 and writes
//! the PDF.

use crate::domain::layout::{FlowElement, StyleName, A4};
use crate::domain::license::prose::{self, LicenseProse};
use crate::domain::license::LicenseFields;
use crate::ports::{DocumentRenderer, OutputFormat, RenderContext, RenderError, RenderedDocument};

use super::pdf_layout;
use super::pdf_writer;

#[derive(Debug, Clone)]
pub struct PdfRenderer {
    fields: LicenseFields,
    context: RenderContext,
}

impl PdfRenderer {
    pub fn new(fields: LicenseFields, context: RenderContext) -> Self {
        Self { fields, context }
    }

    /// Builds the ordered flow of styled paragraphs, spacers and breaks.
    pub fn build(&self) -> Vec<FlowElement> {
        let prose = LicenseProse::new(&self.fields, self.context.executed_on);
        let mut flow = FlowBuilder::default();

        // Cover
        flow.space(30.0)
            .text(prose::RESIDENTIAL, StyleName::Title)
            .space(12.0)
            .text(prose::AUTHORITY, StyleName::Title)
            .text(prose::CITY, StyleName::Title)
            .space(6.0)
            .text(prose::COVER_LICENCE, StyleName::Title)
            .space(36.0)
            .text(prose::divider(), StyleName::Heading)
            .space(36.0)
            .text(prose::divider(), StyleName::Heading)
            .space(48.0);

        // Header and recitals
        flow.text(prose::AUTHORITY, StyleName::Title)
            .text(prose::CITY, StyleName::Subtitle)
            .space(6.0)
            .text(prose::LICENCE, StyleName::Subtitle)
            .space(24.0)
            .text(prose.indenture(), StyleName::Body)
            .space(24.0)
            .text(prose.kpt_recital(), StyleName::Body)
            .space(24.0)
            .text(prose.possession_recital(), StyleName::Body)
            .space(24.0)
            .text(prose.transfer_recital(), StyleName::Body);

        flow.page(prose::PAGE_NUMBERS[0])
            .space(12.0)
            .text(prose::LICENCE_RECITAL, StyleName::Body)
            .space(24.0)
            .text(prose::WITNESSETH, StyleName::Body)
            .space(24.0)
            .text(prose.operative_clause().tabbed(), StyleName::Clause)
            .space(12.0);
        for condition in prose.conditions() {
            flow.text(condition.tabbed(), StyleName::Clause).space(6.0);
        }

        flow.page(prose::PAGE_NUMBERS[1])
            .space(12.0)
            .text(prose.arrears_condition().tabbed(), StyleName::Clause)
            .space(24.0);
        for clause in prose.closing_clauses() {
            flow.text(clause.tabbed(), StyleName::Clause).space(24.0);
        }
        flow.text(prose::PROVISO, StyleName::Body)
            .space(36.0)
            .text(prose::SCHEDULE_HEADING, StyleName::Heading)
            .space(24.0)
            .text(prose.schedule(), StyleName::Body);

        // Execution page
        flow.page(prose::PAGE_NUMBERS[2])
            .space(48.0)
            .text(prose::SECRETARY_SIGNATURE, StyleName::Body)
            .space(24.0)
            .text("1.", StyleName::Clause)
            .space(24.0)
            .text("2.", StyleName::Clause)
            .space(24.0)
            .text(prose::BOARD_MEMBER_SIGNATURE, StyleName::Body)
            .space(72.0)
            .text(prose.witness_block(), StyleName::Body);

        flow.finish()
    }
}

impl DocumentRenderer for PdfRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn context(&self) -> &RenderContext {
        &self.context
    }

    fn generate(&self) -> Result<RenderedDocument, RenderError> {
        Ok(RenderedDocument::Pdf(self.build()))
    }

    fn render_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let pages = pdf_layout::layout(&self.build(), A4);
        tracing::debug!(pages = pages.len(), "Laid out licence PDF");

        pdf_writer::write_pdf(&pages, A4, prose::LICENCE)
            .map_err(|e| RenderError::encoding(OutputFormat::Pdf, e.to_string()))
    }
}

#[derive(Default)]
struct FlowBuilder {
    elements: Vec<FlowElement>,
}

impl FlowBuilder {
    fn text(&mut self, text: impl Into<String>, style: StyleName) -> &mut Self {
        self.elements.push(FlowElement::paragraph(text, style));
        self
    }

    fn space(&mut self, height: f32) -> &mut Self {
        self.elements.push(FlowElement::spacer(height));
        self
    }

    /// Page break followed by a hardcoded page number.
    fn page(&mut self, number: &str) -> &mut Self {
        self.elements.push(FlowElement::PageBreak);
        self.text(number, StyleName::PageNumber)
    }

    fn finish(self) -> Vec<FlowElement> {
        self.elements
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::LocalDocumentFileStorage;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn renderer() -> PdfRenderer {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let context = RenderContext::new(today, Arc::new(LocalDocumentFileStorage::new()));
        PdfRenderer::new(LicenseFields::sample(today), context)
    }

    fn paragraphs(flow: &[FlowElement]) -> Vec<(&str, StyleName)> {
        flow.iter()
            .filter_map(|e| match e {
                FlowElement::Paragraph { text, style } => Some((text.as_str(), *style)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn flow_opens_with_spacer_and_cover_title() {
        let flow = renderer().build();
        assert_eq!(flow[0], FlowElement::spacer(30.0));
        assert_eq!(
            flow[1],
            FlowElement::paragraph(prose::RESIDENTIAL, StyleName::Title)
        );
    }

    #[test]
    fn three_page_breaks_each_followed_by_page_number() {
        let flow = renderer().build();

        let numbers: Vec<_> = flow
            .windows(2)
            .filter(|w| w[0] == FlowElement::PageBreak)
            .map(|w| w[1].clone())
            .collect();

        assert_eq!(
            numbers,
            vec![
                FlowElement::paragraph("2", StyleName::PageNumber),
                FlowElement::paragraph("3", StyleName::PageNumber),
                FlowElement::paragraph("4", StyleName::PageNumber),
            ]
        );
    }

    #[test]
    fn numbered_clauses_use_hanging_style() {
        let flow = renderer().build();
        let clauses: Vec<_> = paragraphs(&flow)
            .into_iter()
            .filter(|(_, style)| *style == StyleName::Clause)
            .map(|(text, _)| text.split('\t').next().unwrap_or_default().to_string())
            .collect();

        assert_eq!(
            clauses,
            ["1.", "(i)", "(ii)", "(iii)", "(iv)", "(v)", "(a)", "(b)", "(vi)", "(vii)", "2.", "3.", "1.", "2."]
        );
    }

    #[test]
    fn schedule_heading_uses_heading_style() {
        let flow = renderer().build();
        assert!(paragraphs(&flow).contains(&(prose::SCHEDULE_HEADING, StyleName::Heading)));
    }

    #[test]
    fn recitals_use_body_style() {
        let r = renderer();
        let flow = r.build();
        let kpt = LicenseProse::new(&r.fields, r.context.executed_on).kpt_recital();

        assert!(paragraphs(&flow).contains(&(kpt.as_str(), StyleName::Body)));
    }

    #[test]
    fn render_bytes_writes_a_pdf() {
        let bytes = renderer().render_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn licence_lays_out_over_several_pages() {
        let pages = pdf_layout::layout(&renderer().build(), A4);
        assert!(pages.len() >= 4);
        for number in prose::PAGE_NUMBERS {
            let headed = pages
                .iter()
                .filter(|p| p.runs.first().map(|r| r.text.as_str()) == Some(number))
                .count();
            assert_eq!(headed, 1, "page headed by {number}");
        }
    }
}
