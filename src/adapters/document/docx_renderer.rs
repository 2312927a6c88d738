//! Word-processor renderer for the Licence 'A' instrument.

use crate::domain::layout::{Alignment, RichDocument};
use crate::domain::license::prose::{self, LicenseProse};
use crate::domain::license::LicenseFields;
use crate::ports::{DocumentRenderer, OutputFormat, RenderContext, RenderError, RenderedDocument};

use super::docx_package;

/// Lays the licence out as a flat run of 12pt paragraphs with one-inch
/// margins and encodes it as `.docx`.
#[derive(Debug, Clone)]
pub struct DocxRenderer {
    fields: LicenseFields,
    context: RenderContext,
}

impl DocxRenderer {
    pub fn new(fields: LicenseFields, context: RenderContext) -> Self {
        Self { fields, context }
    }

    /// Builds the paragraph sequence.
    pub fn build(&self) -> RichDocument {
        let prose = LicenseProse::new(&self.fields, self.context.executed_on);
        let mut doc = RichDocument::new();

        // Cover
        for line in [prose::RESIDENTIAL, prose::AUTHORITY, prose::CITY, prose::COVER_LICENCE] {
            doc.push(line, Alignment::Center);
        }
        doc.push(prose::divider(), Alignment::Center);
        doc.push_blank(1);
        doc.push(prose::divider(), Alignment::Center);
        doc.push_blank(2);

        // Header and recitals
        for line in [prose::AUTHORITY, prose::CITY, prose::LICENCE] {
            doc.push(line, Alignment::Center);
        }
        doc.push(prose.indenture(), Alignment::Justify);
        doc.push(prose.kpt_recital(), Alignment::Justify);
        doc.push(prose.possession_recital(), Alignment::Justify);
        doc.push(prose.transfer_recital(), Alignment::Justify);

        doc.push_page_number(prose::PAGE_NUMBERS[0]);
        doc.push(prose::LICENCE_RECITAL, Alignment::Justify);
        doc.push(prose::WITNESSETH, Alignment::Justify);
        doc.push(prose.operative_clause().tabbed(), Alignment::Justify);
        for condition in prose.conditions() {
            doc.push(condition.tabbed(), Alignment::Justify);
        }

        doc.push_page_number(prose::PAGE_NUMBERS[1]);
        doc.push(prose.arrears_condition().tabbed(), Alignment::Justify);
        for clause in prose.closing_clauses() {
            doc.push(clause.tabbed(), Alignment::Justify);
        }
        doc.push(prose::PROVISO, Alignment::Justify);
        doc.push(prose::SCHEDULE_HEADING, Alignment::Center);
        doc.push(prose.schedule(), Alignment::Justify);

        // Execution page
        doc.push_page_number(prose::PAGE_NUMBERS[2]);
        doc.push_blank(3);
        doc.push(prose::SECRETARY_SIGNATURE, Alignment::Justify);
        doc.push("1.", Alignment::Justify);
        doc.push_blank(2);
        doc.push("2.", Alignment::Justify);
        doc.push_blank(2);
        doc.push(prose::BOARD_MEMBER_SIGNATURE, Alignment::Justify);
        doc.push_blank(5);
        doc.push(prose.witness_block(), Alignment::Justify);

        doc
    }
}

impl DocumentRenderer for DocxRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn context(&self) -> &RenderContext {
        &self.context
    }

    fn generate(&self) -> Result<RenderedDocument, RenderError> {
        Ok(RenderedDocument::Docx(self.build()))
    }

    fn render_bytes(&self) -> Result<Vec<u8>, RenderError> {
        docx_package::encode(&self.build())
            .map_err(|e| RenderError::encoding(OutputFormat::Docx, e.to_string()))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
