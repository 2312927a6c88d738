//! Office Open XML packaging for `RichDocument`.
//!
//! Writes the minimum part set Word needs to open a document. Zip entries
//! carry a fixed timestamp so identical documents encode to identical
//! bytes.

use quick_xml::escape::escape;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::layout::{Alignment, RichDocument, RichParagraph};

const TWIPS_PER_INCH: f32 = 1440.0;

// US Letter, the word processor's default page.
const PAGE_WIDTH_TWIPS: u32 = 12240;
const PAGE_HEIGHT_TWIPS: u32 = 15840;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="24"/><w:szCs w:val="24"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style></w:styles>"#;

const CORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>Licence 'a'</dc:title><dc:creator>Pakistan Defence Officers Housing Authority</dc:creator></cp:coreProperties>"#;

/// Failures while building the zip container.
#[derive(Debug, Error)]
pub enum DocxPackageError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes the document as a `.docx` package.
pub fn encode(document: &RichDocument) -> Result<Vec<u8>, DocxPackageError> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let body = document_xml(document);
    let parts: [(&str, &str); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", PACKAGE_RELS_XML),
        ("word/document.xml", &body),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
        ("word/styles.xml", STYLES_XML),
        ("docProps/core.xml", CORE_XML),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

/// The `word/document.xml` part.
pub fn document_xml(document: &RichDocument) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );

    for paragraph in &document.paragraphs {
        push_paragraph(&mut xml, paragraph);
    }

    let margin = (document.margin_inches * TWIPS_PER_INCH).round() as u32;
    xml.push_str(&format!(
        r#"<w:sectPr><w:pgSz w:w="{PAGE_WIDTH_TWIPS}" w:h="{PAGE_HEIGHT_TWIPS}"/><w:pgMar w:top="{margin}" w:right="{margin}" w:bottom="{margin}" w:left="{margin}" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#
    ));
    xml
}

fn push_paragraph(xml: &mut String, paragraph: &RichParagraph) {
    xml.push_str("<w:p><w:pPr>");
    if paragraph.page_break_before {
        xml.push_str("<w:pageBreakBefore/>");
    }
    xml.push_str(&format!(
        r#"<w:jc w:val="{}"/></w:pPr>"#,
        justification(paragraph.alignment)
    ));

    if !paragraph.text.is_empty() {
        // Word sizes are half-points.
        let half_points = u32::from(paragraph.font_size_pt) * 2;
        xml.push_str(&format!(
            r#"<w:r><w:rPr><w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr>"#
        ));
        push_runs(xml, &paragraph.text);
        xml.push_str("</w:r>");
    }

    xml.push_str("</w:p>");
}

/// Splits text on tabs and line endings, which Word represents as elements.
///
/// `\r\n` and a lone `\r` both count as one line break.
fn push_runs(xml: &mut String, text: &str) {
    let mut pending = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\t' => {
                flush_text(xml, &mut pending);
                xml.push_str("<w:tab/>");
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                flush_text(xml, &mut pending);
                xml.push_str("<w:br/>");
            }
            _ => pending.push(ch),
        }
    }
    flush_text(xml, &mut pending);
}

fn flush_text(xml: &mut String, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&escape(pending.as_str()));
    xml.push_str("</w:t>");
    pending.clear();
}

fn justification(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Justify => "both",
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample_document() -> RichDocument {
        let mut doc = RichDocument::new();
        doc.push("Heading", Alignment::Center);
        doc.push("1.\tClause <one> & more\nsecond line", Alignment::Justify);
        doc.push_page_number("2");
        doc.push_blank(1);
        doc
    }

    // ───────────────────────────────────────────────────────────────
    // document.xml
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn tabs_and_newlines_become_elements() {
        let xml = document_xml(&sample_document());
        assert!(xml.contains(
            r#"<w:t xml:space="preserve">1.</w:t><w:tab/><w:t xml:space="preserve">Clause &lt;one&gt; &amp; more</w:t><w:br/><w:t xml:space="preserve">second line</w:t>"#
        ));
    }

    #[test]
    fn carriage_returns_become_single_breaks() {
        let mut crlf = RichDocument::new();
        crlf.push("House 1\r\nPhase 6\rKarachi", Alignment::Left);
        let mut lf = RichDocument::new();
        lf.push("House 1\nPhase 6\nKarachi", Alignment::Left);

        let xml = document_xml(&crlf);
        assert_eq!(xml, document_xml(&lf));
        assert_eq!(xml.matches("<w:br/>").count(), 2);
        assert!(!xml.contains('\r'));
    }

    #[test]
    fn alignment_maps_to_justification() {
        let xml = document_xml(&sample_document());
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
        assert!(xml.contains(r#"<w:jc w:val="left"/>"#));
    }

    #[test]
    fn runs_use_twelve_point_text() {
        let xml = document_xml(&sample_document());
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
    }

    #[test]
    fn page_numbers_break_the_page() {
        let xml = document_xml(&sample_document());
        assert_eq!(xml.matches("<w:pageBreakBefore/>").count(), 1);
    }

    #[test]
    fn margins_are_one_inch() {
        let xml = document_xml(&sample_document());
        assert!(xml.contains(r#"w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#));
    }

    #[test]
    fn empty_paragraph_has_no_run() {
        let mut doc = RichDocument::new();
        doc.push_blank(1);
        let xml = document_xml(&doc);
        assert!(xml.contains(r#"<w:p><w:pPr><w:jc w:val="both"/></w:pPr></w:p>"#));
        assert!(!xml.contains("<w:r>"));
    }

    // ───────────────────────────────────────────────────────────────
    // Package
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn package_contains_required_parts() {
        let bytes = encode(&sample_document()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "docProps/core.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }

        let mut body = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, document_xml(&sample_document()));
    }

    #[test]
    fn encoding_is_deterministic() {
        let doc = sample_document();
        assert_eq!(encode(&doc).unwrap(), encode(&doc).unwrap());
    }
}
