//! Writes laid-out pages to PDF bytes with the built-in Helvetica faces.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::domain::layout::{FontWeight, PageGeometry};

use super::pdf_layout::LaidOutPage;

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// Encodes `pages` as a PDF document titled `title`.
pub fn write_pdf(
    pages: &[LaidOutPage],
    geometry: PageGeometry,
    title: &str,
) -> Result<Vec<u8>, printpdf::Error> {
    let width = mm(geometry.width);
    let height = mm(geometry.height);
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Page 1");

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (number, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if number == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, format!("Page {}", number + 1))
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for run in &page.runs {
            let font: &IndirectFontRef = match run.weight {
                FontWeight::Regular => &regular,
                FontWeight::Bold => &bold,
            };
            layer.use_text(
                run.text.as_str(),
                run.font_size,
                mm(run.x),
                mm(run.y),
                font,
            );
        }
    }

    doc.save_to_bytes()
}
