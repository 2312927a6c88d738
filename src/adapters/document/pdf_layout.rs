//! Page layout for flow elements: word wrapping, tab stops, justification
//! and pagination against the built-in Helvetica metrics.
//!
//! Coordinates are points with the origin at the bottom-left of the page,
//! matching PDF user space.

use crate::domain::layout::{Alignment, FlowElement, FontWeight, PageGeometry, StyleName};

/// Default tab stop interval, half an inch.
pub const TAB_STOP: f32 = 36.0;

/// One positioned piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub width: f32,
    pub font_size: f32,
    pub weight: FontWeight,
}

/// All text placed on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub runs: Vec<TextRun>,
}

impl LaidOutPage {
    /// Text of the page's runs joined by spaces, for inspection.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Rewrites text into what the built-in fonts can show.
///
/// Line endings become `\n` and soft hyphens are dropped. Everything in the
/// WinAnsi set passes through unchanged; hyphen variants outside it become
/// `-` and any other character becomes `?`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    out.push('\n');
                }
            }
            '\n' | '\t' => out.push(ch),
            '\u{ad}' => {}
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2212}' => out.push('-'),
            c if win_ansi_code(c).is_some() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Code of `ch` in WinAnsiEncoding, if it has one.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => Some(ch as u8),
        '€' => Some(0x80),
        '‚' => Some(0x82),
        'ƒ' => Some(0x83),
        '„' => Some(0x84),
        '…' => Some(0x85),
        '†' => Some(0x86),
        '‡' => Some(0x87),
        'ˆ' => Some(0x88),
        '‰' => Some(0x89),
        'Š' => Some(0x8a),
        '‹' => Some(0x8b),
        'Œ' => Some(0x8c),
        'Ž' => Some(0x8e),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '˜' => Some(0x98),
        '™' => Some(0x99),
        'š' => Some(0x9a),
        '›' => Some(0x9b),
        'œ' => Some(0x9c),
        'ž' => Some(0x9e),
        'Ÿ' => Some(0x9f),
        _ => None,
    }
}

/// Advance width of `text` in points.
pub fn text_width(text: &str, weight: FontWeight, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c, weight)).sum();
    units as f32 * font_size / 1000.0
}

// Helvetica and Helvetica-Bold advance widths for WinAnsi codes 0x20..=0xFF.
// Units are 1/1000 em; unassigned codes carry the bullet width.
const HELVETICA: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, 350, // {..DEL
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350, // 0x80
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

const HELVETICA_BOLD: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584, 350,
    556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

fn glyph_width(ch: char, weight: FontWeight) -> u32 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    win_ansi_code(ch)
        .and_then(|code| table.get(usize::from(code).wrapping_sub(32)))
        .map_or(556, |&width| u32::from(width))
}

/// Lays the flow out onto pages.
///
/// Explicit page breaks always start a new page unless the current page is
/// still empty. A spacer that does not fit ends the page and is discarded.
pub fn layout(flow: &[FlowElement], geometry: PageGeometry) -> Vec<LaidOutPage> {
    let mut cursor = PageCursor::new(geometry);

    for element in flow {
        match element {
            FlowElement::Paragraph { text, style } => cursor.paragraph(text, *style),
            FlowElement::Spacer { height } => cursor.spacer(*height),
            FlowElement::PageBreak => cursor.page_break(),
        }
    }

    cursor.finish()
}

struct PageCursor {
    geometry: PageGeometry,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    y: f32,
}

impl PageCursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: LaidOutPage::default(),
            y: geometry.frame_top(),
        }
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.y = self.geometry.frame_top();
    }

    fn page_break(&mut self) {
        if !self.current.runs.is_empty() {
            self.new_page();
        }
    }

    fn spacer(&mut self, height: f32) {
        if self.y - height < self.geometry.frame_bottom() {
            self.new_page();
        } else {
            self.y -= height;
        }
    }

    fn paragraph(&mut self, text: &str, name: StyleName) {
        let style = name.style();
        let frame_left = self.geometry.margin;
        let frame_width = self.geometry.frame_width();

        let lines = wrap_paragraph(&sanitize(text), name, frame_width);
        for line in lines {
            if self.y - style.leading < self.geometry.frame_bottom() {
                self.new_page();
            }
            self.y -= style.leading;

            for word in line.words {
                self.current.runs.push(TextRun {
                    x: frame_left + line.start + word.offset,
                    y: self.y,
                    text: word.text,
                    width: word.width,
                    font_size: style.font_size,
                    weight: style.weight,
                });
            }
        }

        self.y -= style.space_after;
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        if !self.current.runs.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PlacedWord {
    offset: f32,
    width: f32,
    text: String,
}

/// A finished line: x of its left edge relative to the frame, and words
/// positioned relative to that edge.
#[derive(Debug, Clone, PartialEq)]
struct Line {
    start: f32,
    words: Vec<PlacedWord>,
}

struct LineBuilder {
    start: f32,
    available: f32,
    words: Vec<PlacedWord>,
    cursor: f32,
    pending_space: bool,
    has_tab: bool,
}

impl LineBuilder {
    fn new(start: f32, available: f32) -> Self {
        Self {
            start,
            available,
            words: Vec::new(),
            cursor: 0.0,
            pending_space: false,
            has_tab: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.words.is_empty() && !self.has_tab
    }

    fn finish(self, alignment: Alignment, wrapped: bool) -> Line {
        let mut words = self.words;
        let slack = (self.available - self.cursor).max(0.0);

        match alignment {
            Alignment::Center => {
                for word in &mut words {
                    word.offset += slack / 2.0;
                }
            }
            Alignment::Justify if wrapped && !self.has_tab && words.len() > 1 => {
                let per_gap = slack / (words.len() - 1) as f32;
                for (i, word) in words.iter_mut().enumerate() {
                    word.offset += per_gap * i as f32;
                }
            }
            _ => {}
        }

        Line {
            start: self.start,
            words,
        }
    }
}

enum Token<'a> {
    Word(&'a str),
    Tab,
}

fn tokens(segment: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    for (i, cell) in segment.split('\t').enumerate() {
        if i > 0 {
            out.push(Token::Tab);
        }
        out.extend(cell.split(' ').filter(|w| !w.is_empty()).map(Token::Word));
    }
    out
}

fn wrap_paragraph(text: &str, name: StyleName, frame_width: f32) -> Vec<Line> {
    let style = name.style();
    let size = style.font_size;
    let space = text_width(" ", style.weight, size);

    let first_start = style.left_indent + style.first_line_indent;
    let rest_start = style.left_indent;

    let mut lines = Vec::new();
    let mut first_line = true;

    let new_builder = |first: bool| {
        let start = if first { first_start } else { rest_start };
        LineBuilder::new(start, frame_width - start)
    };

    for segment in text.split('\n') {
        let mut line = new_builder(first_line);
        first_line = false;

        for token in tokens(segment) {
            match token {
                Token::Tab => {
                    let absolute = line.start + line.cursor;
                    let stop = ((absolute / TAB_STOP).floor() + 1.0) * TAB_STOP;
                    if stop - line.start > line.available && !line.is_empty() {
                        lines.push(line.finish(style.alignment, true));
                        line = new_builder(false);
                    } else {
                        line.cursor = stop - line.start;
                    }
                    line.pending_space = false;
                    line.has_tab = true;
                }
                Token::Word(word) => {
                    for piece in split_to_fit(word, style.weight, size, frame_width - rest_start) {
                        let width = text_width(&piece, style.weight, size);
                        let gap = if line.pending_space { space } else { 0.0 };

                        if line.cursor + gap + width > line.available && !line.is_empty() {
                            lines.push(line.finish(style.alignment, true));
                            line = new_builder(false);
                        }

                        let gap = if line.pending_space { space } else { 0.0 };
                        let offset = line.cursor + gap;
                        line.cursor = offset + width;
                        line.pending_space = true;
                        line.words.push(PlacedWord {
                            offset,
                            width,
                            text: piece,
                        });
                    }
                }
            }
        }

        lines.push(line.finish(style.alignment, false));
    }

    lines
}

/// Breaks a word wider than `max_width` into pieces that each fit.
fn split_to_fit(word: &str, weight: FontWeight, size: f32, max_width: f32) -> Vec<String> {
    if text_width(word, weight, size) <= max_width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if !current.is_empty() && text_width(&candidate, weight, size) > max_width {
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::A4;

    fn words(line: &Line) -> Vec<&str> {
        line.words.iter().map(|w| w.text.as_str()).collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Metrics
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn width_uses_helvetica_metrics() {
        // "Hi" = 722 + 222 units
        assert!((text_width("Hi", FontWeight::Regular, 10.0) - 9.44).abs() < 0.001);
        // Bold "Hi" = 722 + 278 units
        assert!((text_width("Hi", FontWeight::Bold, 10.0) - 10.0).abs() < 0.001);
    }

    #[test]
    fn width_covers_latin_1_and_typographic_glyphs() {
        // "é" = 556, "–" = 556, "…" = 1000 units
        assert!((text_width("é–…", FontWeight::Regular, 10.0) - 21.12).abs() < 0.001);
        // Bold curly quotes are 500 units each
        assert!((text_width("“”", FontWeight::Bold, 10.0) - 10.0).abs() < 0.001);
    }

    #[test]
    fn width_tables_cover_every_win_ansi_code() {
        assert_eq!(HELVETICA.len(), 0x100 - 0x20);
        assert_eq!(HELVETICA_BOLD.len(), 0x100 - 0x20);
        assert_eq!(glyph_width('ÿ', FontWeight::Regular), 500);
        assert_eq!(glyph_width('ÿ', FontWeight::Bold), 556);
    }

    #[test]
    fn sanitize_keeps_win_ansi_text() {
        assert_eq!(sanitize("Licence – 'a'"), "Licence – 'a'");
        assert_eq!(sanitize("…………….."), "……………..");
        assert_eq!(sanitize("José Müller “Ñandú” ‘x’ — €"), "José Müller “Ñandú” ‘x’ — €");
    }

    #[test]
    fn sanitize_replaces_only_unencodable_characters() {
        assert_eq!(sanitize("a\u{ad}b"), "ab");
        assert_eq!(sanitize("non\u{2011}breaking"), "non-breaking");
        assert_eq!(sanitize("محمد"), "????");
        assert_eq!(sanitize("Łódź"), "?ód?");
    }

    #[test]
    fn sanitize_normalises_line_endings() {
        assert_eq!(sanitize("one\r\ntwo\rthree"), "one\ntwo\nthree");
    }

    #[test]
    fn crlf_text_wraps_like_lf_text() {
        let crlf = layout(&[FlowElement::paragraph("House 1\r\nKarachi", StyleName::Body)], A4);
        let lf = layout(&[FlowElement::paragraph("House 1\nKarachi", StyleName::Body)], A4);

        assert_eq!(crlf, lf);
        assert!(crlf[0].runs.iter().all(|run| !run.text.contains('\r')));
    }

    // ───────────────────────────────────────────────────────────────
    // Wrapping
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_paragraph("two words", StyleName::PageNumber, 400.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(words(&lines[0]), ["two", "words"]);
        assert_eq!(lines[0].start, 36.0);
    }

    #[test]
    fn long_text_wraps_within_width() {
        let text = "lorem ipsum ".repeat(40);
        let lines = wrap_paragraph(&text, StyleName::Body, 300.0);

        assert!(lines.len() > 1);
        for line in &lines {
            let last = line.words.last().unwrap();
            assert!(line.start + last.offset + last.width <= 300.0 + 0.01);
        }
    }

    #[test]
    fn newline_forces_a_line_break() {
        let lines = wrap_paragraph("one\ntwo", StyleName::Body, 400.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(words(&lines[1]), ["two"]);
    }

    #[test]
    fn body_indents_only_the_first_line() {
        let lines = wrap_paragraph("one\ntwo", StyleName::Body, 400.0);
        assert_eq!(lines[0].start, 36.0);
        assert_eq!(lines[1].start, 0.0);
    }

    #[test]
    fn clause_marker_hangs_and_tab_aligns_text() {
        let lines = wrap_paragraph("(i)\tThe clause", StyleName::Clause, 400.0);

        assert_eq!(lines[0].start, 0.0);
        assert_eq!(lines[0].words[0].offset, 0.0);
        assert_eq!(lines[0].words[1].offset, 36.0);
    }

    #[test]
    fn justified_lines_fill_the_width_except_the_last() {
        let text = "word ".repeat(120);
        let lines = wrap_paragraph(&text, StyleName::Clause, 300.0);

        let full = &lines[1];
        let last_word = full.words.last().unwrap();
        assert!((full.start + last_word.offset + last_word.width - 300.0).abs() < 0.01);

        let tail = lines.last().unwrap();
        let tail_end = tail.words.last().unwrap();
        assert!(tail.start + tail_end.offset + tail_end.width < 300.0);
    }

    #[test]
    fn centered_line_is_balanced() {
        let lines = wrap_paragraph("Title", StyleName::Title, 400.0);
        let word = &lines[0].words[0];
        let left = word.offset;
        let right = 400.0 - (word.offset + word.width);
        assert!((left - right).abs() < 0.01);
    }

    #[test]
    fn oversized_word_is_split() {
        let word = "x".repeat(200);
        let lines = wrap_paragraph(&word, StyleName::PageNumber, 200.0);
        assert!(lines.len() > 1);
        let joined: String = lines.iter().flat_map(|l| l.words.iter()).map(|w| w.text.as_str()).collect();
        assert_eq!(joined, word);
    }

    // ───────────────────────────────────────────────────────────────
    // Pagination
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn page_break_starts_new_page() {
        let flow = vec![
            FlowElement::paragraph("first", StyleName::Body),
            FlowElement::PageBreak,
            FlowElement::paragraph("2", StyleName::PageNumber),
        ];

        let pages = layout(&flow, A4);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].text(), "2");
    }

    #[test]
    fn leading_page_break_does_not_add_blank_page() {
        let flow = vec![
            FlowElement::PageBreak,
            FlowElement::paragraph("only", StyleName::Body),
        ];
        assert_eq!(layout(&flow, A4).len(), 1);
    }

    #[test]
    fn overflowing_text_continues_on_next_page() {
        let text = "overflow ".repeat(2000);
        let pages = layout(&[FlowElement::paragraph(text, StyleName::Body)], A4);

        assert!(pages.len() > 1);
        for page in &pages {
            for run in &page.runs {
                assert!(run.y >= A4.frame_bottom());
                assert!(run.y <= A4.frame_top());
            }
        }
    }

    #[test]
    fn first_baseline_sits_one_leading_below_top_margin() {
        let pages = layout(&[FlowElement::paragraph("2", StyleName::PageNumber)], A4);
        let run = &pages[0].runs[0];
        assert!((run.y - (A4.frame_top() - 14.0)).abs() < 0.01);
        assert!((run.x - (A4.margin + 36.0)).abs() < 0.01);
    }

    #[test]
    fn empty_flow_yields_one_blank_page() {
        let pages = layout(&[], A4);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].runs.is_empty());
    }
}
