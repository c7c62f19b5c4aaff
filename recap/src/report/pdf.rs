use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use super::layout::{wrap_text, Block, ReportLayout, REPORT_TITLE};
use crate::error::{RecapError, Result};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 10.0;
const MARGIN_RIGHT_MM: f32 = 10.0;
const MARGIN_TOP_MM: f32 = 10.0;
/// Automatic page break threshold.
const MARGIN_BOTTOM_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const TITLE_SIZE_PT: f32 = 16.0;
const BODY_SIZE_PT: f32 = 12.0;
const MM_PER_PT: f32 = 0.3528;
/// Average Helvetica advance as a fraction of the font size.
const AVG_CHAR_EM: f32 = 0.5;
const LAYER_NAME: &str = "Layer 1";

fn font_error(error: impl std::fmt::Display) -> RecapError {
    RecapError::Report(format!("Failed to load PDF font: {error}"))
}

/// Characters per line for a font size across the printable width.
pub fn chars_per_line(font_size_pt: f32) -> usize {
    let usable = PAGE_WIDTH_MM - MARGIN_LEFT_MM - MARGIN_RIGHT_MM;
    let char_width = font_size_pt * MM_PER_PT * AVG_CHAR_EM;
    (usable / char_width).floor().max(1.0) as usize
}

/// Map text onto what the built-in Latin-1 fonts can draw.
pub fn to_latin1(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' | '\u{2023}' | '\u{25CF}' => out.push('*'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2002}'..='\u{200A}' => out.push(' '),
            '\t' => out.push_str("    "),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    /// Distance from the top edge of the current page.
    cursor_mm: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            cursor_mm: MARGIN_TOP_MM,
            pages: 1,
        }
    }

    fn ensure_room(&mut self) {
        if self.cursor_mm + LINE_HEIGHT_MM > PAGE_HEIGHT_MM - MARGIN_BOTTOM_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor_mm = MARGIN_TOP_MM;
            self.pages += 1;
        }
    }

    fn line(&mut self, text: &str, size_pt: f32, x_mm: f32, font: &IndirectFontRef) {
        self.ensure_room();
        let baseline = PAGE_HEIGHT_MM - self.cursor_mm - LINE_HEIGHT_MM * 0.65;
        if !text.is_empty() {
            self.layer
                .use_text(text, size_pt, Mm(x_mm), Mm(baseline), font);
        }
        self.cursor_mm += LINE_HEIGHT_MM;
    }

    fn gap(&mut self) {
        self.cursor_mm += LINE_HEIGHT_MM;
    }
}

/// Render a layout into PDF bytes. Returns the bytes and the page count.
pub fn render(layout: &ReportLayout) -> Result<(Vec<u8>, usize)> {
    let (doc, page, layer) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(font_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(font_error)?;

    let first_layer = doc.get_page(page).get_layer(layer);
    let body_width = chars_per_line(BODY_SIZE_PT);

    let pages = {
        let mut writer = PageWriter::new(&doc, first_layer);

        for block in &layout.blocks {
            match block {
                Block::Title(text) => {
                    let text = to_latin1(text);
                    let width =
                        text.chars().count() as f32 * TITLE_SIZE_PT * MM_PER_PT * AVG_CHAR_EM;
                    let x = ((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_LEFT_MM);
                    writer.line(&text, TITLE_SIZE_PT, x, &bold);
                }
                Block::Heading(text) => {
                    writer.line(&to_latin1(text), BODY_SIZE_PT, MARGIN_LEFT_MM, &regular);
                }
                Block::Paragraph(text) => {
                    for line in wrap_text(&to_latin1(text), body_width) {
                        writer.line(&line, BODY_SIZE_PT, MARGIN_LEFT_MM, &regular);
                    }
                }
                Block::Spacer => writer.gap(),
            }
        }

        writer.pages
    };

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| RecapError::Report(format!("Failed to serialize PDF: {e}")))?;

    Ok((bytes, pages))
}
