//! PDF renderer.
//!
//! Takes the composed contract text and writes a single-page A4 document:
//! Helvetica 12 pt, lines wrapped to the printable width and drawn top to
//! bottom from a fixed start point. Overflow past the bottom margin is left
//! to the drawing library, matching the linear layout this report needs.

use std::io::BufWriter;
use std::path::Path;

use printpdf::*;
use thiserror::Error;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 18.0;
const TOP_START_MM: f32 = 269.0;
const FONT_SIZE_PT: f32 = 12.0;
const LINE_HEIGHT_MM: f32 = 6.0;

/// Wrap budget in characters for Helvetica 12 pt on the printable width.
const WRAP_COLUMNS: usize = 85;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF save error: {0}")]
    Save(String),

    #[error("Cannot write PDF file: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the contract text into PDF bytes.
pub fn render_to_bytes(title: &str, text: &str) -> Result<Vec<u8>, RenderError> {
    let (doc, page1, layer1) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Font(e.to_string()))?;

    let mut y = Mm(TOP_START_MM);
    for raw_line in text.lines() {
        if raw_line.is_empty() {
            y -= Mm(LINE_HEIGHT_MM);
            continue;
        }
        for line in wrap_text(raw_line, WRAP_COLUMNS) {
            layer.use_text(&line, FONT_SIZE_PT, Mm(MARGIN_LEFT_MM), y, &font);
            y -= Mm(LINE_HEIGHT_MM);
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| RenderError::Save(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| RenderError::Save(e.to_string()))
}

/// Renders the contract text and writes it to `path`.
pub fn render_to_file(title: &str, text: &str, path: &Path) -> Result<(), RenderError> {
    let bytes = render_to_bytes(title, text)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Simple word-wrap on whitespace boundaries.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.chars().count() + word.chars().count() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
