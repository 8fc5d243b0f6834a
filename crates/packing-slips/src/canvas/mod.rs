//! Drawing surfaces for the layout engine
//!
//! The layout engine only talks to [`PageCanvas`]. Two surfaces implement it:
//! - [`PdfCanvas`] builds a printpdf document
//! - [`RecordingCanvas`] keeps the operations in memory for inspection

mod pdf;
mod recording;

pub use pdf::*;
pub use recording::*;

use crate::constants::{NARROW_CHAR_WIDTH_RATIO, POINTS_PER_MM, WIDE_CHAR_WIDTH_RATIO, pt_to_mm};
use crate::text::wrap_text;

/// A paginated drawing surface measured in millimetres from the top-left
/// corner. Text is anchored at the baseline of its first line and further
/// lines follow at [`line_height`](Self::line_height) intervals.
pub trait PageCanvas {
    /// Handle of an image registered with the surface
    type Image;

    fn text(&mut self, x_mm: f32, y_mm: f32, lines: &[String]);

    fn line(&mut self, x1_mm: f32, y1_mm: f32, x2_mm: f32, y2_mm: f32);

    fn image(&mut self, image: &Self::Image, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32);

    /// Start a new page; later drawing goes to it
    fn add_page(&mut self);

    fn set_font_size(&mut self, size_pt: f32);

    fn font_size(&self) -> f32;

    /// Distance between consecutive baselines at the current font size
    fn line_height(&self) -> f32;

    /// Rendered width of `text` at the current font size
    fn text_width(&self, text: &str) -> f32;

    fn page_count(&self) -> usize;

    /// Break `text` into lines that fit in `max_width_mm`
    fn split_text_to_size(&self, text: &str, max_width_mm: f32) -> Vec<String> {
        wrap_text(text, max_width_mm, |s| self.text_width(s))
    }

    /// Place a single line of text
    fn text_line(&mut self, x_mm: f32, y_mm: f32, line: &str) {
        self.text(x_mm, y_mm, &[line.to_string()]);
    }
}

/// Line height in millimetres for a font size and spacing factor
pub fn line_height_mm(font_size_pt: f32, factor: f32) -> f32 {
    font_size_pt * factor / POINTS_PER_MM
}

/// Width estimate for surfaces without glyph metrics: half an em for
/// ASCII, a full em for everything else.
pub fn approximate_text_width(text: &str, font_size_pt: f32) -> f32 {
    let ems: f32 = text
        .chars()
        .map(|ch| {
            if ch.is_ascii() {
                NARROW_CHAR_WIDTH_RATIO
            } else {
                WIDE_CHAR_WIDTH_RATIO
            }
        })
        .sum();
    pt_to_mm(ems * font_size_pt)
}
