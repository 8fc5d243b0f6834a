use super::{PageCanvas, approximate_text_width, line_height_mm};

/// One drawing operation captured by [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x_mm: f32,
        y_mm: f32,
        lines: Vec<String>,
        font_size_pt: f32,
    },
    Line {
        x1_mm: f32,
        y1_mm: f32,
        x2_mm: f32,
        y2_mm: f32,
    },
    Image {
        name: String,
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
    },
}

/// In-memory surface that records operations page by page.
///
/// Widths are estimated from character classes, so wrapping matches a real
/// font closely but not exactly.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    pages: Vec<Vec<DrawOp>>,
    font_size_pt: f32,
    line_height_factor: f32,
}

impl RecordingCanvas {
    /// A canvas with one empty page
    pub fn new(font_size_pt: f32, line_height_factor: f32) -> Self {
        Self {
            pages: vec![Vec::new()],
            font_size_pt,
            line_height_factor,
        }
    }

    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    /// Text lines of one page, in drawing order
    pub fn page_text(&self, page: usize) -> Vec<String> {
        self.pages
            .get(page)
            .into_iter()
            .flatten()
            .filter_map(|op| match op {
                DrawOp::Text { lines, .. } => Some(lines.iter().cloned()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Every text line in the document, in drawing order
    pub fn all_text(&self) -> Vec<String> {
        (0..self.pages.len())
            .flat_map(|page| self.page_text(page))
            .collect()
    }

    /// Index of the first page containing a line that starts with `prefix`
    pub fn find_page(&self, prefix: &str) -> Option<usize> {
        (0..self.pages.len()).find(|&page| {
            self.page_text(page)
                .iter()
                .any(|line| line.starts_with(prefix))
        })
    }

    fn current(&mut self) -> &mut Vec<DrawOp> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl PageCanvas for RecordingCanvas {
    type Image = String;

    fn text(&mut self, x_mm: f32, y_mm: f32, lines: &[String]) {
        if lines.is_empty() {
            return;
        }
        let font_size_pt = self.font_size_pt;
        self.current().push(DrawOp::Text {
            x_mm,
            y_mm,
            lines: lines.to_vec(),
            font_size_pt,
        });
    }

    fn line(&mut self, x1_mm: f32, y1_mm: f32, x2_mm: f32, y2_mm: f32) {
        self.current().push(DrawOp::Line {
            x1_mm,
            y1_mm,
            x2_mm,
            y2_mm,
        });
    }

    fn image(&mut self, image: &String, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) {
        self.current().push(DrawOp::Image {
            name: image.clone(),
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        });
    }

    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn set_font_size(&mut self, size_pt: f32) {
        self.font_size_pt = size_pt;
    }

    fn font_size(&self) -> f32 {
        self.font_size_pt
    }

    fn line_height(&self) -> f32 {
        line_height_mm(self.font_size_pt, self.line_height_factor)
    }

    fn text_width(&self, text: &str) -> f32 {
        approximate_text_width(text, self.font_size_pt)
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
