use super::{PageCanvas, approximate_text_width, line_height_mm};
use crate::constants::{GLYPH_UNITS_PER_EM, IMAGE_DPI, mm_to_pt, pt_to_mm};
use crate::options::SlipOptions;
use crate::types::{Result, SlipError};
use printpdf::*;

/// Stroke width of rules, matching a 0.2mm pen
const RULE_WIDTH_PT: f32 = 0.567;

enum CanvasFont {
    Builtin(BuiltinFont),
    Parsed { id: FontId, font: Box<ParsedFont> },
}

/// Logo registered with a [`PdfCanvas`]
#[derive(Debug, Clone)]
pub struct PdfImage {
    id: XObjectId,
    width_px: usize,
    height_px: usize,
}

impl PdfImage {
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width_px, self.height_px)
    }
}

/// printpdf-backed surface.
///
/// Operations are collected per page and turned into a document by
/// [`finish`](Self::finish).
pub struct PdfCanvas {
    doc: PdfDocument,
    pages: Vec<Vec<Op>>,
    font: CanvasFont,
    font_size_pt: f32,
    line_height_factor: f32,
    page_width_mm: f32,
    page_height_mm: f32,
}

impl PdfCanvas {
    /// Create a document with one empty page.
    ///
    /// `font_bytes` should be a TrueType/OpenType font covering Japanese;
    /// without it the builtin Helvetica is used, which cannot show kana or
    /// kanji.
    pub fn new(title: &str, options: &SlipOptions, font_bytes: Option<&[u8]>) -> Result<Self> {
        let mut doc = PdfDocument::new(title);

        let font = match font_bytes {
            Some(bytes) => {
                let mut font_warnings = Vec::new();
                let font = ParsedFont::from_bytes(bytes, 0, &mut font_warnings)
                    .ok_or_else(|| SlipError::Pdf("Failed to parse font".to_string()))?;
                let id = doc.add_font(&font);
                CanvasFont::Parsed {
                    id,
                    font: Box::new(font),
                }
            }
            None => {
                log::warn!("No font supplied, falling back to Helvetica");
                CanvasFont::Builtin(BuiltinFont::Helvetica)
            }
        };

        let mut canvas = Self {
            doc,
            pages: Vec::new(),
            font,
            font_size_pt: options.font_size_pt,
            line_height_factor: options.line_height_factor,
            page_width_mm: options.page.width_mm,
            page_height_mm: options.page.height_mm,
        };
        canvas.add_page();
        Ok(canvas)
    }

    /// Decode a JPEG or PNG and register it for [`PageCanvas::image`]
    pub fn add_image(&mut self, bytes: &[u8]) -> Result<PdfImage> {
        let mut warnings = Vec::new();
        let image = RawImage::decode_from_bytes(bytes, &mut warnings)
            .map_err(|e| SlipError::Asset(format!("Failed to decode image: {}", e)))?;
        let (width_px, height_px) = (image.width, image.height);
        let id = self.doc.add_image(&image);
        Ok(PdfImage {
            id,
            width_px,
            height_px,
        })
    }

    /// Serialise the document
    pub fn finish(mut self) -> Vec<u8> {
        let (width, height) = (Mm(self.page_width_mm), Mm(self.page_height_mm));
        self.doc.pages = self
            .pages
            .into_iter()
            .map(|ops| PdfPage::new(width, height, ops))
            .collect();

        let mut warnings = Vec::new();
        self.doc.save(&PdfSaveOptions::default(), &mut warnings)
    }

    fn point(&self, x_mm: f32, y_mm: f32) -> Point {
        Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(self.page_height_mm - y_mm).into_pt(),
        }
    }

    fn current(&mut self) -> &mut Vec<Op> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn text_ops(&self, x_mm: f32, y_mm: f32, line: &str) -> Vec<Op> {
        let origin = self.point(x_mm, y_mm);
        let size = Pt(self.font_size_pt);
        let matrix = TextMatrix::Translate(origin.x, origin.y);
        let items = vec![TextItem::Text(line.to_string())];

        match &self.font {
            CanvasFont::Parsed { id, .. } => vec![
                Op::StartTextSection,
                Op::SetFontSize {
                    font: id.clone(),
                    size,
                },
                Op::SetTextMatrix { matrix },
                Op::WriteText {
                    items,
                    font: id.clone(),
                },
                Op::EndTextSection,
            ],
            CanvasFont::Builtin(font) => vec![
                Op::StartTextSection,
                Op::SetFontSizeBuiltinFont {
                    font: font.clone(),
                    size,
                },
                Op::SetTextMatrix { matrix },
                Op::WriteTextBuiltinFont {
                    items,
                    font: font.clone(),
                },
                Op::EndTextSection,
            ],
        }
    }
}

impl PageCanvas for PdfCanvas {
    type Image = PdfImage;

    fn text(&mut self, x_mm: f32, y_mm: f32, lines: &[String]) {
        let line_height = self.line_height();
        let mut ops = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            ops.extend(self.text_ops(x_mm, y_mm + i as f32 * line_height, line));
        }
        self.current().extend(ops);
    }

    fn line(&mut self, x1_mm: f32, y1_mm: f32, x2_mm: f32, y2_mm: f32) {
        let points = vec![
            LinePoint {
                p: self.point(x1_mm, y1_mm),
                bezier: false,
            },
            LinePoint {
                p: self.point(x2_mm, y2_mm),
                bezier: false,
            },
        ];
        self.current().push(Op::DrawLine {
            line: Line {
                points,
                is_closed: false,
            },
        });
    }

    fn image(&mut self, image: &PdfImage, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) {
        // Natural size of the image when placed at IMAGE_DPI
        let natural_width_pt = image.width_px as f32 * 72.0 / IMAGE_DPI;
        let natural_height_pt = image.height_px as f32 * 72.0 / IMAGE_DPI;
        if natural_width_pt <= 0.0 || natural_height_pt <= 0.0 {
            log::warn!("Skipping empty image");
            return;
        }

        // XObjects are anchored at their bottom-left corner
        let anchor = self.point(x_mm, y_mm + height_mm);
        let transform = XObjectTransform {
            translate_x: Some(anchor.x),
            translate_y: Some(anchor.y),
            scale_x: Some(Mm(width_mm).into_pt().0 / natural_width_pt),
            scale_y: Some(Mm(height_mm).into_pt().0 / natural_height_pt),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        };
        let id = image.id.clone();
        self.current().push(Op::UseXobject { id, transform });
    }

    fn add_page(&mut self) {
        self.pages.push(vec![Op::SetOutlineThickness {
            pt: Pt(RULE_WIDTH_PT),
        }]);
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
        match &self.font {
            CanvasFont::Parsed { font, .. } => {
                let mut width_pt = 0.0;
                for ch in text.chars() {
                    match font.lookup_glyph_index(ch as u32) {
                        Some(glyph_id) => {
                            let advance = font.get_horizontal_advance(glyph_id);
                            width_pt += (advance as f32 / GLYPH_UNITS_PER_EM) * self.font_size_pt;
                        }
                        None => {
                            let mut buf = [0u8; 4];
                            width_pt += mm_to_pt(approximate_text_width(
                                ch.encode_utf8(&mut buf),
                                self.font_size_pt,
                            ));
                        }
                    }
                }
                pt_to_mm(width_pt)
            }
            CanvasFont::Builtin(_) => approximate_text_width(text, self.font_size_pt),
        }
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
