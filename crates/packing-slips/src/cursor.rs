//! Vertical position tracking within one page's usable area

/// Baseline tracker deciding when content has to continue on a new page.
///
/// The cursor knows nothing about content or the physical document. Callers
/// start a new canvas page themselves and then call
/// [`reset_for_new_page`](Self::reset_for_new_page).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationCursor {
    top_mm: f32,
    bottom_mm: f32,
    y_mm: f32,
}

impl PaginationCursor {
    /// Create a cursor positioned at `top_mm`
    pub fn new(top_mm: f32, bottom_mm: f32) -> Self {
        Self {
            top_mm,
            bottom_mm,
            y_mm: top_mm,
        }
    }

    pub fn y(&self) -> f32 {
        self.y_mm
    }

    pub fn top(&self) -> f32 {
        self.top_mm
    }

    pub fn bottom(&self) -> f32 {
        self.bottom_mm
    }

    pub fn advance(&mut self, amount_mm: f32) {
        self.y_mm += amount_mm;
    }

    pub fn set_y(&mut self, y_mm: f32) {
        self.y_mm = y_mm;
    }

    /// True once the cursor has moved past the bottom limit
    pub fn would_overflow(&self) -> bool {
        self.y_mm > self.bottom_mm
    }

    /// Space left above the bottom limit (negative after an overflow)
    pub fn remaining(&self) -> f32 {
        self.bottom_mm - self.y_mm
    }

    pub fn reset_for_new_page(&mut self) {
        self.y_mm = self.top_mm;
    }
}
