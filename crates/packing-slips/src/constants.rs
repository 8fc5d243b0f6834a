//! Shared constants for slip layout
//!
//! Page geometry and text defaults used throughout the layout engine. All
//! lengths are millimetres measured from the top-left corner of the page
//! unless the name says otherwise.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page Geometry (A4 portrait)
// =============================================================================

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Left edge of all text and rules
pub const MARGIN_LEFT_MM: f32 = 20.0;

/// Right end of horizontal rules
pub const RULE_RIGHT_MM: f32 = 190.0;

/// Baseline of the first line on a slip page
pub const TOP_MM: f32 = 20.0;

/// Last baseline allowed before content moves to the next page
pub const BOTTOM_LIMIT_MM: f32 = 277.0;

// =============================================================================
// Checklist
// =============================================================================

pub const CHECKLIST_TOP_MM: f32 = 25.0;

/// Slightly above the slip limit so the trailing rule still fits
pub const CHECKLIST_BOTTOM_LIMIT_MM: f32 = 274.0;

pub const CHECKLIST_ROW_HEIGHT_MM: f32 = 10.0;

/// Distance from a checklist baseline up to the rule above it
pub const CHECKLIST_RULE_ABOVE_MM: f32 = 6.0;

/// Distance from a checklist baseline down to the rule below it
pub const CHECKLIST_RULE_BELOW_MM: f32 = 3.0;

// =============================================================================
// Text
// =============================================================================

pub const FONT_SIZE_PT: f32 = 10.0;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.5;

/// Wrap width for packing slip item lines
pub const ITEM_TEXT_WIDTH_MM: f32 = 170.0;

pub const ADDRESS_NAME_FONT_SIZE_PT: f32 = 16.0;

/// Approximate advance of a narrow glyph relative to the font size
pub const NARROW_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Approximate advance of a full-width glyph relative to the font size
pub const WIDE_CHAR_WIDTH_RATIO: f32 = 1.0;

/// Glyph advances are expressed per 1000 units of em
pub const GLYPH_UNITS_PER_EM: f32 = 1000.0;

// =============================================================================
// Address Grid
// =============================================================================

pub const ADDRESS_GRID_COLUMNS: usize = 2;
pub const ADDRESS_GRID_ROWS: usize = 5;

// =============================================================================
// Signature Block
// =============================================================================

/// Gap between the logo and the signature text
pub const SIGNATURE_LOGO_GAP_MM: f32 = 13.0;

/// Offset of the URL column from the channel name column
pub const SIGNATURE_URL_OFFSET_MM: f32 = 35.0;

/// Vertical padding above the signature block and between its groups
pub const SIGNATURE_PADDING_MM: f32 = 5.0;

// =============================================================================
// Orders
// =============================================================================

/// Order status meaning the order is paid and waiting for paperwork
pub const READY_TO_SHIP: &str = "発送準備中";

pub const THANK_YOU_TEXT: &str =
    "この度は当ショップをご利用いただきありがとうございます。以下の通り納品させていただきます。";

pub const ITEMS_HEADING: &str = "■ご注文商品■";

/// Resolution assumed when placing raster images
pub const IMAGE_DPI: f32 = 300.0;
