use crate::constants::*;
use crate::types::*;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which sections the document contains and how address slips are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutVariant {
    /// Checklist, packing slips, then addresses ten to a page
    #[default]
    AddressGrid,
    /// Checklist, packing slips, then one address per page
    AddressSingle,
    /// Checklist, then one slip per order carrying its address and the shop signature
    Interleaved,
    /// Packing slips and single addresses without a checklist
    NoChecklist,
}

impl LayoutVariant {
    pub fn has_checklist(self) -> bool {
        !matches!(self, LayoutVariant::NoChecklist)
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutVariant::AddressGrid => "address-grid",
            LayoutVariant::AddressSingle => "address-single",
            LayoutVariant::Interleaved => "interleaved",
            LayoutVariant::NoChecklist => "no-checklist",
        }
    }
}

/// Line field compared when ordering groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortField {
    OrderId,
    PaymentDate,
    OrderDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Group ordering. Values compare as plain strings, so ids should be
/// zero-padded and dates ISO formatted for the order to be meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortKey {
    pub const ORDER_ID_DESC: SortKey = SortKey::new(SortField::OrderId, SortOrder::Descending);
    pub const PAYMENT_DATE_ASC: SortKey =
        SortKey::new(SortField::PaymentDate, SortOrder::Ascending);
    pub const ORDER_DATE_ASC: SortKey = SortKey::new(SortField::OrderDate, SortOrder::Ascending);

    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::ORDER_ID_DESC
    }
}

/// Usable area of a slip page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Left edge of text and rules
    pub left_mm: f32,
    /// Right end of rules
    pub right_mm: f32,
    /// First baseline on a page
    pub top_mm: f32,
    /// Content past this baseline continues on the next page
    pub bottom_mm: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_mm: PAGE_WIDTH_MM,
            height_mm: PAGE_HEIGHT_MM,
            left_mm: MARGIN_LEFT_MM,
            right_mm: RULE_RIGHT_MM,
            top_mm: TOP_MM,
            bottom_mm: BOTTOM_LIMIT_MM,
        }
    }
}

impl PageGeometry {
    pub fn usable_width(&self) -> f32 {
        self.right_mm - self.left_mm
    }

    pub fn usable_height(&self) -> f32 {
        self.bottom_mm - self.top_mm
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChecklistGeometry {
    pub top_mm: f32,
    pub bottom_mm: f32,
    pub row_height_mm: f32,
}

impl Default for ChecklistGeometry {
    fn default() -> Self {
        Self {
            top_mm: CHECKLIST_TOP_MM,
            bottom_mm: CHECKLIST_BOTTOM_LIMIT_MM,
            row_height_mm: CHECKLIST_ROW_HEIGHT_MM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AddressGridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl Default for AddressGridLayout {
    fn default() -> Self {
        Self {
            columns: ADDRESS_GRID_COLUMNS,
            rows: ADDRESS_GRID_ROWS,
        }
    }
}

impl AddressGridLayout {
    pub fn cells_per_page(&self) -> usize {
        self.columns * self.rows
    }
}

/// A sales channel listed in the signature
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShopLink {
    pub name: String,
    pub url: String,
}

/// Shop signature printed at the foot of interleaved slips
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SignatureOptions {
    /// Return address, one entry per printed line
    pub return_address: Vec<String>,
    pub links: Vec<ShopLink>,
    pub logo_gap_mm: f32,
    pub url_offset_mm: f32,
}

impl Default for SignatureOptions {
    fn default() -> Self {
        Self {
            return_address: Vec::new(),
            links: Vec::new(),
            logo_gap_mm: SIGNATURE_LOGO_GAP_MM,
            url_offset_mm: SIGNATURE_URL_OFFSET_MM,
        }
    }
}

/// Complete slip generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlipOptions {
    // Sections
    pub variant: LayoutVariant,

    // Orders
    pub sort_key: SortKey,
    pub ready_status: String,

    // Geometry
    pub page: PageGeometry,
    pub checklist: ChecklistGeometry,
    pub address_grid: AddressGridLayout,

    // Text
    pub font_size_pt: f32,
    pub line_height_factor: f32,
    pub item_text_width_mm: f32,
    pub address_name_font_size_pt: f32,

    // Interleaved slips
    pub signature: SignatureOptions,
}

impl Default for SlipOptions {
    fn default() -> Self {
        Self {
            variant: LayoutVariant::default(),
            sort_key: SortKey::default(),
            ready_status: READY_TO_SHIP.to_string(),
            page: PageGeometry::default(),
            checklist: ChecklistGeometry::default(),
            address_grid: AddressGridLayout::default(),
            font_size_pt: FONT_SIZE_PT,
            line_height_factor: LINE_HEIGHT_FACTOR,
            item_text_width_mm: ITEM_TEXT_WIDTH_MM,
            address_name_font_size_pt: ADDRESS_NAME_FONT_SIZE_PT,
            signature: SignatureOptions::default(),
        }
    }
}

impl SlipOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| SlipError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SlipError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let page = &self.page;
        if page.width_mm <= 0.0 || page.height_mm <= 0.0 {
            return Err(SlipError::Config("Page size must be positive".to_string()));
        }
        if page.right_mm <= page.left_mm || page.right_mm > page.width_mm {
            return Err(SlipError::Config(
                "Right margin must lie between the left margin and the page edge".to_string(),
            ));
        }
        if page.bottom_mm <= page.top_mm || page.bottom_mm > page.height_mm {
            return Err(SlipError::Config(
                "Bottom limit must lie between the top margin and the page edge".to_string(),
            ));
        }
        if self.checklist.row_height_mm <= 0.0 || self.checklist.bottom_mm <= self.checklist.top_mm
        {
            return Err(SlipError::Config(
                "Checklist rows need a positive height and a usable area".to_string(),
            ));
        }
        if self.address_grid.cells_per_page() == 0 {
            return Err(SlipError::Config(
                "Address grid needs at least one row and one column".to_string(),
            ));
        }
        if self.font_size_pt <= 0.0
            || self.address_name_font_size_pt <= 0.0
            || self.line_height_factor <= 0.0
        {
            return Err(SlipError::Config(
                "Font sizes and line height must be positive".to_string(),
            ));
        }
        if self.item_text_width_mm <= 0.0 {
            return Err(SlipError::Config(
                "Item text width must be positive".to_string(),
            ));
        }
        if self.ready_status.is_empty() {
            return Err(SlipError::Config(
                "Ready-to-ship status must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
