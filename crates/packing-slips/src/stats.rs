use crate::canvas::RecordingCanvas;
use crate::layout::render_document;
use crate::options::SlipOptions;
use crate::types::*;

/// Statistics about a batch and the document it lays out to
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStatistics {
    /// Orders ready to ship
    pub orders: usize,
    /// Line items across those orders
    pub line_items: usize,
    /// Sum of all order totals in yen
    pub grand_total: i64,
    pub checklist_pages: usize,
    pub slip_pages: usize,
    pub address_pages: usize,
    pub total_pages: usize,
}

/// Calculate statistics by laying the batch out on a [`RecordingCanvas`].
///
/// Page counts use approximate glyph widths and can differ slightly from a
/// document rendered with a real font when item lines wrap.
pub fn calculate_statistics(
    groups: &[OrderGroup],
    options: &SlipOptions,
) -> Result<DocumentStatistics> {
    let mut canvas = RecordingCanvas::new(options.font_size_pt, options.line_height_factor);
    let summary = render_document(groups, options, &mut canvas, None)?;

    Ok(DocumentStatistics {
        orders: groups.len(),
        line_items: groups.iter().map(|group| group.line_items().len()).sum(),
        grand_total: summary.totals.iter().sum(),
        checklist_pages: summary.checklist_pages,
        slip_pages: summary.slip_pages,
        address_pages: summary.address_pages,
        total_pages: summary.total_pages,
    })
}
