//! Paginated document layout
//!
//! The document is a fixed sequence of sections, each starting on its own
//! page:
//! - checklist: one ruled line per order
//! - packing slips: one or more pages per order
//! - address slips: one per page or a grid of labels
//!
//! Which sections appear, and whether slips carry the address and shop
//! signature themselves, depends on the [`LayoutVariant`].

mod address;
mod checklist;
mod packing;
mod signature;

pub use address::address_lines;
pub use checklist::checklist_line;
pub use packing::{header_lines, total_line};

use crate::canvas::PageCanvas;
use crate::options::{LayoutVariant, SlipOptions};
use crate::types::{OrderGroup, Result};

/// What the layout produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSummary {
    pub total_pages: usize,
    pub checklist_pages: usize,
    pub slip_pages: usize,
    pub address_pages: usize,
    pub orders: usize,
    /// Wrapped item lines placed across all packing slips
    pub item_lines: usize,
    /// Order totals in yen, in document order
    pub totals: Vec<i64>,
}

/// Tracks section boundaries on a shared canvas
struct SectionOpener {
    opened: bool,
}

impl SectionOpener {
    /// Move to a fresh page for the next section and return its index.
    /// The first section uses the page the canvas starts with.
    fn open<C: PageCanvas>(&mut self, canvas: &mut C) -> usize {
        if self.opened {
            canvas.add_page();
        }
        self.opened = true;
        canvas.page_count() - 1
    }
}

fn pages_since<C: PageCanvas>(canvas: &C, start: usize) -> usize {
    canvas.page_count() - start
}

/// Lay out the whole document for `groups` on `canvas`.
///
/// The options are validated and every order total is computed before
/// anything is drawn, so a bad configuration or an invalid subtotal fails
/// the call without leaving a partial layout behind.
/// An empty `groups` still opens each section's page.
pub fn render_document<C: PageCanvas>(
    groups: &[OrderGroup],
    options: &SlipOptions,
    canvas: &mut C,
    logo: Option<&C::Image>,
) -> Result<LayoutSummary> {
    options.validate()?;
    let totals = groups
        .iter()
        .map(OrderGroup::total)
        .collect::<Result<Vec<_>>>()?;

    canvas.set_font_size(options.font_size_pt);

    let mut sections = SectionOpener { opened: false };
    let mut summary = LayoutSummary {
        orders: groups.len(),
        ..Default::default()
    };

    if options.variant.has_checklist() {
        let start = sections.open(canvas);
        checklist::render(groups, options, canvas);
        summary.checklist_pages = pages_since(canvas, start);
    }

    let interleaved = options.variant == LayoutVariant::Interleaved;
    let start = sections.open(canvas);
    summary.item_lines = packing::render(groups, &totals, options, canvas, logo, interleaved);
    summary.slip_pages = pages_since(canvas, start);

    match options.variant {
        LayoutVariant::AddressGrid => {
            let start = sections.open(canvas);
            address::render_grid(groups, options, canvas);
            summary.address_pages = pages_since(canvas, start);
        }
        LayoutVariant::AddressSingle | LayoutVariant::NoChecklist => {
            let start = sections.open(canvas);
            address::render_single(groups, options, canvas);
            summary.address_pages = pages_since(canvas, start);
        }
        LayoutVariant::Interleaved => {}
    }

    summary.total_pages = canvas.page_count();
    summary.totals = totals;

    log::info!(
        "Laid out {} orders on {} pages ({})",
        summary.orders,
        summary.total_pages,
        options.variant.name()
    );
    Ok(summary)
}
