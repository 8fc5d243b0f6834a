use super::{address, signature};
use crate::canvas::PageCanvas;
use crate::constants::{ITEMS_HEADING, THANK_YOU_TEXT};
use crate::cursor::PaginationCursor;
use crate::options::SlipOptions;
use crate::types::{LineItem, OrderGroup};

/// Gap below the index label and below the address block
const HEADER_GAP_MM: f32 = 10.0;

/// Gap below the greeting and below the order details
const BLOCK_GAP_MM: f32 = 5.0;

/// Order details printed under the greeting
pub fn header_lines(group: &OrderGroup) -> Vec<String> {
    let head = group.head();
    vec![
        format!("注文番号：{}", group.order_id()),
        format!("お客様ID：{}", head.customer_id),
        format!("ご注文日：{}", head.order_date),
    ]
}

pub fn total_line(total: i64) -> String {
    format!("合計金額：{}円", total)
}

/// Render one slip per group, each starting on a new page. Returns the
/// number of wrapped item lines placed.
pub(super) fn render<C: PageCanvas>(
    groups: &[OrderGroup],
    totals: &[i64],
    options: &SlipOptions,
    canvas: &mut C,
    logo: Option<&C::Image>,
    interleaved: bool,
) -> usize {
    let mut item_lines = 0;
    for (i, (group, total)) in groups.iter().zip(totals).enumerate() {
        if i > 0 {
            canvas.add_page();
        }
        item_lines += render_slip(i + 1, group, *total, options, canvas, logo, interleaved);
    }
    item_lines
}

fn render_slip<C: PageCanvas>(
    index: usize,
    group: &OrderGroup,
    total: i64,
    options: &SlipOptions,
    canvas: &mut C,
    logo: Option<&C::Image>,
    interleaved: bool,
) -> usize {
    let page = &options.page;
    let x = page.left_mm;
    let mut cursor = PaginationCursor::new(page.top_mm, page.bottom_mm);

    canvas.text_line(x, cursor.y(), &format!("【{}件目】", index));
    cursor.advance(HEADER_GAP_MM + canvas.line_height());

    if interleaved {
        let lines = address::address_lines(group.head());
        canvas.text(x, cursor.y(), &lines);
        cursor.advance(HEADER_GAP_MM + lines.len() as f32 * canvas.line_height());
    }

    let greeting = canvas.split_text_to_size(THANK_YOU_TEXT, options.item_text_width_mm);
    canvas.text(x, cursor.y(), &greeting);
    cursor.advance(BLOCK_GAP_MM + greeting.len() as f32 * canvas.line_height());

    let details = header_lines(group);
    canvas.text(x, cursor.y(), &details);
    cursor.advance(BLOCK_GAP_MM + details.len() as f32 * canvas.line_height());

    canvas.text_line(x, cursor.y(), ITEMS_HEADING);
    cursor.advance(canvas.line_height());

    let item_lines = place_items(
        group.line_items(),
        x,
        options.item_text_width_mm,
        &mut cursor,
        canvas,
    );

    canvas.text_line(x, cursor.y(), &total_line(total));

    if interleaved {
        signature::render(options, &mut cursor, canvas, logo);
    }

    item_lines
}

/// Place each item's wrapped description and move to a new page whenever
/// the cursor passes the bottom limit. Returns the number of lines placed.
pub(super) fn place_items<C: PageCanvas>(
    items: &[LineItem],
    x: f32,
    max_width: f32,
    cursor: &mut PaginationCursor,
    canvas: &mut C,
) -> usize {
    let mut placed = 0;
    for item in items {
        let lines = canvas.split_text_to_size(&item.description(), max_width);
        canvas.text(x, cursor.y(), &lines);
        cursor.advance(canvas.line_height() * lines.len() as f32);
        placed += lines.len();

        if cursor.would_overflow() {
            canvas.add_page();
            cursor.reset_for_new_page();
            log::debug!("Item list continues on page {}", canvas.page_count());
        }
    }
    placed
}
