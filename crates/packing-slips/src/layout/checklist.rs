use crate::canvas::PageCanvas;
use crate::constants::{CHECKLIST_RULE_ABOVE_MM, CHECKLIST_RULE_BELOW_MM};
use crate::cursor::PaginationCursor;
use crate::options::SlipOptions;
use crate::types::OrderGroup;

/// Checklist entry for the `index`-th order (1-based)
pub fn checklist_line(index: usize, group: &OrderGroup) -> String {
    format!(
        "【{}件目】 注文番号：{} {} 様",
        index,
        group.order_id(),
        group.head().recipient_name
    )
}

/// One ruled line per order; a new page starts once the cursor passes the
/// checklist limit, checked before each line is placed.
pub(super) fn render<C: PageCanvas>(groups: &[OrderGroup], options: &SlipOptions, canvas: &mut C) {
    let geometry = &options.checklist;
    let (left, right) = (options.page.left_mm, options.page.right_mm);
    let mut cursor = PaginationCursor::new(geometry.top_mm, geometry.bottom_mm);

    for (i, group) in groups.iter().enumerate() {
        if i == 0 || cursor.would_overflow() {
            if i > 0 {
                canvas.add_page();
                log::debug!("Checklist continues on page {}", canvas.page_count());
            }
            cursor.reset_for_new_page();
            let rule_y = cursor.y() - CHECKLIST_RULE_ABOVE_MM;
            canvas.line(left, rule_y, right, rule_y);
        }

        canvas.text_line(left, cursor.y(), &checklist_line(i + 1, group));
        let rule_y = cursor.y() + CHECKLIST_RULE_BELOW_MM;
        canvas.line(left, rule_y, right, rule_y);
        cursor.advance(geometry.row_height_mm);
    }
}
