use crate::canvas::PageCanvas;
use crate::options::SlipOptions;
use crate::text::format_postal_code;
use crate::types::{LineItem, OrderGroup};

/// Horizontal space kept free at the right of each grid cell
const CELL_PADDING_MM: f32 = 5.0;

/// Postal code, street address and recipient as printed on a slip header
pub fn address_lines(head: &LineItem) -> Vec<String> {
    vec![
        format_postal_code(&head.postal_code),
        street_address(head),
        recipient(head),
    ]
}

fn street_address(head: &LineItem) -> String {
    format!("{} {}", head.address1, head.address2)
}

fn recipient(head: &LineItem) -> String {
    format!("{} 様", head.recipient_name)
}

/// Draw one address label with its first baseline at `y`
fn place_address<C: PageCanvas>(
    head: &LineItem,
    x: f32,
    mut y: f32,
    max_width: f32,
    options: &SlipOptions,
    canvas: &mut C,
) {
    canvas.text_line(x, y, &format_postal_code(&head.postal_code));
    y += canvas.line_height();

    let street = canvas.split_text_to_size(&street_address(head), max_width);
    canvas.text(x, y, &street);
    y += street.len() as f32 * canvas.line_height();

    let base_size = canvas.font_size();
    canvas.set_font_size(options.address_name_font_size_pt);
    y += canvas.line_height();
    canvas.text_line(x, y, &recipient(head));
    canvas.set_font_size(base_size);
}

/// One address per page
pub(super) fn render_single<C: PageCanvas>(
    groups: &[OrderGroup],
    options: &SlipOptions,
    canvas: &mut C,
) {
    let page = &options.page;
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            canvas.add_page();
        }
        place_address(
            group.head(),
            page.left_mm,
            page.top_mm,
            page.usable_width(),
            options,
            canvas,
        );
    }
}

/// Labels packed `columns` across and `rows` down, filled row by row
pub(super) fn render_grid<C: PageCanvas>(
    groups: &[OrderGroup],
    options: &SlipOptions,
    canvas: &mut C,
) {
    let page = &options.page;
    let grid = &options.address_grid;
    let per_page = grid.cells_per_page();
    let cell_width = page.usable_width() / grid.columns as f32;
    let cell_height = page.usable_height() / grid.rows as f32;

    for (i, group) in groups.iter().enumerate() {
        let cell = i % per_page;
        if cell == 0 && i > 0 {
            canvas.add_page();
        }
        let column = cell % grid.columns;
        let row = cell / grid.columns;

        place_address(
            group.head(),
            page.left_mm + column as f32 * cell_width,
            page.top_mm + row as f32 * cell_height,
            cell_width - CELL_PADDING_MM,
            options,
            canvas,
        );
    }
}
