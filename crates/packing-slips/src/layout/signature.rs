use crate::canvas::PageCanvas;
use crate::constants::SIGNATURE_PADDING_MM;
use crate::cursor::PaginationCursor;
use crate::options::SlipOptions;

/// Shop signature anchored to the bottom limit of the page.
///
/// The block is laid out upwards from the bottom limit. When it does not fit
/// below the cursor it goes to a new page instead. The logo is a square as
/// tall as the block; text starts to its right.
pub(super) fn render<C: PageCanvas>(
    options: &SlipOptions,
    cursor: &mut PaginationCursor,
    canvas: &mut C,
    logo: Option<&C::Image>,
) {
    let signature = &options.signature;
    if logo.is_none() && signature.return_address.is_empty() && signature.links.is_empty() {
        return;
    }

    let line_height = canvas.line_height();
    let text_lines = signature.return_address.len() + signature.links.len() + 1;
    let height = SIGNATURE_PADDING_MM + text_lines as f32 * line_height;

    if cursor.y() + SIGNATURE_PADDING_MM + height > cursor.bottom() {
        canvas.add_page();
        log::debug!("Signature moved to page {}", canvas.page_count());
    }

    let mut x = options.page.left_mm;
    let mut y = cursor.bottom() - height;

    if let Some(logo) = logo {
        canvas.image(logo, x, y, height, height);
    }
    x += height + signature.logo_gap_mm;

    // Lines the first baseline up with the top of the logo
    y += line_height;
    canvas.text(x, y, &signature.return_address);
    y += SIGNATURE_PADDING_MM + signature.return_address.len() as f32 * line_height;

    let (names, urls): (Vec<String>, Vec<String>) = signature
        .links
        .iter()
        .map(|link| (link.name.clone(), link.url.clone()))
        .unzip();
    canvas.text(x, y, &names);
    canvas.text(x + signature.url_offset_mm, y, &urls);

    cursor.set_y(cursor.bottom());
}
