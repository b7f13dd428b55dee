//! Header component renderer.

use crate::ui::helpers::{center_padding, position_cursor, truncate_end};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row`, centered and padded to the full width.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```rust
/// use zcalc::ui::components::render_header;
/// use zcalc::ui::viewmodel::HeaderInfo;
/// use zcalc::ui::Theme;
///
/// let header = HeaderInfo { title: " Calculator ".to_string() };
/// let next_row = render_header(1, &header, &Theme::default(), 80);
/// assert_eq!(next_row, 2);
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate_end(&header.title, cols);
    let (left, right) = center_padding(&title, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(left));
    print!("{title}");
    print!("{}", " ".repeat(right));

    print!("{}", Theme::reset());
    row + 1
}
