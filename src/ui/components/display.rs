//! Display component renderer.
//!
//! Two right-aligned lines: the pending expression (`12 ×`) above the value
//! being typed or the latest result. A memory marker sits at the left of the
//! expression line while the memory slot holds a value.

use crate::ui::helpers::{position_cursor, text_width, truncate_start};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayInfo;

/// Columns kept free at both edges.
const MARGIN: usize = 1;

/// Width of the memory marker, `M` plus a space.
const MARKER_WIDTH: usize = 2;

/// Renders the display starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_display(row: usize, display: &DisplayInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(2 * MARGIN);

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    if display.memory_is_set {
        print!("{}", Theme::bold());
        print!("{}M ", Theme::fg(&theme.colors.memory_indicator_fg));
        print!("{}", Theme::reset());
    } else {
        print!("{}", " ".repeat(MARKER_WIDTH));
    }
    let expression = truncate_start(&display.expression, inner.saturating_sub(MARKER_WIDTH));
    print!("{}", Theme::fg(&theme.colors.expression_fg));
    print_right_aligned(&expression, inner.saturating_sub(MARKER_WIDTH));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(MARGIN));
    let value = truncate_start(&display.value, inner);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.display_fg));
    print_right_aligned(&value, inner);
    print!("{}", Theme::reset());

    row + 2
}

fn print_right_aligned(text: &str, width: usize) {
    print!("{}{text}", " ".repeat(width.saturating_sub(text_width(text))));
    print!("{}", " ".repeat(MARGIN));
}
