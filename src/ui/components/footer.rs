//! Footer component renderer.
//!
//! Renders the keybinding hints for the active panel.

use crate::ui::helpers::{center_padding, position_cursor, truncate_end};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at `row`.
///
/// Hints are centered and dimmed. Text wider than the pane is cut at the
/// right edge so it never wraps into the next line.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_end(&footer.keybindings, cols);
    let (left, right) = center_padding(&help_text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(left));
    print!("{help_text}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
    row + 1
}
