//! Empty state component renderer.
//!
//! Shown in place of the history list before any calculation has been
//! resolved.

use crate::ui::helpers::{center_padding, position_cursor, truncate_end};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line empty state message starting at `row`.
///
/// The message uses `empty_state_fg`, the subtitle is dimmed `text_dim`.
///
/// # Example
///
/// ```rust
/// use zcalc::ui::components::render_empty_state;
/// use zcalc::ui::viewmodel::EmptyState;
/// use zcalc::ui::Theme;
///
/// let empty = EmptyState {
///     message: "No calculations yet".to_string(),
///     subtitle: "Press = to record one".to_string(),
/// };
/// render_empty_state(8, &empty, &Theme::default(), 80);
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate_end(&empty.message, cols);
    let (left, right) = center_padding(&message, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}{message}{}", " ".repeat(left), " ".repeat(right));
    print!("{}", Theme::reset());

    let subtitle = truncate_end(&empty.subtitle, cols);
    let (left, right) = center_padding(&subtitle, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{subtitle}{}", " ".repeat(left), " ".repeat(right));
    print!("{}", Theme::reset());
}
