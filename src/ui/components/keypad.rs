//! Keypad component renderer.
//!
//! Draws the button grid using the geometry in [`crate::ui::keypad`], which is
//! also what mouse clicks are hit-tested against.

use crate::ui::helpers::{center_padding, position_cursor, truncate_end};
use crate::ui::keypad::{column_width, visible_button_rows, KEYPAD_TOP, ROW_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{KeyCap, KeypadInfo};

/// Renders the button rows that fit above the footer of a `rows` tall pane.
///
/// Each button fills its grid cells except the last column, which stays blank
/// as a gap between neighbours.
///
/// # Returns
///
/// The row after the last drawn button row.
pub fn render_keypad(keypad: &KeypadInfo, theme: &Theme, cols: usize, rows: usize) -> usize {
    let width = column_width(cols);
    let mut row = KEYPAD_TOP;

    for caps in keypad.rows.iter().take(visible_button_rows(rows)) {
        position_cursor(row, 1);
        for cap in caps {
            render_key(cap, theme, width * cap.span);
        }
        row += ROW_HEIGHT;
    }

    row
}

fn render_key(cap: &KeyCap, theme: &Theme, cell_width: usize) {
    let face_width = cell_width.saturating_sub(1);
    let label = truncate_end(&cap.label, face_width);
    let (left, right) = center_padding(&label, face_width);
    let (fg, bg) = theme.colors.key(cap.kind, cap.is_active);

    print!("{}{}", Theme::fg(fg), Theme::bg(bg));
    if cap.is_active {
        print!("{}", Theme::bold());
    }
    print!("{}{label}{}", " ".repeat(left), " ".repeat(right));
    print!("{}", Theme::reset());
    if cell_width > 0 {
        print!(" ");
    }
}
