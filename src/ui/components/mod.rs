//! Composable UI component renderers.
//!
//! Each component prints one region of the pane at an explicit row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`display`]: Pending expression and current value
//! - [`keypad`]: Button grid
//! - [`history`]: Log of completed calculations
//! - [`empty`]: Empty state message for an empty history
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! 1  [Header]
//! 2  [Border]
//! 3  [M]             12 ×
//! 4                     3
//! 5  [Border]
//! 6
//! 7  [Keypad rows or history lines]
//!    ...
//!    [Border]
//!    [Footer]
//! ```
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::AppState;
//! use zcalc::ui::components::render_layout;
//! use zcalc::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! render_layout(&vm, &state.theme, 80, 24);
//! ```

mod display;
mod empty;
mod footer;
mod header;
mod history;
mod keypad;

pub use empty::render_empty_state;
pub use header::render_header;

use crate::ui::helpers::position_cursor;
use crate::ui::keypad::KEYPAD_TOP;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use display::render_display;
use footer::render_footer;
use history::render_history_items;
use keypad::render_keypad;

/// Renders a horizontal border line at `row` and returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full pane for either panel.
///
/// The footer takes the last row and a border the one above it. The panel
/// area between the display and that border is filled by the keypad or the
/// history, whichever the view model carries.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_display(current_row, &vm.display, theme, cols);
    render_border(current_row, &theme.colors.border, cols);

    if let Some(keypad) = &vm.keypad {
        render_keypad(keypad, theme, cols, rows);
    }

    if let Some(history) = &vm.history {
        match &history.empty_state {
            Some(empty) => render_empty_state(KEYPAD_TOP + 1, empty, theme, cols),
            None => {
                render_history_items(KEYPAD_TOP, &history.items, theme, cols);
            }
        }
    }

    let footer_row = rows.max(2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
