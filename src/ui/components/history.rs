//! History panel renderer.

use crate::ui::helpers::{position_cursor, text_width, truncate_end};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HistoryItem;

/// Renders one history line per item, oldest at the top.
///
/// Each line reads `calculation = result` with the age right-aligned.
///
/// ```text
///  12 × 3 = 36                                   2m ago
/// ```
///
/// # Returns
///
/// The row after the last item.
pub fn render_history_items(row: usize, items: &[HistoryItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    for item in items {
        position_cursor(current_row, 1);

        let left = truncate_end(&format!(" {} = {}", item.calculation, item.result), cols);
        let calculation_width = text_width(&item.calculation) + 1;
        let age_width = text_width(&item.age) + 1;
        let gap = cols.saturating_sub(text_width(&left) + age_width);

        print!("{}", Theme::fg(&theme.colors.text_normal));
        let (calculation, result) = split_at_char(&left, calculation_width);
        print!("{calculation}");
        print!("{}", Theme::fg(&theme.colors.history_result_fg));
        print!("{result}");

        if gap > 0 {
            print!("{}", " ".repeat(gap));
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{} ", item.age);
        }
        print!("{}", Theme::reset());

        current_row += 1;
    }

    current_row
}

fn split_at_char(text: &str, index: usize) -> (&str, &str) {
    let byte_index = text
        .char_indices()
        .nth(index)
        .map_or(text.len(), |(i, _)| i);
    text.split_at(byte_index)
}
