//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor positioning and
//! width arithmetic on display text. Widths are counted in characters, not
//! bytes, since labels such as `×` and `√` are multi-byte.
//!
//! # Example
//!
//! ```rust
//! use zcalc::ui::helpers::{center_padding, truncate_start};
//!
//! assert_eq!(center_padding("×", 5), (2, 2));
//! assert_eq!(truncate_start("1234567", 5), "...67");
//! ```

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
///
/// # Example
///
/// ```rust
/// use zcalc::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Left and right padding that centers `text` in `width` columns.
///
/// When the split is uneven the extra column goes to the right.
#[must_use]
pub fn center_padding(text: &str, width: usize) -> (usize, usize) {
    let free = width.saturating_sub(text_width(text));
    let left = free / 2;
    (left, free - left)
}

/// Keeps the last `max_width` characters, marking the cut with `"..."`.
///
/// Widths too small for the marker get the bare tail.
#[must_use]
pub fn truncate_start(text: &str, max_width: usize) -> String {
    let len = text_width(text);
    if len <= max_width {
        return text.to_string();
    }
    if max_width < 3 {
        return text.chars().skip(len - max_width).collect();
    }
    let keep_chars = max_width - 3;
    let tail: String = text.chars().skip(len - keep_chars).collect();
    format!("...{tail}")
}

/// Keeps the first `max_width` characters.
#[must_use]
pub fn truncate_end(text: &str, max_width: usize) -> String {
    text.chars().take(max_width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_start_counts_chars() {
        assert_eq!(truncate_start("12 × 3", 10), "12 × 3");
        assert_eq!(truncate_start("123456 ÷ 789", 8), "...÷ 789");
    }

    #[test]
    fn test_truncate_start_narrower_than_marker() {
        assert_eq!(truncate_start("12 × 3", 2), " 3");
        assert_eq!(truncate_start("12 × 3", 0), "");
        assert_eq!(truncate_start("12 × 3", 3), "...");
    }

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("√ sin cos", 5), "√ sin");
        assert_eq!(truncate_end("q", 5), "q");
    }

    #[test]
    fn test_center_padding_overflow() {
        assert_eq!(center_padding("Calculator", 4), (0, 0));
        assert_eq!(center_padding("sin", 8), (2, 3));
    }
}
