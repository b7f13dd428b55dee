//! On-screen keypad layout and mouse hit-testing.
//!
//! The keypad is a grid of four columns. Each button row takes two terminal
//! lines (the button and a gap), starting at [`KEYPAD_TOP`]. The same geometry
//! is used to render buttons and to map mouse clicks back to inputs, so the
//! two can never disagree.
//!
//! ```text
//!  MC    MR    MS    √
//!  sin   cos   tan   x^y
//!  7     8     9     ÷
//!  4     5     6     ×
//!  1     2     3     -
//!  0     .     =     +
//!  Clear       CE
//! ```

use crate::domain::{Digit, Operator};
use crate::engine::Input;

/// Terminal row (1-indexed) of the first keypad row.
pub const KEYPAD_TOP: usize = 7;

/// Terminal lines per button row.
pub const ROW_HEIGHT: usize = 2;

/// Number of grid columns.
pub const COLUMNS: usize = 4;

/// Rows below the panel area: border and footer.
pub const BOTTOM_CHROME_ROWS: usize = 2;

/// Visual category of a button, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Function,
    Memory,
    Equals,
    Clear,
    ClearEntry,
}

/// A keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub kind: ButtonKind,
    pub input: Input,
    /// Number of grid columns the button covers.
    pub span: usize,
}

impl Button {
    const fn new(label: &'static str, kind: ButtonKind, input: Input) -> Self {
        Self {
            label,
            kind,
            input,
            span: 1,
        }
    }

    fn digit(value: u8) -> Option<Self> {
        let digit = Digit::new(value)?;
        Some(Self::new(digit_label(value), ButtonKind::Digit, Input::Digit(digit)))
    }

    const fn operator(operator: Operator, label: &'static str) -> Self {
        let kind = if operator.is_unary() || matches!(operator, Operator::Power) {
            ButtonKind::Function
        } else {
            ButtonKind::Operator
        };
        Self::new(label, kind, Input::Operator(operator))
    }

    const fn wide(mut self) -> Self {
        self.span = 2;
        self
    }
}

const fn digit_label(value: u8) -> &'static str {
    match value {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        _ => "9",
    }
}

fn digit_row(values: [u8; 3], operator: Button) -> Vec<Button> {
    let mut row: Vec<Button> = values.into_iter().filter_map(Button::digit).collect();
    row.push(operator);
    row
}

/// Button rows from top to bottom. Spans in every row add up to [`COLUMNS`].
#[must_use]
pub fn layout() -> Vec<Vec<Button>> {
    vec![
        vec![
            Button::new("MC", ButtonKind::Memory, Input::MemoryClear),
            Button::new("MR", ButtonKind::Memory, Input::MemoryRecall),
            Button::new("MS", ButtonKind::Memory, Input::MemoryStore),
            Button::operator(Operator::Sqrt, "√"),
        ],
        vec![
            Button::operator(Operator::Sin, "sin"),
            Button::operator(Operator::Cos, "cos"),
            Button::operator(Operator::Tan, "tan"),
            Button::operator(Operator::Power, "x^y"),
        ],
        digit_row([7, 8, 9], Button::operator(Operator::Divide, "÷")),
        digit_row([4, 5, 6], Button::operator(Operator::Multiply, "×")),
        digit_row([1, 2, 3], Button::operator(Operator::Subtract, "-")),
        {
            let mut row: Vec<Button> = Button::digit(0).into_iter().collect();
            row.push(Button::new(".", ButtonKind::Digit, Input::Decimal));
            row.push(Button::new("=", ButtonKind::Equals, Input::Evaluate));
            row.push(Button::operator(Operator::Add, "+"));
            row
        },
        vec![
            Button::new("Clear", ButtonKind::Clear, Input::Clear).wide(),
            Button::new("CE", ButtonKind::ClearEntry, Input::ClearEntry).wide(),
        ],
    ]
}

/// Width in terminal columns of one grid column.
#[must_use]
pub const fn column_width(cols: usize) -> usize {
    let width = cols / COLUMNS;
    if width == 0 {
        1
    } else {
        width
    }
}

/// Number of button rows that fit above the footer on a pane `rows` tall.
///
/// Rows that would land on the footer border or below are not drawn.
#[must_use]
pub fn visible_button_rows(rows: usize) -> usize {
    let last_free_row = rows.saturating_sub(BOTTOM_CHROME_ROWS);
    match last_free_row.checked_sub(KEYPAD_TOP) {
        Some(span) => (span / ROW_HEIGHT + 1).min(layout().len()),
        None => 0,
    }
}

/// Maps a click at a 1-indexed terminal `row` and 0-indexed `col` to the input
/// of the button under it, on a pane of `rows` × `cols`.
///
/// Returns `None` for clicks on gaps, outside the grid, on button rows hidden
/// behind the footer, or on narrow panes where the grid does not fit.
///
/// # Examples
///
/// ```
/// use zcalc::engine::Input;
/// use zcalc::ui::keypad::{button_at, KEYPAD_TOP, ROW_HEIGHT};
///
/// // "=" is the third button on the sixth row.
/// let row = KEYPAD_TOP + 5 * ROW_HEIGHT;
/// assert_eq!(button_at(row, 45, 80, 24), Some(Input::Evaluate));
/// assert_eq!(button_at(row + 1, 45, 80, 24), None);
/// ```
#[must_use]
pub fn button_at(row: usize, col: usize, cols: usize, rows: usize) -> Option<Input> {
    let offset = row.checked_sub(KEYPAD_TOP)?;
    if offset % ROW_HEIGHT != 0 || offset / ROW_HEIGHT >= visible_button_rows(rows) {
        return None;
    }

    let width = column_width(cols);
    let grid_column = col / width;
    if grid_column >= COLUMNS {
        return None;
    }

    let buttons = layout().into_iter().nth(offset / ROW_HEIGHT)?;
    let mut start = 0;
    for button in buttons {
        if grid_column < start + button.span {
            return Some(button.input);
        }
        start += button.span;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize) -> usize {
        KEYPAD_TOP + index * ROW_HEIGHT
    }

    #[test]
    fn test_rows_fill_grid() {
        for buttons in layout() {
            let span: usize = buttons.iter().map(|b| b.span).sum();
            assert_eq!(span, COLUMNS);
        }
    }

    #[test]
    fn test_digit_hits() {
        let seven = Digit::new(7).map(Input::Digit);
        assert_eq!(button_at(row(2), 0, 80, 24), seven);
        assert_eq!(button_at(row(5), 19, 80, 24), Digit::new(0).map(Input::Digit));
        assert_eq!(button_at(row(5), 20, 80, 24), Some(Input::Decimal));
    }

    #[test]
    fn test_function_row_hits() {
        assert_eq!(button_at(row(0), 79, 80, 24), Some(Input::Operator(Operator::Sqrt)));
        assert_eq!(button_at(row(1), 60, 80, 24), Some(Input::Operator(Operator::Power)));
        assert_eq!(button_at(row(0), 25, 80, 24), Some(Input::MemoryRecall));
    }

    #[test]
    fn test_wide_buttons() {
        assert_eq!(button_at(row(6), 39, 80, 24), Some(Input::Clear));
        assert_eq!(button_at(row(6), 40, 80, 24), Some(Input::ClearEntry));
    }

    #[test]
    fn test_misses() {
        assert_eq!(button_at(KEYPAD_TOP - 1, 0, 80, 24), None);
        assert_eq!(button_at(row(2) + 1, 0, 80, 24), None);
        assert_eq!(button_at(row(7), 0, 80, 24), None);
        assert_eq!(button_at(row(2), 81, 82, 24), None);
    }

    #[test]
    fn test_short_pane_hides_bottom_rows() {
        // 20 rows: footer at 20, its border at 19, so the last button row
        // that fits is row(5) at 17.
        assert_eq!(visible_button_rows(20), 6);
        assert_eq!(visible_button_rows(21), 7);
        assert_eq!(visible_button_rows(40), 7);
        assert_eq!(visible_button_rows(8), 0);

        assert_eq!(button_at(row(6), 10, 80, 20), None);
        assert_eq!(button_at(row(5), 45, 80, 20), Some(Input::Evaluate));
        assert_eq!(button_at(row(6), 10, 80, 21), Some(Input::Clear));
    }

    #[test]
    fn test_power_is_function_key() {
        let kinds: Vec<_> = layout()[1].iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![ButtonKind::Function; 4]);
    }
}
