//! Input buffer for the operand being typed.
//!
//! The buffer keeps the operand as text so trailing decimal points survive
//! entry (`"3."`). It also owns the entry-mode flag: when `fresh` is set, the
//! next digit or decimal point starts a new operand instead of extending the
//! current one.

use crate::domain::Digit;

/// Text shown when nothing has been typed.
pub const ZERO: &str = "0";

/// The operand currently on display.
///
/// Invariants: the text is never empty and contains at most one decimal point
/// while it is being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    fresh: bool,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    /// Creates a buffer showing `"0"` that is waiting for a new operand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: ZERO.to_string(),
            fresh: true,
        }
    }

    /// Current display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `true` when the next digit starts a new operand.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Enters a digit.
    ///
    /// Starts a new operand in fresh mode. Otherwise appends, except that a
    /// lone `"0"` is replaced rather than extended.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcalc::domain::Digit;
    /// use zcalc::engine::InputBuffer;
    ///
    /// let mut buffer = InputBuffer::new();
    /// for c in ['0', '0', '4', '2'] {
    ///     buffer.push_digit(Digit::from_char(c).unwrap());
    /// }
    /// assert_eq!(buffer.text(), "42");
    /// ```
    pub fn push_digit(&mut self, digit: Digit) {
        if self.fresh {
            self.text = digit.to_string();
            self.fresh = false;
        } else if self.text == ZERO {
            self.text = digit.to_string();
        } else {
            self.text.push(digit.as_char());
        }
        tracing::trace!(buffer = %self.text, "digit entered");
    }

    /// Enters a decimal point.
    ///
    /// Starts `"0."` in fresh mode. Otherwise appends a point unless the
    /// operand already has one, in which case nothing happens.
    pub fn push_decimal(&mut self) {
        if self.fresh {
            self.text = "0.".to_string();
            self.fresh = false;
        } else if self.text.contains('.') {
            tracing::trace!(buffer = %self.text, "decimal point ignored");
            return;
        } else {
            self.text.push('.');
        }
        tracing::trace!(buffer = %self.text, "decimal point entered");
    }

    /// Replaces the text and waits for a new operand.
    ///
    /// Used for results and memory recall, which are shown but not extended.
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.fresh = true;
    }

    /// Resets to `"0"` in fresh mode.
    pub fn reset(&mut self) {
        self.show(ZERO);
    }

    /// Marks the buffer fresh without touching the text.
    ///
    /// Called after an operator press: the displayed operand stays visible
    /// until the first digit of the right operand replaces it.
    pub fn finish_entry(&mut self) {
        self.fresh = true;
    }
}
