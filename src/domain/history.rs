//! Completed calculation records.
//!
//! A [`HistoryEntry`] is appended every time a pending operation is resolved.
//! Entries are immutable once created; the history is only ever cleared as a
//! whole.

use super::operator::Operator;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// One resolved calculation.
///
/// # Fields
///
/// - `left`: Left operand exactly as it was displayed when the operator was chosen
/// - `operator`: Operator that was resolved
/// - `right`: Right operand as typed, `None` if nothing was typed after the operator
/// - `result`: Formatted result
/// - `evaluated_at`: Unix timestamp of the resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub left: String,
    pub operator: Operator,
    pub right: Option<String>,
    pub result: String,
    pub evaluated_at: i64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcalc::domain::{HistoryEntry, Operator};
    ///
    /// let entry = HistoryEntry::new("3", Operator::Add, Some("4".to_string()), "7");
    /// assert_eq!(entry.description(), "3 add 4");
    /// assert_eq!(entry.result, "7");
    /// ```
    pub fn new(
        left: impl Into<String>,
        operator: Operator,
        right: Option<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator,
            right,
            result: result.into(),
            evaluated_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Describes the calculation as `"<left> <operator> <right>"`.
    ///
    /// The right operand and its separating space are omitted when no right
    /// operand was typed, e.g. `"9 sqrt"`.
    #[must_use]
    pub fn description(&self) -> String {
        self.render(self.operator.name())
    }

    /// Same shape as [`description`](Self::description) but with the keypad
    /// symbol, e.g. `"3 + 4"`.
    #[must_use]
    pub fn display_calculation(&self) -> String {
        self.render(self.operator.symbol())
    }

    fn render(&self, op: &str) -> String {
        match &self.right {
            Some(right) => format!("{} {op} {right}", self.left),
            None => format!("{} {op}", self.left),
        }
    }

    /// Returns a human-readable string describing how long ago the entry was
    /// evaluated.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn time_ago(&self) -> String {
        Self::format_age(chrono::Utc::now().timestamp() - self.evaluated_at)
    }

    fn format_age(diff: i64) -> String {
        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
