//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` from a
//! calculator snapshot and consumed by the renderer. They contain no business
//! logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use zcalc::ui::viewmodel::{DisplayInfo, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Calculator ".to_string() },
//!     display: DisplayInfo {
//!         expression: "3 +".to_string(),
//!         value: "4".to_string(),
//!         memory_is_set: false,
//!     },
//!     keypad: None,
//!     history: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(vm.keypad.is_none());
//! ```

use crate::ui::keypad::ButtonKind;

/// Complete UI view model for rendering.
///
/// Exactly one of `keypad` and `history` is set by `compute_viewmodel`,
/// depending on the active panel.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Pending expression and current value.
    pub display: DisplayInfo,

    /// Button grid, when the keypad panel is shown.
    pub keypad: Option<KeypadInfo>,

    /// Calculation log, when the history panel is shown.
    pub history: Option<HistoryPanel>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// The calculator's display area.
#[derive(Debug, Clone)]
pub struct DisplayInfo {
    /// Pending left operand and operator symbol, e.g. `"12 ×"`. Empty when idle.
    pub expression: String,

    /// Operand being typed or the latest result.
    pub value: String,

    /// Whether the memory slot holds a value.
    pub memory_is_set: bool,
}

/// Button grid ready for rendering.
#[derive(Debug, Clone)]
pub struct KeypadInfo {
    pub rows: Vec<Vec<KeyCap>>,
}

/// One rendered keypad button.
#[derive(Debug, Clone)]
pub struct KeyCap {
    pub label: String,
    pub kind: ButtonKind,
    /// Number of grid columns covered.
    pub span: usize,
    /// Whether this is the pending operator's button.
    pub is_active: bool,
}

/// History panel contents.
#[derive(Debug, Clone)]
pub struct HistoryPanel {
    /// Visible slice of the history, oldest first.
    pub items: Vec<HistoryItem>,

    /// Total number of entries, including those scrolled out of view.
    pub total: usize,

    /// Message shown instead of items when the history is empty.
    pub empty_state: Option<EmptyState>,
}

/// One rendered history line.
#[derive(Debug, Clone)]
pub struct HistoryItem {
    /// Calculation with keypad symbols, e.g. `"3 + 4"`.
    pub calculation: String,

    pub result: String,

    /// Relative age, e.g. `"5m ago"`.
    pub age: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No calculations yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
