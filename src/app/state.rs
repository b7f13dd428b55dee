//! Application state management and view model computation.
//!
//! [`AppState`] wraps the calculator core with presentation-only state: the
//! visible panel, the history scroll position and the theme. View models are
//! computed on demand from a calculator snapshot.
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::AppState;
//! use zcalc::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display.value, "0");
//! ```

use super::modes::PanelMode;
use crate::engine::{Calculator, Input, Snapshot};
use crate::ui::helpers::truncate_start;
use crate::ui::keypad::{self, BOTTOM_CHROME_ROWS, KEYPAD_TOP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayInfo, EmptyState, FooterInfo, HeaderInfo, HistoryItem, HistoryPanel, KeyCap,
    KeypadInfo, UIViewModel,
};

/// Central application state container.
///
/// Mutated by the event handler in response to user input. The calculator is
/// the single source of truth for everything that affects results.
#[derive(Debug)]
pub struct AppState {
    /// The calculation core.
    pub calculator: Calculator,

    /// Panel shown below the display.
    pub panel: PanelMode,

    /// How many entries the history view is scrolled up from the newest one.
    pub history_offset: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle calculator showing the keypad.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            calculator: Calculator::new(),
            panel: PanelMode::Keypad,
            history_offset: 0,
            theme,
        }
    }

    /// Scrolls the history view one entry towards older calculations.
    ///
    /// Stops when the oldest entry is at the top of the view.
    pub fn scroll_history_up(&mut self) -> bool {
        let max_offset = self.calculator.history().len().saturating_sub(1);
        if self.history_offset >= max_offset {
            return false;
        }
        self.history_offset += 1;
        true
    }

    /// Scrolls the history view one entry towards newer calculations.
    pub fn scroll_history_down(&mut self) -> bool {
        if self.history_offset == 0 {
            return false;
        }
        self.history_offset -= 1;
        true
    }

    /// Computes a renderable UI view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let snapshot = self.calculator.snapshot();

        let (keypad, history) = match self.panel {
            PanelMode::Keypad => (Some(Self::compute_keypad(&snapshot)), None),
            PanelMode::History => (None, Some(self.compute_history(&snapshot, rows, cols))),
        };

        UIViewModel {
            header: self.compute_header(&snapshot),
            display: Self::compute_display(&snapshot),
            keypad,
            history,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self, snapshot: &Snapshot) -> HeaderInfo {
        let title = match self.panel {
            PanelMode::Keypad => " Calculator ".to_string(),
            PanelMode::History => format!(" History ({}) ", snapshot.history.len()),
        };
        HeaderInfo { title }
    }

    fn compute_display(snapshot: &Snapshot) -> DisplayInfo {
        let expression = match (&snapshot.pending_left_operand, snapshot.pending_operator) {
            (Some(left), Some(operator)) => format!("{left} {}", operator.symbol()),
            _ => String::new(),
        };

        DisplayInfo {
            expression,
            value: snapshot.display_value.clone(),
            memory_is_set: snapshot.memory_is_set,
        }
    }

    fn compute_keypad(snapshot: &Snapshot) -> KeypadInfo {
        let active = snapshot.pending_operator.map(Input::Operator);

        let rows = keypad::layout()
            .into_iter()
            .map(|buttons| {
                buttons
                    .into_iter()
                    .map(|button| KeyCap {
                        label: button.label.to_string(),
                        kind: button.kind,
                        span: button.span,
                        is_active: active == Some(button.input),
                    })
                    .collect()
            })
            .collect();

        KeypadInfo { rows }
    }

    /// Computes the visible window of the history log.
    ///
    /// The window ends `history_offset` entries before the newest one and holds
    /// as many entries as fit between the display and the footer. Calculations
    /// wider than half the pane are truncated from the start.
    fn compute_history(&self, snapshot: &Snapshot, rows: usize, cols: usize) -> HistoryPanel {
        let total = snapshot.history.len();

        if total == 0 {
            return HistoryPanel {
                items: vec![],
                total,
                empty_state: Some(EmptyState {
                    message: "No calculations yet".to_string(),
                    subtitle: "Results appear here after = or a chained operator".to_string(),
                }),
            };
        }

        let available_rows = rows.saturating_sub(KEYPAD_TOP - 1 + BOTTOM_CHROME_ROWS);
        let visible_end = total - self.history_offset.min(total - 1);
        let visible_start = visible_end.saturating_sub(available_rows);

        let items = snapshot.history[visible_start..visible_end]
            .iter()
            .map(|entry| HistoryItem {
                calculation: truncate_start(&entry.display_calculation(), cols / 2),
                result: entry.result.clone(),
                age: entry.time_ago(),
            })
            .collect();

        HistoryPanel {
            items,
            total,
            empty_state: None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.panel {
            PanelMode::Keypad => {
                "0-9 . + - * / ^  Enter: =  Esc: clear  Bksp: CE  v/s/c/t: √ sin cos tan  S/R/X: memory  h: history  q: quit"
            }
            PanelMode::History => "Up/Down: scroll  H: clear history  h: keypad  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
