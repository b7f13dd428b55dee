//! Event handling and state transition logic.
//!
//! This module processes user input already translated by the plugin shim
//! (keys, mouse clicks) and turns it into state changes and actions.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Calculator inputs are dispatched to the engine; panel events mutate
//!    presentation state on `AppState`
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use zcalc::app::{handle_event, AppState, Event};
//! use zcalc::domain::Digit;
//! use zcalc::engine::Input;
//! use zcalc::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let digit = Digit::new(4).unwrap();
//! let (should_render, actions) = handle_event(&mut state, &Event::Calculator(Input::Digit(digit)));
//! assert!(should_render);
//! assert!(actions.is_empty());
//! ```

use crate::app::{Action, AppState};
use crate::engine::Input;

/// Events triggered by user input.
///
/// Each event is handled to completion before the next one is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Forwards an input to the calculator core.
    Calculator(Input),
    /// Switches between the keypad and the history panel.
    ToggleHistory,
    /// Scrolls the history panel towards older entries.
    ScrollHistoryUp,
    /// Scrolls the history panel towards newer entries.
    ScrollHistoryDown,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs to be redrawn and the side
/// effects to perform, in order.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Calculator(input) => {
            let changed = state.calculator.dispatch(*input);
            if changed && *input == Input::HistoryClear {
                state.history_offset = 0;
            }
            (changed, vec![])
        }
        Event::ToggleHistory => {
            state.panel = state.panel.toggled();
            state.history_offset = 0;
            tracing::debug!(panel = ?state.panel, "panel toggled");
            (true, vec![])
        }
        Event::ScrollHistoryUp => (state.scroll_history_up(), vec![]),
        Event::ScrollHistoryDown => (state.scroll_history_down(), vec![]),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PanelMode;
    use crate::domain::{Digit, Operator};
    use crate::ui::Theme;

    fn digit(n: u8) -> Event {
        Event::Calculator(Input::Digit(Digit::new(n).unwrap()))
    }

    #[test]
    fn test_noop_input_skips_render() {
        let mut state = AppState::new(Theme::default());
        let (render, _) = handle_event(&mut state, &Event::Calculator(Input::Evaluate));
        assert!(!render);
    }

    #[test]
    fn test_close_focus_emits_action() {
        let mut state = AppState::new(Theme::default());
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus);
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn test_toggle_history_keeps_calculation() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &digit(2));
        handle_event(&mut state, &Event::Calculator(Input::Operator(Operator::Add)));
        handle_event(&mut state, &Event::ToggleHistory);

        assert_eq!(state.panel, PanelMode::History);
        assert_eq!(state.calculator.display(), "2");
        assert!(state.calculator.pending().is_some());
    }

    #[test]
    fn test_history_clear_resets_scroll() {
        let mut state = AppState::new(Theme::default());
        for _ in 0..3 {
            handle_event(&mut state, &digit(1));
            handle_event(&mut state, &Event::Calculator(Input::Operator(Operator::Add)));
            handle_event(&mut state, &digit(1));
            handle_event(&mut state, &Event::Calculator(Input::Evaluate));
        }
        let (render, _) = handle_event(&mut state, &Event::ScrollHistoryUp);
        assert!(render);
        assert_eq!(state.history_offset, 1);

        handle_event(&mut state, &Event::Calculator(Input::HistoryClear));
        assert_eq!(state.history_offset, 0);
        assert!(state.calculator.history().is_empty());
        assert_eq!(state.calculator.display(), "2");
    }
}
