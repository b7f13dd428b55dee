//! End-to-end flows through the public API: keys and clicks in, display,
//! history and rendered view models out.

use std::cell::RefCell;
use std::rc::Rc;

use zcalc::app::{map_key, AppState, PanelMode};
use zcalc::domain::Operator;
use zcalc::engine::{Calculator, Input, Phase};
use zcalc::ui::keypad::{button_at, KEYPAD_TOP, ROW_HEIGHT};
use zcalc::{handle_event, initialize, Action, Config, Event};
use zellij_tile::prelude::{BareKey, KeyWithModifier};

fn new_state() -> AppState {
    initialize(&Config::default())
}

/// Feeds a string of keys, as typed, through the key map and the handler.
fn type_keys(state: &mut AppState, keys: &str) -> Vec<Action> {
    let mut actions = Vec::new();
    for c in keys.chars() {
        let bare = match c {
            '\n' => BareKey::Enter,
            '\u{1b}' => BareKey::Esc,
            '\u{8}' => BareKey::Backspace,
            other => BareKey::Char(other),
        };
        if let Some(event) = map_key(&KeyWithModifier::new(bare), state.panel) {
            actions.extend(handle_event(state, &event).1);
        }
    }
    actions
}

/// Clicks the button in grid `column` of keypad `row_index` on an 80×24 pane.
fn click(state: &mut AppState, row_index: usize, column: usize) {
    let row = KEYPAD_TOP + row_index * ROW_HEIGHT;
    let input = button_at(row, column * 20 + 5, 80, 24).expect("click should hit a button");
    handle_event(state, &Event::Calculator(input));
}

#[test]
fn test_chained_addition_from_keyboard() {
    let mut state = new_state();

    type_keys(&mut state, "3+4+");
    assert_eq!(state.calculator.display(), "7");

    type_keys(&mut state, "5\n");
    assert_eq!(state.calculator.display(), "12");

    let descriptions: Vec<_> = state
        .calculator
        .history()
        .iter()
        .map(|entry| (entry.description(), entry.result.clone()))
        .collect();
    assert_eq!(
        descriptions,
        vec![
            ("3 add 4".to_string(), "7".to_string()),
            ("7 add 5".to_string(), "12".to_string()),
        ]
    );
}

#[test]
fn test_division_by_zero_shows_infinity() {
    let mut state = new_state();
    type_keys(&mut state, "8/0=");
    assert_eq!(state.calculator.display(), "Infinity");
    assert_eq!(state.calculator.history()[0].result, "Infinity");
}

#[test]
fn test_operator_swap_before_right_operand() {
    let mut state = new_state();
    type_keys(&mut state, "9*-");

    let pending = state.calculator.pending().unwrap();
    assert_eq!(pending.operator, Operator::Subtract);
    assert!(state.calculator.history().is_empty());

    type_keys(&mut state, "4=");
    assert_eq!(state.calculator.display(), "5");
}

#[test]
fn test_escape_and_backspace() {
    let mut state = new_state();
    type_keys(&mut state, "12+34\u{8}");
    assert_eq!(state.calculator.display(), "0");
    assert_eq!(state.calculator.phase(), Phase::AwaitingRightOperand);

    type_keys(&mut state, "5=");
    assert_eq!(state.calculator.display(), "17");

    type_keys(&mut state, "6*\u{1b}");
    assert_eq!(state.calculator.display(), "0");
    assert_eq!(state.calculator.phase(), Phase::Idle);
}

#[test]
fn test_memory_survives_clear() {
    let mut state = new_state();
    type_keys(&mut state, "2.5S\u{1b}");
    assert_eq!(state.calculator.display(), "0");

    type_keys(&mut state, "R");
    assert_eq!(state.calculator.display(), "2.5");

    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.display.memory_is_set);

    type_keys(&mut state, "X");
    assert!(state.calculator.memory().is_none());
}

#[test]
fn test_keypad_clicks() {
    let mut state = new_state();

    click(&mut state, 2, 0); // 7
    click(&mut state, 3, 3); // ×
    click(&mut state, 4, 2); // 3
    click(&mut state, 5, 2); // =
    assert_eq!(state.calculator.display(), "21");

    click(&mut state, 0, 2); // MS
    click(&mut state, 6, 0); // Clear
    click(&mut state, 0, 1); // MR
    assert_eq!(state.calculator.display(), "21");
}

#[test]
fn test_clicks_behind_footer_are_ignored() {
    // On a 20-row pane the footer border covers the Clear/CE row.
    let clear_row = KEYPAD_TOP + 6 * ROW_HEIGHT;
    assert_eq!(button_at(clear_row, 5, 80, 20), None);
    assert_eq!(button_at(clear_row, 5, 80, 21), Some(Input::Clear));
}

#[test]
fn test_sqrt_waits_for_resolution() {
    let mut state = new_state();
    type_keys(&mut state, "9v");
    assert_eq!(state.calculator.display(), "9");
    assert!(state.calculator.history().is_empty());

    type_keys(&mut state, "=");
    assert_eq!(state.calculator.display(), "3");
    assert_eq!(state.calculator.history()[0].description(), "9 sqrt");
}

#[test]
fn test_trig_uses_degrees() {
    let mut state = new_state();
    type_keys(&mut state, "90s=");
    assert_eq!(state.calculator.display(), "1");
}

#[test]
fn test_history_panel_flow() {
    let mut state = new_state();
    type_keys(&mut state, "1+1=2*3=");

    type_keys(&mut state, "h");
    assert_eq!(state.panel, PanelMode::History);

    let history = state.compute_viewmodel(24, 80).history.unwrap();
    assert_eq!(history.total, 2);
    assert_eq!(history.items[1].calculation, "2 × 3");
    assert_eq!(history.items[1].result, "6");

    let up = KeyWithModifier::new(BareKey::Up);
    let event = map_key(&up, state.panel).unwrap();
    assert!(handle_event(&mut state, &event).0);
    let history = state.compute_viewmodel(24, 80).history.unwrap();
    assert_eq!(history.items.len(), 1);

    type_keys(&mut state, "H");
    assert!(state.calculator.history().is_empty());
    assert_eq!(state.calculator.display(), "6");
    assert!(state
        .compute_viewmodel(24, 80)
        .history
        .unwrap()
        .empty_state
        .is_some());
}

#[test]
fn test_quit_key_closes() {
    let mut state = new_state();
    let actions = type_keys(&mut state, "q");
    assert_eq!(actions, vec![Action::CloseFocus]);
}

#[test]
fn test_subscribers_see_each_change() {
    let mut calc = Calculator::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let id = calc.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.display_value.clone()));

    calc.dispatch(Input::Digit(zcalc::domain::Digit::new(4).unwrap()));
    calc.dispatch(Input::Evaluate); // no-op
    calc.dispatch(Input::Operator(Operator::Add));
    assert!(calc.unsubscribe(id));
    calc.dispatch(Input::Digit(zcalc::domain::Digit::new(1).unwrap()));

    assert_eq!(*seen.borrow(), vec!["4".to_string(), "4".to_string()]);
}
