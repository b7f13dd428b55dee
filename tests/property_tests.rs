//! Property-based tests for the calculator state machine.
//!
//! These tests use proptest to check that the calculator's documented
//! guarantees hold for arbitrary input sequences.

use proptest::prelude::*;
use zcalc::domain::{Digit, Operator};
use zcalc::engine::{format_number, Calculator, Input};

prop_compose! {
    fn arbitrary_digit()(value in 0..10u8) -> Digit {
        Digit::new(value).unwrap()
    }
}

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        2 => arbitrary_operator().prop_map(Input::Operator),
        1 => Just(Input::Evaluate),
        1 => Just(Input::Clear),
        1 => Just(Input::ClearEntry),
        1 => Just(Input::MemoryStore),
        1 => Just(Input::MemoryRecall),
        1 => Just(Input::MemoryClear),
    ]
}

fn feed(calc: &mut Calculator, inputs: &[Input]) {
    for input in inputs {
        calc.dispatch(*input);
    }
}

fn type_number(calc: &mut Calculator, value: u32) {
    for c in value.to_string().chars() {
        calc.dispatch(Input::Digit(Digit::from_char(c).unwrap()));
    }
}

proptest! {
    #[test]
    fn digits_after_clear_echo_verbatim(
        prefix in prop::collection::vec(arbitrary_input(), 0..20),
        digits in prop::collection::vec(arbitrary_digit(), 1..15),
    ) {
        let mut calc = Calculator::new();
        feed(&mut calc, &prefix);
        calc.dispatch(Input::Clear);

        let mut expected = String::from("0");
        for digit in &digits {
            calc.dispatch(Input::Digit(*digit));
            if expected == "0" {
                expected = digit.to_string();
            } else {
                expected.push(digit.as_char());
            }
        }

        prop_assert_eq!(calc.display(), expected.as_str());
    }

    #[test]
    fn second_decimal_is_ignored(
        prefix in prop::collection::vec(arbitrary_input(), 0..20),
        between in prop::collection::vec(arbitrary_digit(), 0..5),
    ) {
        let mut calc = Calculator::new();
        feed(&mut calc, &prefix);

        calc.dispatch(Input::Decimal);
        for digit in &between {
            calc.dispatch(Input::Digit(*digit));
        }
        let before = calc.snapshot();

        prop_assert!(!calc.dispatch(Input::Decimal));
        prop_assert_eq!(calc.snapshot(), before);
        prop_assert_eq!(calc.display().matches('.').count(), 1);
    }

    #[test]
    fn evaluate_is_idempotent(inputs in prop::collection::vec(arbitrary_input(), 0..30)) {
        let mut calc = Calculator::new();
        feed(&mut calc, &inputs);

        calc.dispatch(Input::Evaluate);
        let after_first = calc.snapshot();

        prop_assert!(!calc.dispatch(Input::Evaluate));
        prop_assert_eq!(calc.snapshot(), after_first);
    }

    #[test]
    fn history_clear_touches_nothing_else(inputs in prop::collection::vec(arbitrary_input(), 0..30)) {
        let mut calc = Calculator::new();
        feed(&mut calc, &inputs);
        let before = calc.snapshot();

        calc.dispatch(Input::HistoryClear);
        let after = calc.snapshot();

        prop_assert!(after.history.is_empty());
        prop_assert_eq!(after.display_value, before.display_value);
        prop_assert_eq!(after.pending_left_operand, before.pending_left_operand);
        prop_assert_eq!(after.pending_operator, before.pending_operator);
        prop_assert_eq!(after.memory_is_set, before.memory_is_set);
    }

    #[test]
    fn memory_round_trips_through_clear(inputs in prop::collection::vec(arbitrary_input(), 0..30)) {
        let mut calc = Calculator::new();
        feed(&mut calc, &inputs);

        calc.dispatch(Input::MemoryStore);
        let stored = calc.display().to_string();
        calc.dispatch(Input::Clear);
        calc.dispatch(Input::MemoryRecall);

        prop_assert_eq!(calc.display(), stored.as_str());
    }

    #[test]
    fn addition_chains_left_to_right(a in 0..10_000u32, b in 0..10_000u32, c in 0..10_000u32) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.dispatch(Input::Operator(Operator::Add));
        type_number(&mut calc, b);
        calc.dispatch(Input::Operator(Operator::Add));

        let intermediate = format_number(f64::from(a) + f64::from(b));
        prop_assert_eq!(calc.display(), intermediate.as_str());

        type_number(&mut calc, c);
        calc.dispatch(Input::Evaluate);

        let total = format_number(f64::from(a) + f64::from(b) + f64::from(c));
        prop_assert_eq!(calc.display(), total.as_str());
        prop_assert_eq!(calc.history().len(), 2);
        prop_assert_eq!(calc.history()[1].description(), format!("{intermediate} add {c}"));
    }

    #[test]
    fn every_input_leaves_a_parseable_display(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let mut calc = Calculator::new();
        for input in inputs {
            calc.dispatch(input);
            let display = calc.display();
            let parses = display.parse::<f64>().is_ok()
                || matches!(display, "Infinity" | "-Infinity" | "NaN")
                || display.ends_with('.');
            prop_assert!(parses, "unexpected display {:?}", display);
        }
    }
}
