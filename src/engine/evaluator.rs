//! Numeric evaluator.
//!
//! Pure functions mapping `(left, operator, right)` to a result, plus the
//! conversions between operand text and `f64`. Nothing here is checked:
//! division by zero, roots of negative numbers and overflow all yield the
//! IEEE-754 special values, which are formatted as `Infinity`, `-Infinity`
//! and `NaN`.

use crate::domain::Operator;
use std::f64::consts::PI;

/// Magnitude at and above which results switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero results switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Applies `operator` to the operands.
///
/// `right` is ignored by unary operators. Trigonometric operators read `left`
/// in degrees.
///
/// # Examples
///
/// ```
/// use zcalc::domain::Operator;
/// use zcalc::engine::evaluate;
///
/// assert_eq!(evaluate(3.0, Operator::Add, 4.0), 7.0);
/// assert_eq!(evaluate(16.0, Operator::Sqrt, 0.0), 4.0);
/// assert!(evaluate(1.0, Operator::Divide, 0.0).is_infinite());
/// ```
#[must_use]
pub fn evaluate(left: f64, operator: Operator, right: f64) -> f64 {
    match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left / right,
        Operator::Power => power(left, right),
        Operator::Sqrt => left.sqrt(),
        Operator::Sin => degrees_to_radians(left).sin(),
        Operator::Cos => degrees_to_radians(left).cos(),
        Operator::Tan => degrees_to_radians(left).tan(),
    }
}

/// `base` raised to `exponent`.
///
/// A `NaN` exponent, or `±1` raised to an infinite exponent, is `NaN` rather
/// than `1`.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees * PI) / 180.0
}

/// Formats a result in its default string form.
///
/// Uses the shortest representation that round-trips, switching to exponent
/// notation (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`. Negative zero prints
/// as `0`.
///
/// # Examples
///
/// ```
/// use zcalc::engine::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return format!("{value}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// Parses operand text into a number.
///
/// Accepts everything [`format_number`] produces plus in-progress entries such
/// as `"0."`. Unparseable text yields `NaN`.
///
/// # Examples
///
/// ```
/// use zcalc::engine::parse_operand;
///
/// assert_eq!(parse_operand("0."), 0.0);
/// assert_eq!(parse_operand("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_operand("NaN").is_nan());
/// ```
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    match text.trim() {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        "NaN" => f64::NAN,
        other => other.parse::<f64>().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_binary_operators() {
        assert_eq!(evaluate(10.0, Operator::Subtract, 4.0), 6.0);
        assert_eq!(evaluate(6.0, Operator::Multiply, 7.0), 42.0);
        assert_eq!(evaluate(9.0, Operator::Divide, 3.0), 3.0);
        assert_eq!(evaluate(2.0, Operator::Power, 10.0), 1024.0);
    }

    #[test]
    fn test_unary_ignores_right() {
        assert_eq!(evaluate(81.0, Operator::Sqrt, 123.0), 9.0);
        assert!(approx(evaluate(90.0, Operator::Sin, 5.0), 1.0));
        assert!(approx(evaluate(0.0, Operator::Cos, -1.0), 1.0));
        assert!(approx(evaluate(45.0, Operator::Tan, 0.0), 1.0));
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert!(approx(evaluate(30.0, Operator::Sin, 0.0), 0.5));
        assert!(approx(evaluate(60.0, Operator::Cos, 0.0), 0.5));
    }

    #[test]
    fn test_special_values_propagate() {
        assert_eq!(evaluate(1.0, Operator::Divide, 0.0), f64::INFINITY);
        assert_eq!(evaluate(-1.0, Operator::Divide, 0.0), f64::NEG_INFINITY);
        assert!(evaluate(0.0, Operator::Divide, 0.0).is_nan());
        assert!(evaluate(-4.0, Operator::Sqrt, 0.0).is_nan());
        assert!(evaluate(1.0, Operator::Power, f64::INFINITY).is_nan());
        assert!(evaluate(1.0, Operator::Power, f64::NAN).is_nan());
        assert_eq!(evaluate(f64::NAN, Operator::Power, 0.0), 1.0);
        assert_eq!(evaluate(10.0, Operator::Power, 400.0), f64::INFINITY);
    }

    #[test]
    fn test_format_plain_numbers() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-3.5), "-3.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_exponent_numbers() {
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e25), "-2e+25");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_round_trips_formatted_values() {
        for value in [7.0, -3.25, 1e21, 1.5e-7, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(parse_operand(&format_number(value)), value);
        }
        assert!(parse_operand("garbage").is_nan());
    }
}
