//! Operators and digits accepted by the calculator.
//!
//! [`Operator`] enumerates every function the keypad offers. Binary operators
//! combine the pending left operand with the operand typed after it; unary
//! operators only read the left operand. [`Digit`] is a validated decimal digit
//! so the input buffer never sees anything else.

use std::fmt;

/// An arithmetic or scientific operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Sin,
    Cos,
    Tan,
}

impl Operator {
    /// Every operator, binary operators first.
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Sqrt,
        Self::Sin,
        Self::Cos,
        Self::Tan,
    ];

    /// Returns `true` for operators that ignore the right operand.
    ///
    /// ```
    /// use zcalc::domain::Operator;
    ///
    /// assert!(Operator::Tan.is_unary());
    /// assert!(!Operator::Power.is_unary());
    /// ```
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Sqrt | Self::Sin | Self::Cos | Self::Tan)
    }

    /// Canonical lowercase name, used in history descriptions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Symbol shown on the keypad and in the pending-operation line.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::Sqrt => "√",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its numeric value. Returns `None` above 9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from an ASCII character `'0'..='9'`.
    ///
    /// ```
    /// use zcalc::domain::Digit;
    ///
    /// assert_eq!(Digit::from_char('4').map(Digit::value), Some(4));
    /// assert!(Digit::from_char('x').is_none());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::new)
    }

    /// Numeric value of the digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character of the digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_partition() {
        let unary: Vec<_> = Operator::ALL.into_iter().filter(|op| op.is_unary()).collect();
        assert_eq!(
            unary,
            vec![Operator::Sqrt, Operator::Sin, Operator::Cos, Operator::Tan]
        );
    }

    #[test]
    fn test_display_uses_name() {
        for op in Operator::ALL {
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::new(0).map(Digit::as_char), Some('0'));
        assert!(Digit::from_char('٣').is_none());
    }
}
