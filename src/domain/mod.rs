//! Domain layer for the zcalc plugin.
//!
//! Holds the vocabulary shared by the calculation engine and the presentation
//! layer, independent of Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`operator`]: Operators and validated digits
//! - [`history`]: Completed calculation records
//!
//! # Examples
//!
//! ```
//! use zcalc::domain::{Digit, Operator};
//!
//! let seven = Digit::from_char('7').unwrap();
//! assert_eq!(seven.as_char(), '7');
//! assert!(Operator::Sqrt.is_unary());
//! ```

pub mod error;
pub mod history;
pub mod operator;

pub use error::{CalcError, Result};
pub use history::HistoryEntry;
pub use operator::{Digit, Operator};
