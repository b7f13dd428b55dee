//! Calculation engine.
//!
//! Everything that decides what a keystroke does lives here, with no knowledge
//! of Zellij or rendering. The presentation layer feeds [`Input`]s into a
//! [`Calculator`] and reads back a [`Snapshot`].
//!
//! # Modules
//!
//! - [`evaluator`]: Pure arithmetic and number formatting
//! - [`buffer`]: Text of the operand being typed and the entry-mode flag
//! - [`store`]: Append-only history and the memory slot
//! - [`machine`]: The state machine tying the above together
//!
//! # Example
//!
//! ```rust
//! use zcalc::domain::{Digit, Operator};
//! use zcalc::engine::{Calculator, Input};
//!
//! let mut calc = Calculator::new();
//! calc.dispatch(Input::Digit(Digit::new(5).unwrap()));
//! calc.dispatch(Input::Operator(Operator::Divide));
//! calc.dispatch(Input::Digit(Digit::new(0).unwrap()));
//! calc.dispatch(Input::Evaluate);
//! assert_eq!(calc.display(), "Infinity");
//! ```

pub mod buffer;
pub mod evaluator;
pub mod machine;
pub mod store;

pub use buffer::InputBuffer;
pub use evaluator::{evaluate, format_number, parse_operand};
pub use machine::{Calculator, Input, PendingOperation, Phase, Snapshot, SubscriptionId};
pub use store::Store;
