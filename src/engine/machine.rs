//! Calculation state machine.
//!
//! [`Calculator`] owns the input buffer, the pending operation and the
//! history/memory store, and applies one [`Input`] at a time.
//!
//! # States
//!
//! ```text
//!            operator                     evaluate / clear
//!   Idle ─────────────────▶ AwaitingRightOperand ─────────────────▶ Idle
//!                             │        ▲
//!                             └────────┘
//!                     operator (resolves first if a right
//!                     operand was typed since the last one)
//! ```
//!
//! # Operator chaining
//!
//! Pressing an operator while another is pending resolves the pending one
//! first, but only when digits were typed after it. `3 + 4 +` therefore shows
//! `7` before the next operand is entered, while `3 + -` just swaps the
//! operator.
//!
//! # Unary operators
//!
//! `sqrt`, `sin`, `cos` and `tan` are captured like binary operators and only
//! produce a result on the next resolution (equals or a chained operator). The
//! right operand, if any, is ignored by the evaluation.
//!
//! # Notifications
//!
//! Renderers can [`subscribe`](Calculator::subscribe) to receive a
//! [`Snapshot`] after every input that changed observable state.

use super::buffer::InputBuffer;
use super::evaluator::{evaluate, format_number, parse_operand};
use super::store::Store;
use crate::domain::{Digit, HistoryEntry, Operator};
use std::fmt;

/// A single user input understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Appends a digit to the operand being typed.
    Digit(Digit),
    /// Appends a decimal point to the operand being typed.
    Decimal,
    /// Selects an operator, resolving a chained one first.
    Operator(Operator),
    /// Resolves the pending operation.
    Evaluate,
    /// Resets the display and drops the pending operation.
    Clear,
    /// Resets the display but keeps the pending operation.
    ClearEntry,
    /// Copies the display into memory.
    MemoryStore,
    /// Copies memory onto the display.
    MemoryRecall,
    /// Empties memory.
    MemoryClear,
    /// Empties the history.
    HistoryClear,
}

/// Where the calculator is in a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operator is pending.
    Idle,
    /// An operator was chosen and is waiting to be resolved.
    AwaitingRightOperand,
}

/// Left operand and operator captured when an operator was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Display text at the moment the operator was chosen.
    pub left: String,
    pub operator: Operator,
}

/// Read-only view of the calculator for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub display_value: String,
    pub pending_left_operand: Option<String>,
    pub pending_operator: Option<Operator>,
    pub history: Vec<HistoryEntry>,
    pub memory_is_set: bool,
}

/// Handle returned by [`Calculator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Cheap comparison key for detecting whether an input changed anything.
#[derive(PartialEq, Eq)]
struct Fingerprint {
    display: String,
    fresh: bool,
    pending: Option<PendingOperation>,
    history_len: usize,
    memory: Option<String>,
}

/// The calculator core.
///
/// # Example
///
/// ```rust
/// use zcalc::domain::{Digit, Operator};
/// use zcalc::engine::{Calculator, Input};
///
/// let mut calc = Calculator::new();
/// calc.dispatch(Input::Digit(Digit::new(3).unwrap()));
/// calc.dispatch(Input::Operator(Operator::Add));
/// calc.dispatch(Input::Digit(Digit::new(4).unwrap()));
/// calc.dispatch(Input::Evaluate);
///
/// assert_eq!(calc.display(), "7");
/// assert_eq!(calc.history()[0].description(), "3 add 4");
/// ```
pub struct Calculator {
    buffer: InputBuffer,
    pending: Option<PendingOperation>,
    store: Store,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("buffer", &self.buffer)
            .field("pending", &self.pending)
            .field("store", &self.store)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Calculator {
    /// Creates an idle calculator showing `"0"` with empty history and memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: InputBuffer::new(),
            pending: None,
            store: Store::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Applies one input.
    ///
    /// Returns `true` if observable state changed, in which case subscribers
    /// have been notified.
    pub fn dispatch(&mut self, input: Input) -> bool {
        let _span = tracing::debug_span!("dispatch", input = ?input).entered();

        let before = self.fingerprint();
        match input {
            Input::Digit(digit) => self.buffer.push_digit(digit),
            Input::Decimal => self.buffer.push_decimal(),
            Input::Operator(operator) => self.select_operator(operator),
            Input::Evaluate => self.resolve(),
            Input::Clear => {
                self.buffer.reset();
                self.pending = None;
            }
            Input::ClearEntry => self.buffer.reset(),
            Input::MemoryStore => {
                let value = self.buffer.text().to_string();
                self.store.store_memory(&value);
            }
            Input::MemoryRecall => self.recall_memory(),
            Input::MemoryClear => self.store.clear_memory(),
            Input::HistoryClear => self.store.clear_history(),
        }

        let changed = self.fingerprint() != before;
        if changed {
            self.notify();
        } else {
            tracing::debug!("input had no effect");
        }
        changed
    }

    fn select_operator(&mut self, operator: Operator) {
        if self.pending.is_some() && !self.buffer.is_fresh() {
            tracing::debug!("resolving chained operation");
            self.resolve();
        }

        self.pending = Some(PendingOperation {
            left: self.buffer.text().to_string(),
            operator,
        });
        self.buffer.finish_entry();

        tracing::debug!(
            left = %self.buffer.text(),
            operator = %operator,
            "operation pending"
        );
    }

    /// Resolves the pending operation against the displayed operand.
    ///
    /// No-op when nothing is pending.
    fn resolve(&mut self) {
        let Some(pending) = self.pending.take() else {
            tracing::debug!("nothing to evaluate");
            return;
        };

        let left = parse_operand(&pending.left);
        let right = parse_operand(self.buffer.text());
        let result = format_number(evaluate(left, pending.operator, right));

        let typed_right = (!self.buffer.is_fresh()).then(|| self.buffer.text().to_string());
        self.store.record(HistoryEntry::new(
            pending.left,
            pending.operator,
            typed_right,
            result.clone(),
        ));

        tracing::debug!(result = %result, "operation resolved");
        self.buffer.show(result);
    }

    fn recall_memory(&mut self) {
        match self.store.memory() {
            Some(value) => {
                let value = value.to_string();
                self.buffer.show(value);
            }
            None => tracing::debug!("memory is empty"),
        }
    }

    /// Current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.text()
    }

    /// Pending operation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::AwaitingRightOperand
        } else {
            Phase::Idle
        }
    }

    /// `true` when the next digit starts a new operand.
    #[must_use]
    pub const fn is_awaiting_new_operand(&self) -> bool {
        self.buffer.is_fresh()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        self.store.history()
    }

    #[must_use]
    pub fn memory(&self) -> Option<&str> {
        self.store.memory()
    }

    /// Captures the state a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display_value: self.buffer.text().to_string(),
            pending_left_operand: self.pending.as_ref().map(|p| p.left.clone()),
            pending_operator: self.pending.as_ref().map(|p| p.operator),
            history: self.store.history().to_vec(),
            memory_is_set: self.store.memory().is_some(),
        }
    }

    /// Registers a callback invoked with a fresh [`Snapshot`] after every
    /// input that changes observable state.
    ///
    /// Callbacks run in registration order on the dispatching thread.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(subscribers = self.listeners.len(), "subscriber added");
        id
    }

    /// Removes a callback. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            display: self.buffer.text().to_string(),
            fresh: self.buffer.is_fresh(),
            pending: self.pending.clone(),
            history_len: self.store.history().len(),
            memory: self.store.memory().map(str::to_string),
        }
    }
}
