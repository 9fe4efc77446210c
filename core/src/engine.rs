//! Calculator state machine.
//!
//! `CalculatorEngine` owns all calculator state: the operand being typed,
//! the captured pending operation, the reset flag, and the error latch. The
//! public surface is the mutating operations (digits, decimal, operator,
//! compute, delete, clear) plus the `display()` projection; frontends call
//! in, then re-read the projection after every event.
//!
//! The engine is single-threaded and synchronous. Every operation runs to
//! completion before the next one, and the engine performs no callbacks, so
//! re-entrancy cannot occur.

use tracing::debug;

use crate::display::DisplayFrame;
use crate::entry::EntryBuffer;
use crate::format::format_number;
use crate::key::{InputEvent, Key, KeyResult};
use crate::operator::Operator;

/// Text shown when a computation cannot produce a value.
const ERROR_TEXT: &str = "Error";

/// An operand captured at the moment an operator was chosen, together with
/// that operator. The two always travel as a pair.
#[derive(Debug, Clone, PartialEq)]
struct Pending {
    operand: String,
    op: Operator,
}

/// The calculator state machine.
///
/// Operand chains evaluate strictly left to right: choosing a new operator
/// while one is pending computes the pending pair first, so there is no
/// operator precedence (standard four-function calculator semantics).
///
/// Division by zero latches the error state: the entry line shows "Error"
/// and every operation except [`clear`](Self::clear) is a no-op until then.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    /// The operand currently being typed.
    entry: EntryBuffer,

    /// The captured operand/operator pair awaiting a right-hand side.
    pending: Option<Pending>,

    /// When set, the next digit or decimal starts a fresh operand instead
    /// of appending to a stale result.
    reset_next: bool,

    /// Latched by division by zero; released only by `clear`.
    error: bool,
}

impl CalculatorEngine {
    /// Create an engine in the initial state: entry "0", nothing pending.
    pub fn new() -> Self {
        Self {
            entry: EntryBuffer::new(),
            pending: None,
            reset_next: false,
            error: false,
        }
    }

    /// Process one keyboard event.
    ///
    /// This is the main entry point for frontends. After calling this, read
    /// [`display`](Self::display) to refresh the UI. Returns
    /// `KeyResult::NotHandled` for keys with no calculator meaning.
    pub fn process_key(&mut self, key: Key) -> KeyResult {
        match key.to_event() {
            Some(event) => {
                self.apply(event);
                KeyResult::Handled
            }
            None => KeyResult::NotHandled,
        }
    }

    /// Dispatch an already-validated input event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(d) => self.append_digit(d),
            InputEvent::Decimal => self.append_decimal(),
            InputEvent::Operator(op) => self.choose_operator(op),
            InputEvent::Equals => self.compute(),
            InputEvent::Clear => self.clear(),
            InputEvent::Delete => self.delete(),
        }
    }

    /// Reset everything to the initial state.
    ///
    /// The only way out of the error display.
    pub fn clear(&mut self) {
        self.entry.reset();
        self.pending = None;
        self.reset_next = false;
        self.error = false;
    }

    /// Remove the last character of the current operand.
    ///
    /// Never touches the pending operand or operator.
    pub fn delete(&mut self) {
        if self.error {
            return;
        }
        self.entry.delete_last();
    }

    /// Append one digit ('0'-'9') to the current operand.
    pub fn append_digit(&mut self, d: char) {
        if self.error || !d.is_ascii_digit() {
            return;
        }
        if self.reset_next {
            self.entry.begin_fresh();
            self.reset_next = false;
        }
        self.entry.push_digit(d);
    }

    /// Append the decimal point to the current operand.
    pub fn append_decimal(&mut self) {
        if self.error {
            return;
        }
        if self.reset_next {
            self.entry.reset();
            self.reset_next = false;
        }
        self.entry.push_decimal();
    }

    /// Capture the current operand and operator as the pending operation.
    ///
    /// If an operation is already pending it is computed first, which is
    /// what makes chains evaluate left to right. The next digit then starts
    /// a fresh operand.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.error || self.entry.is_empty() {
            return;
        }
        if self.pending.is_some() {
            self.compute();
            if self.error {
                return;
            }
        }
        debug!(operand = self.entry.text(), operator = %op, "operator pending");
        self.pending = Some(Pending {
            operand: self.entry.text().to_string(),
            op,
        });
        self.reset_next = true;
    }

    /// Evaluate the pending operation against the current operand.
    ///
    /// A no-op when nothing is pending or either operand fails to parse.
    /// Division by zero replaces the entry with "Error" and latches the
    /// error state, leaving the pending pair untouched.
    pub fn compute(&mut self) {
        if self.error {
            return;
        }
        let Some(pending) = self.pending.clone() else {
            return;
        };
        let (Ok(prev), Ok(current)) = (
            pending.operand.parse::<f64>(),
            self.entry.text().parse::<f64>(),
        ) else {
            return;
        };

        if pending.op == Operator::Divide && current == 0.0 {
            debug!(operand = pending.operand.as_str(), "division by zero");
            self.entry.set_text(ERROR_TEXT);
            self.error = true;
            return;
        }

        let result = pending.op.apply(prev, current);
        debug!(prev, current, operator = %pending.op, result, "computed");
        self.entry.set_text(format_number(result));
        self.pending = None;
        self.reset_next = true;
    }

    /// Check whether the engine is latched in the error display.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Read the projection: what both display regions should show.
    ///
    /// `current` is the entry buffer verbatim; `pending` is empty when no
    /// operation is pending, otherwise `"{operand} {symbol}"`.
    pub fn display(&self) -> DisplayFrame {
        DisplayFrame {
            current: self.entry.text().to_string(),
            pending: match &self.pending {
                Some(p) => format!("{} {}", p.operand, p.op),
                None => String::new(),
            },
        }
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
