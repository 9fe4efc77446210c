//! Keyboard events and their mapping onto engine input.
//!
//! Frontends deliver platform-independent `Key`s; `Key::to_event` validates
//! and maps them to `InputEvent`s, so the state machine itself only ever
//! sees well-formed input. Keys with no calculator meaning map to nothing
//! and are reported back as `KeyResult::NotHandled`.

use crate::operator::Operator;

/// Platform-independent keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character: digits, '.', '=', the ASCII operators.
    Char(char),
    /// Enter/Return key (compute).
    Enter,
    /// Backspace key (delete last character).
    Backspace,
    /// Escape key (clear).
    Escape,
}

/// Pre-validated engine input, one variant per calculator control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A single digit '0'-'9'.
    Digit(char),
    /// The decimal point.
    Decimal,
    /// One of the four binary operators.
    Operator(Operator),
    /// Evaluate the pending operation.
    Equals,
    /// Reset to the initial state.
    Clear,
    /// Remove the last character of the current operand.
    Delete,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key mapped to a calculator control and was processed.
    Handled,
    /// Key has no calculator meaning (pass through to the application).
    NotHandled,
}

impl Key {
    /// Map a key to its engine event, if it has one.
    ///
    /// Digits and '.' edit the operand, Escape clears, Backspace deletes,
    /// Enter and '=' compute, and `+ - * /` select the four operators.
    pub fn to_event(self) -> Option<InputEvent> {
        match self {
            Key::Char(ch) if ch.is_ascii_digit() => Some(InputEvent::Digit(ch)),
            Key::Char('.') => Some(InputEvent::Decimal),
            Key::Char('=') => Some(InputEvent::Equals),
            Key::Char(ch) => Operator::from_ascii(ch).map(InputEvent::Operator),
            Key::Enter => Some(InputEvent::Equals),
            Key::Backspace => Some(InputEvent::Delete),
            Key::Escape => Some(InputEvent::Clear),
        }
    }
}
