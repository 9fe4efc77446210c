//! libcalc-core
//!
//! Four-function calculator engine: a small state machine that accumulates
//! operand text, applies one binary arithmetic operation at a time, and
//! projects the running expression for display.
//!
//! The engine owns all state. Frontends are one-way consumers: they map
//! platform input onto [`Key`]s (or pre-validated [`InputEvent`]s), call
//! into the engine, and re-read the [`DisplayFrame`] projection after each
//! call. The engine performs no I/O and no callbacks.
//!
//! Public API:
//! - `CalculatorEngine` - the state machine (digits, decimal, operators,
//!   compute, delete, clear) with the `display()` projection
//! - `Key`, `InputEvent`, `KeyResult` - keyboard mapping at the adapter
//!   boundary
//! - `Operator` - the four binary operations
//! - `DisplayFrame` - read-only projection for the presentation layer
//! - `EntryBuffer` - operand text with the per-operand editing rules
//! - `format_number` - pure result formatting (rounding + scientific
//!   notation)

pub mod display;
pub use display::DisplayFrame;

pub mod engine;
pub use engine::CalculatorEngine;

pub mod entry;
pub use entry::EntryBuffer;

pub mod format;
pub use format::format_number;

pub mod key;
pub use key::{InputEvent, Key, KeyResult};

pub mod operator;
pub use operator::Operator;
