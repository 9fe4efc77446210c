//! deskcalc crate root
//!
//! Terminal frontend for the libcalc-core calculator engine: a line-oriented
//! input adapter, a two-line renderer and TOML configuration. All logic
//! stays in the engine; this crate only maps input lines to key events and
//! prints the projection back after each one.
//!
//! Public API exported here:
//! - `Repl` and `LineOutcome` from `repl`
//! - `render_frame` from `render`
//! - `DeskConfig` from `config`

pub mod config;
pub mod render;
pub mod repl;

pub use config::DeskConfig;
pub use render::render_frame;
pub use repl::{LineOutcome, Repl};

// Convenience re-exports for callers driving the engine directly.
pub use libcalc_core::{
    CalculatorEngine, DisplayFrame, InputEvent, Key, KeyResult, Operator,
};
