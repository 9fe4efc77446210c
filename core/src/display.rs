//! Display projection for platform communication.
//!
//! `DisplayFrame` is a simple data container with public fields. After each
//! engine call the platform reads these fields to refresh its two display
//! regions. No callbacks, no traits: the engine never pushes to the UI, the
//! UI always pulls.

use serde::{Deserialize, Serialize};

/// What the two display regions should show.
///
/// Recomputed from engine state on demand, never stored by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// The operand line: the entry buffer verbatim, or "Error".
    pub current: String,

    /// The pending-expression line: empty when no operation is pending,
    /// otherwise `"{operand} {symbol}"` (e.g. `"5 ÷"`).
    pub pending: String,
}

impl DisplayFrame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a pending operation is on display.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
