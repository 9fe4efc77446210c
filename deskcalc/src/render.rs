//! Display rendering.
//!
//! Writes the projection into the two display regions: the pending
//! expression above, the current operand below, right-aligned the way a
//! desk calculator shows them. No logic of its own; it renders whatever the
//! engine projects.

use libcalc_core::DisplayFrame;

/// Render a frame as two right-aligned lines of `width` columns.
pub fn render_frame(frame: &DisplayFrame, width: usize) -> String {
    format!(
        "{pending:>width$}\n{current:>width$}",
        pending = frame.pending,
        current = frame.current,
        width = width,
    )
}
