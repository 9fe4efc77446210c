//! Numeric display formatting.
//!
//! Pure helpers that turn a computation result into the text shown in the
//! entry line. Out-of-range magnitudes switch to scientific notation rather
//! than failing; everything else is rounded to hide binary floating-point
//! noise before display.

/// Magnitudes above this switch to scientific notation.
const SCI_UPPER: f64 = 999_999_999.0;

/// Nonzero magnitudes below this switch to scientific notation.
const SCI_LOWER: f64 = 0.000_001;

/// Scale used to round results to 8 decimal places.
const ROUND_SCALE: f64 = 1e8;

/// Format a computation result for display.
///
/// Results with `|n| > 999_999_999` or `0 < |n| < 0.000001` render in
/// scientific notation with six fractional mantissa digits. Everything else
/// is rounded to 8 decimal places (so `0.1 + 0.2` shows as `0.3`), rendered
/// as decimal text, and stripped of trailing fractional zeros.
pub fn format_number(n: f64) -> String {
    if n.abs() > SCI_UPPER || (n != 0.0 && n.abs() < SCI_LOWER) {
        return format_scientific(n);
    }

    let rounded = (n * ROUND_SCALE).round() / ROUND_SCALE;
    // Negative zero displays as "0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let mut text = rounded.to_string();
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

/// Scientific notation with six fractional mantissa digits and a signed
/// exponent: `1.000000e+10`, `1.000000e-7`.
fn format_scientific(n: f64) -> String {
    let text = format!("{:.6e}", n);
    // `{:e}` leaves positive exponents unsigned; add the '+'.
    match text.find('e') {
        Some(pos) if !text[pos + 1..].starts_with('-') => {
            format!("{}e+{}", &text[..pos], &text[pos + 1..])
        }
        _ => text,
    }
}
