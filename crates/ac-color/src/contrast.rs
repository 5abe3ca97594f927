//! WCAG relative luminance and contrast ratio.
//!
//! The two numbers every accessibility grade is built on:
//!
//! - Relative luminance per WCAG 2.1 — sRGB channels linearized through
//!   the piecewise gamma function, then weighted by the ITU-R BT.709
//!   coefficients.
//! - Contrast ratio — `(L_lighter + 0.05) / (L_darker + 0.05)`, a value
//!   in [1, 21] that is symmetric in its two inputs.
//!
//! Contrast takes *luminances*, not colors: the palette pipeline
//! computes one luminance per swatch and compares it against the fixed
//! endpoints for white (1.0) and black (0.0) without redoing the
//! channel math.

use crate::color::Rgb;

/// Convert an 8-bit sRGB channel to its linear-light value.
///
/// The WCAG 2.1 piecewise transfer function:
///   v <= 0.03928 → v / 12.92, else ((v + 0.055) / 1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r_lin = srgb_to_linear(color.r);
    let g_lin = srgb_to_linear(color.g);
    let b_lin = srgb_to_linear(color.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two relative luminances.
///
/// Returns a value in [1.0, 21.0]. The result is the same regardless of
/// argument order.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
