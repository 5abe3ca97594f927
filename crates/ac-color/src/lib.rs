// SPDX-License-Identifier: MIT
//
// ac-color — the color model underneath acpal.
//
// Hex strings in, hex strings out: the palette engine speaks 6-digit
// `#rrggbb`, and this crate owns everything between those strings and
// the WCAG math — 8-bit RGB, HSL for hue manipulation, sRGB
// linearization, relative luminance, and contrast ratios.
//
// The parsing contract is deliberately forgiving: anything that isn't
// six hex digits (optional leading `#`) degrades to black instead of
// failing, because existing callers rely on that. Strict callers use
// `Rgb::parse` / `is_valid_hex` and get a typed error instead.

// Single-char variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod contrast;

pub use color::{Hsl, ParseHexError, Rgb, is_valid_hex};
pub use contrast::{contrast_ratio, relative_luminance};
