//! Palette normalization — exactly 6 or 9 colors, base pinned first.
//!
//! Harmony generators emit between 6 and 9 candidates depending on the
//! strategy. Presentation wants a fixed grid, so the normalizer settles
//! every list onto a single target length:
//!
//! - 7 or more raw candidates → target 9
//! - fewer than 7             → target 6
//!
//! Short lists are padded with base-derived variants; long lists are
//! truncated. The exact hex of the base color always ends up at index
//! 0 — moved to the front when already present, inserted otherwise.

use ac_color::{Hsl, Rgb};

/// Trim or extend a raw candidate list and pin the base color first.
///
/// Post-conditions: the result length is exactly 6 or 9, and the first
/// entry equals `base.to_hex()`.
#[must_use]
pub fn normalize(raw: Vec<String>, base: Rgb) -> Vec<String> {
    let base_hsl = base.to_hsl();
    let target = if raw.len() >= 7 { 9 } else { 6 };

    let mut palette = raw;
    palette.truncate(target);

    // Pad toward the target. The 9-target alternates lighter/darker
    // variants of the base; the 6-target cycles three variant shapes.
    let mut i = 0usize;
    while palette.len() < target {
        let filler = if target == 9 {
            if i % 2 == 0 {
                lighter(base_hsl, 25.0)
            } else {
                darker(base_hsl, 25.0)
            }
        } else {
            match i % 3 {
                0 => lighter(base_hsl, 20.0),
                1 => complement(base_hsl),
                _ => muted_darker(base_hsl),
            }
        };
        palette.push(filler);
        i += 1;
    }

    // Base color is always present and first (exact hex).
    let base_hex = base.to_hex();
    if let Some(pos) = palette.iter().position(|c| *c == base_hex) {
        let entry = palette.remove(pos);
        palette.insert(0, entry);
    } else {
        palette.insert(0, base_hex);
        palette.truncate(target);
    }

    palette
}

fn lighter(base: Hsl, delta: f64) -> String {
    base.with_lightness((base.l + delta).min(90.0))
        .to_rgb()
        .to_hex()
}

fn darker(base: Hsl, delta: f64) -> String {
    base.with_lightness((base.l - delta).max(10.0))
        .to_rgb()
        .to_hex()
}

fn complement(base: Hsl) -> String {
    base.shift_hue(180.0).to_rgb().to_hex()
}

fn muted_darker(base: Hsl) -> String {
    base.with_saturation(base.s - 10.0)
        .with_lightness((base.l - 20.0).max(10.0))
        .to_rgb()
        .to_hex()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
