//! Combination building and ranking.
//!
//! The last two pipeline stages: pair every palette color with its
//! higher-contrast text color (black or white), grade the pair against
//! the normal-text WCAG thresholds, attach a relationship label, and
//! rank the result — base first, then best grades and ratios first.

use ac_color::{Hsl, Rgb, contrast_ratio, relative_luminance};
use serde::Serialize;

use crate::harmony::HarmonyKind;
use crate::normalize::normalize;
use crate::wcag::WcagLevel;

const WHITE_LUMINANCE: f64 = 1.0;
const BLACK_LUMINANCE: f64 = 0.0;

/// Tolerance around each harmony's characteristic hue offset when
/// deriving relationship names.
const HUE_TOLERANCE: f64 = 15.0;

/// A background color paired with its best text color and WCAG grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCombination {
    /// Background hex (`#rrggbb`, lowercase).
    pub background: String,
    /// Text hex — always `#ffffff` or `#000000`, whichever contrasts more.
    pub text: String,
    /// Relationship label ("Base", "Complementary", "Lighter Base", ...).
    pub name: String,
    /// Contrast ratio between background and text, in [1, 21].
    pub ratio: f64,
    /// WCAG grade of the ratio in normal-text context.
    pub wcag_level: WcagLevel,
    /// True only for the first entry (the caller's base color).
    pub is_base_color: bool,
}

/// Generate the full ranked combination list for a base color.
///
/// The complete pipeline: harmony candidates → normalized palette of 6
/// or 9 colors → graded combinations → ranked output. Pure and
/// synchronous; a malformed `base_hex` degrades to black rather than
/// failing, so the function is total over all string input.
#[must_use]
pub fn generate_accessible_palette(base_hex: &str, harmony: HarmonyKind) -> Vec<ColorCombination> {
    let base = Rgb::from_hex(base_hex);
    let base_hsl = base.to_hsl();

    let candidates = harmony.generate(base_hsl);
    let palette = normalize(candidates, base);

    let combinations = palette
        .iter()
        .enumerate()
        .map(|(index, hex)| build_combination(hex, index, base_hsl, harmony))
        .collect();

    rank(combinations)
}

/// Grade one palette entry: pick black or white text, compute the
/// ratio, classify it, and derive the relationship label.
fn build_combination(
    hex: &str,
    index: usize,
    base: Hsl,
    harmony: HarmonyKind,
) -> ColorCombination {
    let rgb = Rgb::from_hex(hex);
    let luminance = relative_luminance(rgb);

    let white = contrast_ratio(WHITE_LUMINANCE, luminance);
    let black = contrast_ratio(luminance, BLACK_LUMINANCE);
    let (text, ratio) = if white > black {
        ("#ffffff", white)
    } else {
        ("#000000", black)
    };

    let name = if index == 0 {
        // The first entry is the caller's base color, whatever its
        // computed relationship would have been.
        "Base".to_owned()
    } else {
        relationship_name(base, rgb.to_hsl(), harmony)
    };

    ColorCombination {
        background: hex.to_owned(),
        text: text.to_owned(),
        name,
        ratio,
        wcag_level: WcagLevel::classify(ratio, false, false),
        is_base_color: index == 0,
    }
}

/// Derive a relationship label from the hue distance to the base.
///
/// An ordered guard chain: earlier branches shadow later ones. In
/// particular Triadic claims the 240° band before Tetradic can — a
/// deliberate tie-break, not an oversight.
fn relationship_name(base: Hsl, color: Hsl, harmony: HarmonyKind) -> String {
    let hue_diff = (base.h - color.h).abs();
    let near = |center: f64| (hue_diff - center).abs() < HUE_TOLERANCE;

    let label = if hue_diff < HUE_TOLERANCE {
        let sat_diff = color.s - base.s;
        let light_diff = color.l - base.l;
        if harmony == HarmonyKind::Monochromatic && sat_diff.abs() > 15.0 {
            if sat_diff > 0.0 { "More Saturated" } else { "Less Saturated" }
        } else if light_diff.abs() < 5.0 {
            "Base"
        } else if light_diff > 0.0 {
            "Lighter Base"
        } else {
            "Darker Base"
        }
    } else if near(180.0) {
        "Complementary"
    } else if hue_diff <= 40.0 {
        // Small-to-medium offsets read as analogous before anything else.
        "Analogous"
    } else if near(120.0) || near(240.0) {
        "Triadic"
    } else if near(150.0) || near(210.0) {
        "Split Complementary"
    } else if near(60.0) || near(240.0) {
        "Tetradic"
    } else if near(90.0) || near(270.0) {
        "Square"
    } else if harmony == HarmonyKind::Monochromatic {
        "Monochromatic"
    } else {
        harmony.label()
    };

    label.to_owned()
}

/// Rank combinations: the base entry stays first; the rest sort by
/// WCAG level (AAA → AA → Fail), then by descending contrast ratio.
fn rank(mut combinations: Vec<ColorCombination>) -> Vec<ColorCombination> {
    let base = combinations
        .iter()
        .position(|c| c.is_base_color)
        .map(|pos| combinations.remove(pos));

    combinations.sort_by(|a, b| {
        b.wcag_level
            .cmp(&a.wcag_level)
            .then_with(|| b.ratio.total_cmp(&a.ratio))
    });

    if let Some(base) = base {
        combinations.insert(0, base);
    }
    combinations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    const BASES: [&str; 5] = ["#1a365d", "#ffff00", "#c62828", "#7fe3c0", "#123123"];

    /// Whether `a` may legally precede `b` in the ranked tail.
    fn ranked_pair_ok(a: &ColorCombination, b: &ColorCombination) -> bool {
        match a.wcag_level.cmp(&b.wcag_level) {
            Ordering::Greater => true,
            Ordering::Equal => a.ratio >= b.ratio,
            Ordering::Less => false,
        }
    }

    // ── Pipeline invariants ─────────────────────────────────────────

    #[test]
    fn base_color_is_first_for_every_harmony() {
        for harmony in HarmonyKind::all() {
            for base in BASES {
                let combos = generate_accessible_palette(base, *harmony);
                assert_eq!(combos[0].background, base, "{harmony:?}");
                assert_eq!(combos[0].name, "Base", "{harmony:?}");
                assert!(combos[0].is_base_color, "{harmony:?}");
            }
        }
    }

    #[test]
    fn exactly_one_base_entry() {
        for harmony in HarmonyKind::all() {
            let combos = generate_accessible_palette("#1a365d", *harmony);
            let count = combos.iter().filter(|c| c.is_base_color).count();
            assert_eq!(count, 1, "{harmony:?}");
        }
    }

    #[test]
    fn palette_size_is_six_or_nine() {
        for harmony in HarmonyKind::all() {
            for base in BASES {
                let len = generate_accessible_palette(base, *harmony).len();
                assert!(len == 6 || len == 9, "{harmony:?}/{base}: {len}");
            }
        }
    }

    #[test]
    fn split_complementary_yields_six() {
        let combos = generate_accessible_palette("#1a365d", HarmonyKind::SplitComplementary);
        assert_eq!(combos.len(), 6);
    }

    #[test]
    fn ranking_invariant_holds() {
        for harmony in HarmonyKind::all() {
            for base in BASES {
                let combos = generate_accessible_palette(base, *harmony);
                for pair in combos[1..].windows(2) {
                    assert!(
                        ranked_pair_ok(&pair[0], &pair[1]),
                        "{harmony:?}/{base}: {:?} before {:?}",
                        (pair[0].wcag_level, pair[0].ratio),
                        (pair[1].wcag_level, pair[1].ratio),
                    );
                }
            }
        }
    }

    #[test]
    fn text_is_always_black_or_white() {
        for harmony in HarmonyKind::all() {
            for combo in generate_accessible_palette("#7fe3c0", *harmony) {
                assert!(
                    combo.text == "#ffffff" || combo.text == "#000000",
                    "unexpected text color {}",
                    combo.text
                );
            }
        }
    }

    #[test]
    fn ratio_matches_text_choice() {
        for combo in generate_accessible_palette("#1a365d", HarmonyKind::Triadic) {
            let lum = relative_luminance(Rgb::from_hex(&combo.background));
            let white = contrast_ratio(1.0, lum);
            let black = contrast_ratio(lum, 0.0);
            let expected = if white > black { white } else { black };
            assert!((combo.ratio - expected).abs() < 1e-12);
            assert!(combo.ratio >= 1.0 && combo.ratio <= 21.0);
        }
    }

    // ── Scenario: dark navy, complementary ──────────────────────────

    #[test]
    fn navy_complementary_scenario() {
        let combos = generate_accessible_palette("#1a365d", HarmonyKind::Complementary);

        assert_eq!(combos.len(), 9);
        assert_eq!(combos[0].background, "#1a365d");
        assert!(combos[0].is_base_color);

        // Dark navy wants white text, comfortably AAA.
        assert_eq!(combos[0].text, "#ffffff");
        assert_eq!(combos[0].wcag_level, WcagLevel::Aaa);

        assert!(
            combos.iter().any(|c| c.name == "Complementary"),
            "no Complementary entry in {:?}",
            combos.iter().map(|c| c.name.clone()).collect::<Vec<_>>()
        );
    }

    // ── Scenario: bright yellow, monochromatic ──────────────────────

    #[test]
    fn yellow_monochromatic_scenario() {
        let combos = generate_accessible_palette("#ffff00", HarmonyKind::Monochromatic);

        assert_eq!(combos[0].background, "#ffff00");
        // Bright yellow contrasts far better with black than white.
        assert_eq!(combos[0].text, "#000000");
        assert_eq!(combos.len(), 9);
    }

    // ── Fallback behavior ───────────────────────────────────────────

    #[test]
    fn malformed_hex_degrades_to_black() {
        let combos = generate_accessible_palette("not-a-color", HarmonyKind::Complementary);
        assert_eq!(combos[0].background, "#000000");
        assert_eq!(combos[0].text, "#ffffff");
        assert!((combos[0].ratio - 21.0).abs() < 1e-9);
        assert_eq!(combos[0].wcag_level, WcagLevel::Aaa);
    }

    // ── Relationship names ──────────────────────────────────────────

    fn hsl(h: f64, s: f64, l: f64) -> Hsl {
        Hsl { h, s, l }
    }

    #[test]
    fn complementary_band() {
        let base = hsl(210.0, 60.0, 40.0);
        assert_eq!(relationship_name(base, hsl(30.0, 60.0, 40.0), HarmonyKind::Complementary), "Complementary");
        assert_eq!(relationship_name(base, hsl(40.0, 60.0, 40.0), HarmonyKind::Complementary), "Complementary");
    }

    #[test]
    fn analogous_beats_larger_bands() {
        let base = hsl(210.0, 60.0, 40.0);
        assert_eq!(relationship_name(base, hsl(180.0, 60.0, 40.0), HarmonyKind::Analogous), "Analogous");
        assert_eq!(relationship_name(base, hsl(240.0, 60.0, 40.0), HarmonyKind::Analogous), "Analogous");
    }

    #[test]
    fn triadic_band() {
        let base = hsl(210.0, 60.0, 40.0);
        assert_eq!(relationship_name(base, hsl(90.0, 60.0, 40.0), HarmonyKind::Triadic), "Triadic");
        assert_eq!(relationship_name(base, hsl(330.0, 60.0, 40.0), HarmonyKind::Triadic), "Triadic");
    }

    #[test]
    fn triadic_shadows_tetradic_at_240() {
        // Both bands test hue_diff ≈ 240; the earlier guard wins.
        let base = hsl(300.0, 60.0, 40.0);
        assert_eq!(relationship_name(base, hsl(60.0, 60.0, 40.0), HarmonyKind::Tetradic), "Triadic");
    }

    #[test]
    fn split_complementary_band() {
        let base = hsl(210.0, 60.0, 40.0);
        assert_eq!(
            relationship_name(base, hsl(60.0, 60.0, 40.0), HarmonyKind::SplitComplementary),
            "Split Complementary"
        );
    }

    #[test]
    fn square_band() {
        let base = hsl(300.0, 60.0, 40.0);
        assert_eq!(relationship_name(base, hsl(30.0, 60.0, 40.0), HarmonyKind::Square), "Square");
    }

    #[test]
    fn lighter_and_darker_base() {
        let base = hsl(210.0, 60.0, 40.0);
        assert_eq!(relationship_name(base, hsl(210.0, 60.0, 60.0), HarmonyKind::Complementary), "Lighter Base");
        assert_eq!(relationship_name(base, hsl(210.0, 60.0, 20.0), HarmonyKind::Complementary), "Darker Base");
        assert_eq!(relationship_name(base, hsl(212.0, 60.0, 42.0), HarmonyKind::Complementary), "Base");
    }

    #[test]
    fn monochromatic_saturation_labels() {
        let base = hsl(210.0, 50.0, 40.0);
        assert_eq!(
            relationship_name(base, hsl(210.0, 80.0, 40.0), HarmonyKind::Monochromatic),
            "More Saturated"
        );
        assert_eq!(
            relationship_name(base, hsl(210.0, 20.0, 40.0), HarmonyKind::Monochromatic),
            "Less Saturated"
        );
        // Outside monochromatic, saturation is ignored.
        assert_eq!(
            relationship_name(base, hsl(210.0, 80.0, 40.0), HarmonyKind::Complementary),
            "Base"
        );
    }

    #[test]
    fn fallback_is_harmony_label() {
        // hue_diff = 42 lands between the analogous and tetradic bands.
        let base = hsl(210.0, 60.0, 40.0);
        assert_eq!(
            relationship_name(base, hsl(168.0, 60.0, 40.0), HarmonyKind::All),
            "Mixed"
        );
        assert_eq!(
            relationship_name(base, hsl(168.0, 60.0, 40.0), HarmonyKind::Monochromatic),
            "Monochromatic"
        );
    }
}
