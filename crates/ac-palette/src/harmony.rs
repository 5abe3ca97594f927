//! Harmony generators — fixed hue offsets and lightness/saturation
//! deltas applied to one base color.
//!
//! Each harmony takes the base color's HSL triple and returns an
//! ordered list of candidate hex colors, base first. Candidate counts
//! vary by harmony (6–9); the normalizer trims or extends the list to
//! exactly 6 or 9 afterwards.
//!
//! Lightness deltas clamp to [10, 90] so no candidate collapses into
//! near-black or near-white, except the monochromatic ±30 ladder which
//! deliberately reaches further and clamps to [5, 95]. Saturation
//! clamps to [0, 100]. Hue arithmetic wraps mod 360.

use ac_color::Hsl;

/// The harmony strategy used to derive a palette from one base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// Opposite hues (180° apart), with lightness variants of both ends,
    /// one desaturated base, and a 90° accent.
    Complementary,
    /// Neighboring hues at ±15° and ±30°, plus base variants.
    Analogous,
    /// 120° spacing, each hue with a lighter and a desaturated variant.
    Triadic,
    /// The complement and its ±30° neighbors.
    SplitComplementary,
    /// Single hue — lightness and saturation ladders only.
    Monochromatic,
    /// Rectangular harmony: 0°, 60°, 180°, 240°.
    Tetradic,
    /// Evenly spaced harmony: 0°, 90°, 180°, 270°.
    Square,
    /// One sample from every other harmony, no deep variants.
    All,
}

impl HarmonyKind {
    /// Generate the ordered candidate list for this harmony.
    ///
    /// The first candidate is always derived from the base itself. All
    /// entries are lowercase `#rrggbb` strings.
    #[must_use]
    pub fn generate(self, base: Hsl) -> Vec<String> {
        generate(self, base)
    }

    /// Machine-readable name of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
            Self::All => "all",
        }
    }

    /// Human-readable label (used as the fallback relationship name).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::SplitComplementary => "Split Complementary",
            Self::Monochromatic => "Monochromatic",
            Self::Tetradic => "Tetradic",
            Self::Square => "Square",
            Self::All => "Mixed",
        }
    }

    /// Parse a harmony from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All available harmony kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::SplitComplementary,
            Self::Monochromatic,
            Self::Tetradic,
            Self::Square,
            Self::All,
        ]
    }
}

// ─── Candidate construction ──────────────────────────────────────────────────

/// Lightness shifted by `delta`, clamped to the general [10, 90] band.
fn lit(color: Hsl, delta: f64) -> Hsl {
    color.with_lightness((color.l + delta).clamp(10.0, 90.0))
}

/// Lightness shifted by `delta` with the wider [5, 95] clamp used by
/// the monochromatic ladder.
fn lit_wide(color: Hsl, delta: f64) -> Hsl {
    color.with_lightness((color.l + delta).clamp(5.0, 95.0))
}

/// Saturation shifted by `delta`.
fn sat(color: Hsl, delta: f64) -> Hsl {
    color.with_saturation(color.s + delta)
}

/// Render one candidate as a hex string.
fn hex(color: Hsl) -> String {
    color.to_rgb().to_hex()
}

/// Core generation dispatch.
fn generate(kind: HarmonyKind, base: Hsl) -> Vec<String> {
    match kind {
        HarmonyKind::Complementary => {
            let comp = base.shift_hue(180.0);
            vec![
                hex(base),
                hex(comp),
                hex(lit(base, 15.0)),
                hex(lit(base, -15.0)),
                hex(lit(comp, 15.0)),
                hex(lit(comp, -15.0)),
                hex(sat(base, -30.0)),
                hex(base.shift_hue(90.0)),
            ]
        }
        HarmonyKind::Analogous => vec![
            hex(base),
            hex(base.shift_hue(-30.0)),
            hex(base.shift_hue(-15.0)),
            hex(base.shift_hue(15.0)),
            hex(base.shift_hue(30.0)),
            hex(lit(base, 15.0)),
            hex(lit(base, -15.0)),
            hex(sat(base, -30.0)),
        ],
        HarmonyKind::Triadic => {
            let hues = [base, base.shift_hue(120.0), base.shift_hue(240.0)];
            let mut v = Vec::with_capacity(9);
            v.extend(hues.iter().map(|&c| hex(c)));
            v.extend(hues.iter().map(|&c| hex(lit(c, 15.0))));
            v.extend(hues.iter().map(|&c| hex(sat(c, -20.0))));
            v
        }
        HarmonyKind::SplitComplementary => vec![
            hex(base),
            hex(base.shift_hue(150.0)),
            hex(base.shift_hue(180.0)),
            hex(base.shift_hue(210.0)),
            hex(lit(base, 15.0)),
            hex(lit(base, -15.0)),
        ],
        HarmonyKind::Monochromatic => vec![
            hex(base),
            hex(lit(base, 15.0)),
            hex(lit(base, -15.0)),
            hex(lit_wide(base, 30.0)),
            hex(lit_wide(base, -30.0)),
            hex(sat(base, 30.0)),
            hex(sat(base, -30.0)),
        ],
        HarmonyKind::Tetradic => {
            let hues = [
                base,
                base.shift_hue(60.0),
                base.shift_hue(180.0),
                base.shift_hue(240.0),
            ];
            let mut v = Vec::with_capacity(8);
            v.extend(hues.iter().map(|&c| hex(c)));
            v.extend(hues.iter().map(|&c| hex(sat(lit(c, 15.0), -10.0))));
            v
        }
        HarmonyKind::Square => {
            let hues = [
                base,
                base.shift_hue(90.0),
                base.shift_hue(180.0),
                base.shift_hue(270.0),
            ];
            let mut v = Vec::with_capacity(8);
            v.extend(hues.iter().map(|&c| hex(c)));
            v.extend(hues.iter().map(|&c| hex(sat(lit(c, 15.0), -10.0))));
            v
        }
        HarmonyKind::All => vec![
            hex(base),
            hex(base.shift_hue(180.0)),
            hex(base.shift_hue(120.0)),
            hex(base.shift_hue(240.0)),
            hex(base.shift_hue(30.0)),
            hex(base.shift_hue(-30.0)),
            hex(base.shift_hue(150.0)),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
