//! WCAG 2.1 compliance levels for contrast ratios.
//!
//! The published thresholds, no interpolation or partial credit:
//!
//! | Context                          | AAA   | AA    | Fail  |
//! |----------------------------------|-------|-------|-------|
//! | UI component / graphical object  | —     | ≥ 3   | < 3   |
//! | Large text (≥18pt / ≥14pt bold)  | ≥ 4.5 | ≥ 3   | < 3   |
//! | Normal text (default)            | ≥ 7   | ≥ 4.5 | < 4.5 |
//!
//! AA is the ceiling for UI components — the guidelines define no AAA
//! tier for non-text contrast.

use std::fmt;

use serde::Serialize;

/// A WCAG compliance grade for one contrast ratio.
///
/// Variants are declared worst-to-best so the derived `Ord` gives
/// `Fail < Aa < Aaa`, which is what the ranking stage sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WcagLevel {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Classify a contrast ratio under the given text context.
    ///
    /// The UI-component flag dominates: when both flags are set, the
    /// component thresholds apply and AA is the best possible grade.
    #[must_use]
    pub fn classify(ratio: f64, is_large_text: bool, is_ui_component: bool) -> Self {
        if is_ui_component {
            if ratio >= 3.0 { Self::Aa } else { Self::Fail }
        } else if is_large_text {
            if ratio >= 4.5 {
                Self::Aaa
            } else if ratio >= 3.0 {
                Self::Aa
            } else {
                Self::Fail
            }
        } else if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    /// The grade as WCAG spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
