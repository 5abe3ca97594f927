//! # ac-palette — accessible palette engine
//!
//! Turns one base color and a harmony choice into a ranked list of
//! background/text combinations, each graded against the WCAG contrast
//! thresholds.
//!
//! # Architecture
//!
//! ```text
//! base hex + HarmonyKind
//!     │
//!     ▼
//! harmony.rs:   candidate hex list (fixed hue offsets + lightness math)
//!     │
//!     ▼
//! normalize.rs: exactly 6 or 9 colors, base color pinned first
//!     │
//!     ▼
//! combine.rs:   black/white text pick + WCAG grade + relationship name
//!     │
//!     ▼
//! ranked output: base first, then AAA → AA → Fail by descending ratio
//! ```
//!
//! The whole pipeline is pure and synchronous: no I/O, no shared state,
//! safe to call concurrently. Each invocation allocates its own locals
//! and returns an owned `Vec<ColorCombination>`.

// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod combine;
pub mod harmony;
pub mod normalize;
pub mod wcag;

pub use combine::{ColorCombination, generate_accessible_palette};
pub use harmony::HarmonyKind;
pub use wcag::WcagLevel;
