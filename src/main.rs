// SPDX-License-Identifier: MIT
//
// acpal — accessible color palette generator.
//
// This is the binary that wires together the two crates:
//
//   ac-color   → hex/RGB/HSL model, WCAG luminance + contrast math
//   ac-palette → harmony generation, normalization, grading, ranking
//
// A generation run flows:
//
//   base hex + harmony → candidates → normalized palette (6 or 9)
//       → combinations (text pick + WCAG grade) → ranked output
//
// The binary itself is a thin presentation layer: parse arguments, call
// `generate_accessible_palette`, and render the result as an ANSI
// truecolor swatch table, JSON, or a plain-text report file.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use rand::Rng;

use ac_color::Rgb;
use ac_palette::{ColorCombination, HarmonyKind, generate_accessible_palette};

// ─── CLI ────────────────────────────────────────────────────────────────────

/// Generate a WCAG-graded color palette from one base color.
#[derive(Parser)]
#[command(name = "acpal", version, about = "Accessible color palette generator")]
struct Cli {
    /// Base color as 6-digit hex, with or without the leading '#'.
    base: Option<String>,

    /// Harmony strategy used to derive the palette.
    #[arg(short = 'H', long, default_value = "complementary")]
    harmony: String,

    /// Pick a random base color instead of BASE.
    #[arg(long, conflicts_with = "base")]
    random: bool,

    /// Emit the combinations as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Write a plain-text report to PATH.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Reject malformed hex instead of falling back to black.
    #[arg(long)]
    strict: bool,

    /// List the available harmony names and exit.
    #[arg(long)]
    list_harmonies: bool,

    /// Disable ANSI colors in the swatch table.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_harmonies {
        for kind in HarmonyKind::all() {
            println!("{}", kind.name());
        }
        return Ok(());
    }

    let harmony = HarmonyKind::from_name(&cli.harmony)
        .ok_or_else(|| anyhow!("unknown harmony '{}' (see --list-harmonies)", cli.harmony))?;

    let base = resolve_base(&cli)?;
    let combinations = generate_accessible_palette(&base, harmony);

    if let Some(path) = &cli.export {
        fs::write(path, text_report(&combinations))
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&combinations)?);
    } else {
        print_table(&combinations, !cli.no_color);
    }

    Ok(())
}

/// Resolve the base color from the CLI: positional hex, or --random.
fn resolve_base(cli: &Cli) -> Result<String> {
    if cli.random {
        let mut rng = rand::rng();
        let rgb = Rgb::new(rng.random(), rng.random(), rng.random());
        return Ok(rgb.to_hex());
    }

    let Some(base) = &cli.base else {
        bail!("missing base color (pass a hex value or --random)");
    };

    if cli.strict {
        let rgb = Rgb::parse(base).with_context(|| format!("invalid base color '{base}'"))?;
        return Ok(rgb.to_hex());
    }

    Ok(base.clone())
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Render the swatch table: one row per combination, background and
/// text painted with 24-bit ANSI colors when `color` is set.
fn print_table(combinations: &[ColorCombination], color: bool) {
    for combo in combinations {
        let swatch = if color {
            let bg = Rgb::from_hex(&combo.background);
            let fg = Rgb::from_hex(&combo.text);
            format!(
                "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {} on {} \x1b[0m",
                bg.r, bg.g, bg.b, fg.r, fg.g, fg.b, combo.text, combo.background
            )
        } else {
            format!(" {} on {} ", combo.text, combo.background)
        };

        let level = combo.wcag_level.as_str();
        println!("{swatch}  {:>5.2}:1  {level:<4}  {}", combo.ratio, combo.name);
    }
}

/// Render the plain-text report: one block per combination.
fn text_report(combinations: &[ColorCombination]) -> String {
    let mut out = String::new();
    for combo in combinations {
        let _ = writeln!(out, "Name: {}", combo.name);
        let _ = writeln!(out, "Background: {}", combo.background);
        let _ = writeln!(out, "Text: {}", combo.text);
        let _ = writeln!(out, "Contrast Ratio: {:.2}", combo.ratio);
        let _ = writeln!(out, "WCAG Level: {}", combo.wcag_level);
        let _ = writeln!(out);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
