//! Palette records and curated swatches.
//!
//! A [`Palette`] is an opaque result record produced outside the engine
//! (for example by a generative service) and only displayed or copied by
//! consumers. This module decodes such records defensively: a malformed
//! document yields no palettes rather than an error, and records that do
//! not carry exactly five valid hex colors are dropped.

use std::sync::LazyLock;

use chroma_color::{Rgb, hex::is_valid_hex};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of colors a well-formed palette carries.
pub const PALETTE_SIZE: usize = 5;

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    /// One-sentence mood description.
    pub description: String,
    /// Hex color strings, in display order.
    pub colors: Vec<String>,
}

impl Palette {
    /// Exactly [`PALETTE_SIZE`] colors, all valid hex.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.colors.len() == PALETTE_SIZE && self.colors.iter().all(|c| is_valid_hex(c))
    }

    /// Parsed colors. Invalid entries are skipped.
    #[must_use]
    pub fn rgb_colors(&self) -> Vec<Rgb> {
        self.colors.iter().filter_map(|c| c.parse().ok()).collect()
    }
}

/// Decode a JSON array of palettes.
///
/// Never fails: a document that does not decode produces an empty list
/// (logged at `warn`), and ill-formed records are filtered out.
#[must_use]
pub fn palettes_from_json(json: &str) -> Vec<Palette> {
    let palettes: Vec<Palette> = match serde_json::from_str(json) {
        Ok(palettes) => palettes,
        Err(err) => {
            tracing::warn!(%err, "palette document did not decode");
            return Vec::new();
        }
    };

    palettes
        .into_iter()
        .filter(|palette| {
            let ok = palette.is_well_formed();
            if !ok {
                tracing::debug!(name = %palette.name, colors = palette.colors.len(), "dropping ill-formed palette");
            }
            ok
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Hex extraction
// ---------------------------------------------------------------------------

static HEX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    // Exactly 6 or 3 digits; longer runs (alpha, hashes) are not colors.
    Regex::new(r"#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b").expect("static pattern compiles")
});

/// All `#rrggbb` / `#rgb` colors appearing in `text`, in order.
#[must_use]
pub fn extract_hex_colors(text: &str) -> Vec<Rgb> {
    HEX_TOKEN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

// ---------------------------------------------------------------------------
// Reference swatches
// ---------------------------------------------------------------------------

/// The curated reference palette offered as quick base colors.
pub const REFERENCE_SWATCHES: [&str; 23] = [
    "#C95A4A", "#E39A57", "#F0C35A", "#6FAE8C", "#6FB7B2", "#5E8FBF", "#8A7BB8",
    "#9FC3D8", "#BFD7E6", "#F2D6A8",
    "#D87C6A", "#E7A092", "#F3D56B", "#5A78A8", "#9A8EC1", "#6E8F7B",
    "#E8CFAF", "#E3B38A", "#8FA9B5",
    "#F7E6C9", "#CBB8A3", "#A9BFD0", "#7C96A8",
];

/// Default base color for the wheel and rings views.
pub const DEFAULT_BASE: &str = "#5E8FBF";

/// [`REFERENCE_SWATCHES`] parsed.
#[must_use]
pub fn reference_swatches() -> Vec<Rgb> {
    REFERENCE_SWATCHES.iter().filter_map(|hex| hex.parse().ok()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
