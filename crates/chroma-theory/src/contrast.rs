//! WCAG 2.x contrast checking.
//!
//! Relative luminance linearizes each sRGB channel with the piecewise WCAG
//! transfer function (linear below 0.03928, power 2.4 above) and weights
//! the channels 0.2126 / 0.7152 / 0.0722. The contrast ratio is
//!
//! ```text
//! (L_lighter + 0.05) / (L_darker + 0.05)      ∈ [1, 21]
//! ```
//!
//! Classification against the pass thresholds is policy, kept in
//! [`WcagThresholds`], not computed.

use std::fmt;

use bitflags::bitflags;
use chroma_color::Rgb;

/// Linearize one normalized sRGB channel using the WCAG threshold.
#[inline]
#[must_use]
pub fn linearize(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG, in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    0.2126f64.mul_add(
        linearize(r),
        0.7152f64.mul_add(linearize(g), 0.0722 * linearize(b)),
    )
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric: argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Thresholds and classification
// ---------------------------------------------------------------------------

/// Minimum ratios for each WCAG success criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WcagThresholds {
    /// AAA for body text (also the "Excellent" grade).
    pub aaa_normal: f64,
    /// AA for body text; AAA for large text.
    pub aa_normal: f64,
    /// AA for large text (18pt+ or 14pt bold).
    pub aa_large: f64,
}

impl WcagThresholds {
    /// The published WCAG 2.x values.
    pub const WCAG2: Self = Self {
        aaa_normal: 7.0,
        aa_normal: 4.5,
        aa_large: 3.0,
    };
}

impl Default for WcagThresholds {
    fn default() -> Self {
        Self::WCAG2
    }
}

bitflags! {
    /// The set of WCAG checks a color pair passes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Compliance: u8 {
        const AA_NORMAL  = 0b0001;
        const AA_LARGE   = 0b0010;
        const AAA_NORMAL = 0b0100;
        const AAA_LARGE  = 0b1000;
    }
}

impl Compliance {
    /// Classify a ratio against `thresholds`.
    #[must_use]
    pub fn assess(ratio: f64, thresholds: &WcagThresholds) -> Self {
        let mut passed = Self::empty();
        if ratio >= thresholds.aa_large {
            passed |= Self::AA_LARGE;
        }
        if ratio >= thresholds.aa_normal {
            passed |= Self::AA_NORMAL | Self::AAA_LARGE;
        }
        if ratio >= thresholds.aaa_normal {
            passed |= Self::AAA_NORMAL;
        }
        passed
    }

    /// Each individual check with its display label, in report order.
    #[must_use]
    pub const fn checks() -> [(Self, &'static str); 4] {
        [
            (Self::AA_NORMAL, "WCAG AA Normal"),
            (Self::AA_LARGE, "WCAG AA Large"),
            (Self::AAA_NORMAL, "WCAG AAA Normal"),
            (Self::AAA_LARGE, "WCAG AAA Large"),
        ]
    }
}

/// Coarse four-step readout of a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    #[must_use]
    pub fn from_ratio(ratio: f64, thresholds: &WcagThresholds) -> Self {
        if ratio >= thresholds.aaa_normal {
            Self::Excellent
        } else if ratio >= thresholds.aa_normal {
            Self::Good
        } else if ratio >= thresholds.aa_large {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ContrastReport
// ---------------------------------------------------------------------------

/// Everything the contrast checker shows for one background/foreground pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub background: Rgb,
    pub foreground: Rgb,
    pub ratio: f64,
    pub compliance: Compliance,
    pub grade: Grade,
}

impl ContrastReport {
    /// Build a report using the given thresholds.
    #[must_use]
    pub fn new(background: Rgb, foreground: Rgb, thresholds: &WcagThresholds) -> Self {
        let ratio = contrast_ratio(background, foreground);
        Self {
            background,
            foreground,
            ratio,
            compliance: Compliance::assess(ratio, thresholds),
            grade: Grade::from_ratio(ratio, thresholds),
        }
    }

    /// Exchange background and foreground. The ratio is unchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            background: self.foreground,
            foreground: self.background,
            ..self
        }
    }

    /// `true` if the pair passes `check`.
    #[must_use]
    pub const fn passes(&self, check: Compliance) -> bool {
        self.compliance.contains(check)
    }

    /// The ratio as shown to users: two decimals, `":1"` suffix.
    #[must_use]
    pub fn ratio_label(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
