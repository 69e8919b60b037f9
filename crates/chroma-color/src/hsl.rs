// SPDX-License-Identifier: MIT
//
// Rgb ⇄ Hsl — the cylindrical space used for harmony rotation.
//
// Hue comes from whichever channel is maximal. Achromatic inputs (all
// channels equal) have an undefined hue; by convention we report h = 0
// and s = 0 instead of dividing by zero. Saturation branches on whether
// lightness is above 0.5 so the denominator never approaches zero near
// black or white.

use crate::hue::{normalize_hue, rotate_hue};
use crate::rgb::Rgb;

/// A color in HSL space.
///
/// - `h`: hue in degrees, [0, 360)
/// - `s`: saturation, [0, 1]
/// - `l`: lightness, [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color, normalizing hue and clamping `s`/`l` to [0, 1].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp01(s),
            l: clamp01(l),
        }
    }

    /// Same saturation and lightness, different hue.
    #[must_use]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.l)
    }

    /// Rotate the hue by `degrees` (either sign).
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(rotate_hue(self.h, degrees), self.s, self.l)
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

/// Convert RGB to HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d <= 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    Hsl {
        h: hue_from_channels(r, g, b, d),
        s,
        l,
    }
}

/// Convert HSL to RGB.
///
/// Hue is normalized and `s`/`l` are clamped to [0, 1] first, so values
/// coming straight from UI controls are safe to pass.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = normalize_hue(h) / 360.0;
    let s = clamp01(s);
    let l = clamp01(l);

    if s <= 0.0 {
        return Rgb::from_unit(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { s.mul_add(-l, l + s) };
    let p = 2.0f64.mul_add(l, -q);

    Rgb::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Hue in degrees from normalized channels, given a non-zero `max - min`.
///
/// Shared with the HSV conversion, which derives hue identically.
#[inline]
pub(crate) fn hue_from_channels(r: f64, g: f64, b: f64, d: f64) -> f64 {
    let h = if r >= g && r >= b {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if g >= b {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    normalize_hue(h * 60.0)
}

/// One channel of the HSL → RGB transform. `t` is hue in turns, offset.
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Clamp to [0, 1]; NaN becomes 0.
#[inline]
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
