// SPDX-License-Identifier: MIT
//
// Rgb ⇄ Hsv — the alternate cylindrical space.
//
// HSV is a display readout, not an authoritative store: colors are kept
// as Rgb/hex and converted here on demand. Value is the maximal channel;
// saturation is zero at black instead of dividing by zero.

use crate::hsl::{clamp01, hue_from_channels};
use crate::hue::normalize_hue;
use crate::rgb::Rgb;

/// A color in HSV space.
///
/// - `h`: hue in degrees, [0, 360)
/// - `s`: saturation, [0, 1]
/// - `v`: value, [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create an HSV color, normalizing hue and clamping `s`/`v` to [0, 1].
    #[must_use]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp01(s),
            v: clamp01(v),
        }
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// Convert RGB to HSV.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max <= 0.0 { 0.0 } else { d / max };
    let h = if d <= 0.0 { 0.0 } else { hue_from_channels(r, g, b, d) };

    Hsv { h, s, v: max }
}

/// Convert HSV to RGB. Inputs are normalized/clamped first.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = normalize_hue(h) / 60.0;
    let s = clamp01(s);
    let v = clamp01(v);

    // h is in [0, 6), so the sector index fits in 0..=5.
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * f.mul_add(-s, 1.0);
    let t = v * (1.0 - f).mul_add(-s, 1.0);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::from_unit(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn black_has_zero_saturation() {
        assert_eq!(rgb_to_hsv(Rgb::BLACK), Hsv { h: 0.0, s: 0.0, v: 0.0 });
    }

    #[test]
    fn white_and_gray() {
        assert_eq!(rgb_to_hsv(Rgb::WHITE), Hsv { h: 0.0, s: 0.0, v: 1.0 });
        let gray = rgb_to_hsv(Rgb::new(64, 64, 64));
        assert!(approx_eq(gray.s, 0.0, 1e-12));
        assert!(approx_eq(gray.v, 64.0 / 255.0, 1e-12));
    }

    #[test]
    fn saturated_primary() {
        let hsv = rgb_to_hsv(Rgb::new(0, 0, 255));
        assert!(approx_eq(hsv.h, 240.0, 1e-9));
        assert!(approx_eq(hsv.s, 1.0, 1e-12));
        assert!(approx_eq(hsv.v, 1.0, 1e-12));
    }

    #[test]
    fn shares_hue_with_hsl() {
        let c = Rgb::new(0xe3, 0x9a, 0x57);
        let hsv = rgb_to_hsv(c);
        let hsl = crate::hsl::rgb_to_hsl(c);
        assert!(approx_eq(hsv.h, hsl.h, 1e-12));
    }

    #[test]
    fn inverse_each_sector() {
        for (h, expected) in [
            (0.0, Rgb::new(255, 0, 0)),
            (60.0, Rgb::new(255, 255, 0)),
            (120.0, Rgb::new(0, 255, 0)),
            (180.0, Rgb::new(0, 255, 255)),
            (240.0, Rgb::new(0, 0, 255)),
            (300.0, Rgb::new(255, 0, 255)),
        ] {
            assert_eq!(hsv_to_rgb(h, 1.0, 1.0), expected, "hue {h}");
        }
    }

    #[test]
    fn inverse_clamps_and_wraps() {
        assert_eq!(hsv_to_rgb(-120.0, 3.0, 1.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(10.0, 0.5, -1.0), Rgb::BLACK);
    }

    #[test]
    fn roundtrip_swatch() {
        let c = Rgb::new(0x6f, 0xb7, 0xb2);
        assert_eq!(Hsv::from(c).to_rgb(), c);
    }
}
