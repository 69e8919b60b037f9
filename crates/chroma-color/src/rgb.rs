// SPDX-License-Identifier: MIT
//
// Rgb — the canonical additive-color representation.
//
// Channels are stored as `u8`, so a constructed `Rgb` can never hold an
// out-of-range component. Floating-point producers (conversions, mixers)
// go through `from_channels` / `from_unit`, which clamp and round to the
// nearest integer rather than truncating.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hex::{HexCase, format_hex, parse_hex};

/// An sRGB color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use chroma_color::Rgb;
///
/// let teal: Rgb = "#6fb7b2".parse().unwrap();
/// assert_eq!(teal, Rgb::new(111, 183, 178));
/// assert_eq!(teal.to_string(), "#6fb7b2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 0–255 floating-point channels.
    ///
    /// Each channel is rounded to the nearest integer and clamped into
    /// [0, 255]. Non-finite values clamp to 0.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
    }

    /// Create a color from normalized 0.0–1.0 channels.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::from_channels(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels as a tuple.
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Format as `#rrggbb` (or `#RRGGBB`).
    #[must_use]
    pub fn to_hex(self, case: HexCase) -> String {
        format_hex(self, case)
    }

    /// `true` when all three channels are equal (a gray, black or white).
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(*self, HexCase::Lower))
    }
}

/// Round a 0–255 float to the nearest channel value, clamping first.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(v: f64) -> u8 {
    if !v.is_finite() {
        tracing::trace!(value = v, "non-finite channel clamped to 0");
        return 0;
    }
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before the cast.
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_channels_rounds_to_nearest() {
        assert_eq!(Rgb::from_channels(10.4, 10.5, 10.6), Rgb::new(10, 11, 11));
    }

    #[test]
    fn from_channels_clamps() {
        assert_eq!(Rgb::from_channels(-20.0, 300.0, 255.4), Rgb::new(0, 255, 255));
    }

    #[test]
    fn from_channels_non_finite_is_zero() {
        assert_eq!(
            Rgb::from_channels(f64::NAN, f64::INFINITY, 12.0),
            Rgb::new(0, 0, 12)
        );
    }

    #[test]
    fn unit_roundtrip() {
        let c = Rgb::new(12, 128, 250);
        let (r, g, b) = c.to_unit();
        assert_eq!(Rgb::from_unit(r, g, b), c);
    }

    #[test]
    fn parse_and_display() {
        let c: Rgb = "#C95A4A".parse().unwrap();
        assert_eq!(c, Rgb::new(201, 90, 74));
        assert_eq!(c.to_string(), "#c95a4a");
    }

    #[test]
    fn achromatic_detection() {
        assert!(Rgb::BLACK.is_achromatic());
        assert!(Rgb::new(77, 77, 77).is_achromatic());
        assert!(!Rgb::new(77, 78, 77).is_achromatic());
    }
}
