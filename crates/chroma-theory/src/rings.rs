//! Harmony rings — concentric rings, one per harmony scheme.
//!
//! ```text
//!   size  scheme
//!    20%  base
//!    35%  complementary
//!    50%  triadic
//!    65%  tetradic
//!    80%  analogous
//!    95%  split-complementary
//! ```
//!
//! Every ring uses the [`HarmonyPolicy::RINGS`] tone so segments stay
//! legible even for near-gray bases. A ring is split into equal segments
//! and serialized as a hard-stop conic gradient.

use chroma_color::{HexCase, Rgb};

use crate::harmony::{HarmonyPolicy, HarmonyScheme, base_tone};

/// One ring of the display.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub scheme: HarmonyScheme,
    /// Diameter as a percentage of the container.
    pub size: f64,
    /// Segment hues, base first.
    pub hues: Vec<f64>,
    /// Segment colors, aligned with `hues`.
    pub colors: Vec<Rgb>,
}

impl Ring {
    /// Angular width of each segment in degrees.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn segment_angle(&self) -> f64 {
        360.0 / self.colors.len().max(1) as f64
    }

    /// Offset of the ring from the container edge, in percent.
    #[must_use]
    pub fn inset(&self) -> f64 {
        (100.0 - self.size) / 2.0
    }

    /// `conic-gradient(from 0deg, <hex> <start>% <end>%, ...)` with equal,
    /// hard-edged segments.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn conic_gradient(&self) -> String {
        let n = self.colors.len().max(1) as f64;
        let segments = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let start = i as f64 * 100.0 / n;
                let end = (i + 1) as f64 * 100.0 / n;
                format!("{} {start}% {end}%", color.to_hex(HexCase::Lower))
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("conic-gradient(from 0deg, {segments})")
    }
}

/// Ring diameters, innermost first, aligned with [`HarmonyScheme::ALL`].
pub const RING_SIZES: [f64; 6] = [20.0, 35.0, 50.0, 65.0, 80.0, 95.0];

/// Build all six rings for `base` with the default rings policy.
#[must_use]
pub fn harmony_rings(base: Rgb) -> Vec<Ring> {
    harmony_rings_with(base, &HarmonyPolicy::RINGS)
}

/// Build all six rings under an explicit policy.
#[must_use]
pub fn harmony_rings_with(base: Rgb, policy: &HarmonyPolicy) -> Vec<Ring> {
    let tone = base_tone(base, policy);
    HarmonyScheme::ALL
        .iter()
        .zip(RING_SIZES)
        .map(|(&scheme, size)| {
            let hues = scheme.hues(tone.h);
            let colors = hues.iter().map(|&h| tone.with_hue(h).to_rgb()).collect();
            Ring {
                scheme,
                size,
                hues,
                colors,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_color::Hsl;
    use pretty_assertions::assert_eq;

    fn rings() -> Vec<Ring> {
        harmony_rings(Rgb::new(0x5e, 0x8f, 0xbf))
    }

    #[test]
    fn six_rings_growing_outward() {
        let rings = rings();
        assert_eq!(rings.len(), 6);
        let sizes: Vec<f64> = rings.iter().map(|r| r.size).collect();
        assert_eq!(sizes, RING_SIZES.to_vec());
        assert_eq!(rings[3].scheme, HarmonyScheme::Tetradic);
    }

    #[test]
    fn segment_counts() {
        let counts: Vec<usize> = rings().iter().map(|r| r.colors.len()).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 3, 3]);
    }

    #[test]
    fn tone_respects_rings_policy() {
        // A washed-out base still produces saturated mid-tone rings.
        for ring in harmony_rings(Rgb::new(0xe8, 0xe4, 0xe0)) {
            for color in &ring.colors {
                let hsl = Hsl::from(*color);
                assert!(hsl.s > 0.45, "{color}: s = {}", hsl.s);
                assert!((0.44..=0.66).contains(&hsl.l), "{color}: l = {}", hsl.l);
            }
        }
    }

    #[test]
    fn geometry() {
        let rings = rings();
        assert!((rings[0].inset() - 40.0).abs() < f64::EPSILON);
        assert!((rings[3].segment_angle() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn conic_segments_are_equal() {
        let ring = Ring {
            scheme: HarmonyScheme::Complementary,
            size: 35.0,
            hues: vec![0.0, 180.0],
            colors: vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)],
        };
        assert_eq!(
            ring.conic_gradient(),
            "conic-gradient(from 0deg, #ff0000 0% 50%, #00ffff 50% 100%)"
        );
    }

    #[test]
    fn base_ring_is_solid() {
        let ring = &rings()[0];
        assert!(ring.conic_gradient().ends_with(" 0% 100%)"));
    }
}
