//! Seeded random colors for the "random base" and "add stop" actions.
//!
//! Deterministic per seed so results are reproducible in tests and from
//! the command line.

use chroma_color::{Rgb, hsl_to_rgb};

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed 0 would lock the generator at 0, so it is bumped to 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random f64 in [lo, hi].
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let t = f64::from(self.next_u32()) / f64::from(u32::MAX);
        (hi - lo).mul_add(t, lo)
    }

    /// Any 24-bit color.
    pub fn rgb(&mut self) -> Rgb {
        let [_, r, g, b] = self.next_u32().to_be_bytes();
        Rgb::new(r, g, b)
    }

    /// A color with random hue and tone drawn from `range`.
    pub fn base_color(&mut self, range: &ToneRange) -> Rgb {
        let h = self.range_f64(0.0, 360.0);
        let s = self.range_f64(range.saturation.0, range.saturation.1);
        let l = self.range_f64(range.lightness.0, range.lightness.1);
        hsl_to_rgb(h, s, l)
    }
}

/// Saturation and lightness intervals for random base colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRange {
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
}

impl ToneRange {
    /// Palette wheel: moderately saturated mid tones.
    pub const WHEEL: Self = Self {
        saturation: (0.55, 0.70),
        lightness: (0.54, 0.66),
    };

    /// Harmony rings: a wider saturation spread.
    pub const RINGS: Self = Self {
        saturation: (0.5, 0.8),
        lightness: (0.5, 0.65),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_color::Hsl;
    use pretty_assertions::assert_eq;

    #[test]
    fn deterministic_per_seed() {
        let mut a = Xorshift32::new(42);
        let mut b = Xorshift32::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_still_advances() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..1000 {
            let v = rng.range_f64(0.25, 0.75);
            assert!((0.25..=0.75).contains(&v), "{v}");
        }
    }

    #[test]
    fn base_color_tone_in_range() {
        let mut rng = Xorshift32::new(99);
        for _ in 0..200 {
            let hsl = Hsl::from(rng.base_color(&ToneRange::WHEEL));
            // Quantization to 8 bits moves s/l slightly.
            assert!(hsl.s > 0.50 && hsl.s < 0.75, "s = {}", hsl.s);
            assert!(hsl.l > 0.52 && hsl.l < 0.68, "l = {}", hsl.l);
        }
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(Xorshift32::new(1).rgb(), Xorshift32::new(2).rgb());
    }
}
