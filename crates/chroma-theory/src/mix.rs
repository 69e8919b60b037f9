//! Two-color blending.
//!
//! - **Additive** (light, screens): straight linear interpolation per RGB
//!   channel, `c1·w + c2·(1 − w)`.
//! - **Subtractive** (paint, pigment): the same interpolation on normalized
//!   channels, then raised to a fixed gamma before rescaling. This is an
//!   approximation that merely darkens mixtures the way pigments tend to;
//!   it is not a physical model, has no inverse, and the only law it obeys
//!   is monotonicity in `w`.
//!
//! Both clamp the weight to [0, 1] and round the result to the nearest
//! integer channel.

use chroma_color::Rgb;

/// Tunables for the subtractive approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixPolicy {
    /// Exponent applied to the interpolated channel.
    pub gamma: f64,
}

impl MixPolicy {
    pub const DEFAULT: Self = Self { gamma: 1.2 };
}

impl Default for MixPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which blending model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixMode {
    Additive,
    Subtractive,
}

/// Blend `c1` and `c2` with `mode`. `w` is the weight of `c1`.
#[must_use]
pub fn mix(mode: MixMode, c1: Rgb, c2: Rgb, w: f64, policy: &MixPolicy) -> Rgb {
    match mode {
        MixMode::Additive => mix_additive(c1, c2, w),
        MixMode::Subtractive => mix_subtractive_with(c1, c2, w, policy),
    }
}

/// Linear RGB interpolation. `w = 1` yields `c1`, `w = 0` yields `c2`.
#[must_use]
pub fn mix_additive(c1: Rgb, c2: Rgb, w: f64) -> Rgb {
    let w1 = clamp_weight(w);
    let w2 = 1.0 - w1;
    let lerp = |a: u8, b: u8| f64::from(a).mul_add(w1, f64::from(b) * w2);
    Rgb::from_channels(lerp(c1.r, c2.r), lerp(c1.g, c2.g), lerp(c1.b, c2.b))
}

/// Pigment-style approximation with the default gamma (1.2).
#[must_use]
pub fn mix_subtractive(c1: Rgb, c2: Rgb, w: f64) -> Rgb {
    mix_subtractive_with(c1, c2, w, &MixPolicy::DEFAULT)
}

/// Pigment-style approximation with an explicit policy.
#[must_use]
pub fn mix_subtractive_with(c1: Rgb, c2: Rgb, w: f64, policy: &MixPolicy) -> Rgb {
    let w1 = clamp_weight(w);
    let w2 = 1.0 - w1;
    let (r1, g1, b1) = c1.to_unit();
    let (r2, g2, b2) = c2.to_unit();
    let blend = |a: f64, b: f64| a.mul_add(w1, b * w2).clamp(0.0, 1.0).powf(policy.gamma) * 255.0;
    Rgb::from_channels(blend(r1, r2), blend(g1, g2), blend(b1, b2))
}

/// Map the mixer slider (0 = all first color, 100 = all second color) to
/// the first color's weight.
#[must_use]
pub fn weight_from_slider(percent: f64) -> f64 {
    clamp_weight((100.0 - percent) / 100.0)
}

#[inline]
fn clamp_weight(w: f64) -> f64 {
    if w.is_nan() {
        tracing::trace!("NaN mix weight treated as 0");
        0.0
    } else {
        w.clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Rgb = Rgb::new(0xc9, 0x5a, 0x4a);
    const BLUE: Rgb = Rgb::new(0x5e, 0x8f, 0xbf);

    // ── Additive ────────────────────────────────────────────────────

    #[test]
    fn additive_boundaries() {
        assert_eq!(mix_additive(RED, BLUE, 1.0), RED);
        assert_eq!(mix_additive(RED, BLUE, 0.0), BLUE);
    }

    #[test]
    fn additive_half_is_rounded_average() {
        // (201+94)/2 = 147.5 → 148, (90+143)/2 = 116.5 → 117, (74+191)/2 = 132.5 → 133
        assert_eq!(mix_additive(RED, BLUE, 0.5), Rgb::new(148, 117, 133));
    }

    #[test]
    fn additive_swap_weights_swaps_roles() {
        assert_eq!(mix_additive(RED, BLUE, 0.3), mix_additive(BLUE, RED, 0.7));
    }

    #[test]
    fn additive_clamps_weight() {
        assert_eq!(mix_additive(RED, BLUE, 1.5), RED);
        assert_eq!(mix_additive(RED, BLUE, -0.5), BLUE);
        assert_eq!(mix_additive(RED, BLUE, f64::NAN), BLUE);
    }

    // ── Subtractive ─────────────────────────────────────────────────

    #[test]
    fn subtractive_darkens_midtones() {
        let gray = Rgb::new(128, 128, 128);
        let out = mix_subtractive(gray, gray, 0.5);
        assert!(out.r < 128, "gamma should darken: {out}");
    }

    #[test]
    fn subtractive_preserves_extremes() {
        assert_eq!(mix_subtractive(Rgb::WHITE, Rgb::WHITE, 0.5), Rgb::WHITE);
        assert_eq!(mix_subtractive(Rgb::BLACK, Rgb::BLACK, 0.5), Rgb::BLACK);
    }

    #[test]
    fn subtractive_known_value() {
        // 255 * (0.5)^1.2 = 110.98...
        let out = mix_subtractive(Rgb::WHITE, Rgb::BLACK, 0.5);
        assert_eq!(out, Rgb::new(111, 111, 111));
    }

    #[test]
    fn subtractive_unit_gamma_matches_additive() {
        let linear = MixPolicy { gamma: 1.0 };
        for w in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let a = mix_subtractive_with(RED, BLUE, w, &linear);
            let b = mix_additive(RED, BLUE, w);
            // Exact .5 midpoints may round either way after normalization.
            assert!(
                a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1,
                "w = {w}: {a} vs {b}"
            );
        }
    }

    #[test]
    fn subtractive_monotonic_in_weight() {
        let mut last = mix_subtractive(Rgb::WHITE, Rgb::BLACK, 0.0).r;
        for step in 1..=20 {
            let w = f64::from(step) / 20.0;
            let r = mix_subtractive(Rgb::WHITE, Rgb::BLACK, w).r;
            assert!(r >= last, "w = {w}: {r} < {last}");
            last = r;
        }
    }

    // ── Dispatch and slider ─────────────────────────────────────────

    #[test]
    fn mode_dispatch() {
        let p = MixPolicy::default();
        assert_eq!(mix(MixMode::Additive, RED, BLUE, 0.4, &p), mix_additive(RED, BLUE, 0.4));
        assert_eq!(
            mix(MixMode::Subtractive, RED, BLUE, 0.4, &p),
            mix_subtractive(RED, BLUE, 0.4)
        );
    }

    #[test]
    fn slider_mapping() {
        assert!((weight_from_slider(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((weight_from_slider(100.0)).abs() < f64::EPSILON);
        assert!((weight_from_slider(25.0) - 0.75).abs() < f64::EPSILON);
        assert!((weight_from_slider(140.0)).abs() < f64::EPSILON);
    }
}
