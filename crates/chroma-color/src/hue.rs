// SPDX-License-Identifier: MIT
//
// Hue angle arithmetic.
//
// Hue is cyclic, so every rotation result is folded back into [0, 360).
// This is the only place that folding is implemented; HSL, HSV and the
// harmony generator all go through it.

/// Normalize a hue angle to the range [0, 360).
///
/// Works for any finite input, including large negative offsets:
/// `((h mod 360) + 360) mod 360`.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = ((h % 360.0) + 360.0) % 360.0;
    // Tiny negative inputs round up to exactly 360.0 after the shift.
    if h >= 360.0 { 0.0 } else { h }
}

/// Rotate a hue by `degrees` (either sign) and normalize the result.
#[inline]
#[must_use]
pub fn rotate_hue(h: f64, degrees: f64) -> f64 {
    normalize_hue(h + degrees)
}

/// Absolute hue difference along the shortest arc, in [0, 180].
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}
