//! Color-wheel geometry.
//!
//! The wheel is drawn with 0° at the top, increasing clockwise, in screen
//! coordinates (y grows downward). These helpers convert between pointer
//! offsets, hues and marker positions; none of them touch a display.

use chroma_color::{Hsl, Rgb, normalize_hue};

/// Tone used when a wheel pick does not keep the current color's tone.
pub const DEFAULT_PICK_SATURATION: f64 = 0.55;
pub const DEFAULT_PICK_LIGHTNESS: f64 = 0.58;

/// Marker distance from the wheel center, as a percentage of its size.
pub const MARKER_RADIUS: f64 = 42.0;

/// Hue under a pointer at `(dx, dy)` from the wheel center.
///
/// The center itself has no direction; `atan2(0, 0)` puts it at 90°.
#[must_use]
pub fn hue_at_point(dx: f64, dy: f64) -> f64 {
    normalize_hue(dy.atan2(dx).to_degrees() + 90.0)
}

/// New base color from a wheel pick.
///
/// With `keep_tone` the current color's saturation and lightness are kept
/// (only the hue moves); otherwise the default pick tone is used.
#[must_use]
pub fn pick_on_wheel(current: Rgb, dx: f64, dy: f64, keep_tone: bool) -> Rgb {
    let hue = hue_at_point(dx, dy);
    let (s, l) = if keep_tone {
        let hsl = Hsl::from(current);
        (hsl.s, hsl.l)
    } else {
        (DEFAULT_PICK_SATURATION, DEFAULT_PICK_LIGHTNESS)
    };
    Hsl::new(hue, s, l).to_rgb()
}

/// `(top, left)` percentages for a marker at `hue`, `radius` percent from
/// the center.
#[must_use]
pub fn marker_position(hue: f64, radius: f64) -> (f64, f64) {
    let rad = (hue - 90.0).to_radians();
    (radius.mul_add(rad.sin(), 50.0), radius.mul_add(rad.cos(), 50.0))
}

/// The full-saturation hue ring as a conic gradient, in 30° steps.
#[must_use]
pub fn hue_wheel_gradient() -> String {
    let steps = (0..=12)
        .map(|i| format!("hsl({} 100% 55%)", i * 30))
        .collect::<Vec<_>>()
        .join(", ");
    format!("conic-gradient(from 0deg, {steps})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn compass_points() {
        assert!(approx_eq(hue_at_point(0.0, -10.0), 0.0));
        assert!(approx_eq(hue_at_point(10.0, 0.0), 90.0));
        assert!(approx_eq(hue_at_point(0.0, 10.0), 180.0));
        assert!(approx_eq(hue_at_point(-10.0, 0.0), 270.0));
    }

    #[test]
    fn diagonal() {
        assert!(approx_eq(hue_at_point(5.0, -5.0), 45.0));
    }

    #[test]
    fn pick_default_tone() {
        let picked = pick_on_wheel(Rgb::BLACK, 10.0, 0.0, false);
        let hsl = Hsl::from(picked);
        assert!((hsl.h - 90.0).abs() < 1.0, "h = {}", hsl.h);
        assert!((hsl.s - DEFAULT_PICK_SATURATION).abs() < 0.01);
        assert!((hsl.l - DEFAULT_PICK_LIGHTNESS).abs() < 0.01);
    }

    #[test]
    fn pick_keeps_tone() {
        let current = Rgb::new(0x5e, 0x8f, 0xbf);
        let before = Hsl::from(current);
        let after = Hsl::from(pick_on_wheel(current, 0.0, 10.0, true));
        assert!((after.h - 180.0).abs() < 1.0, "h = {}", after.h);
        assert!((after.s - before.s).abs() < 0.02);
        assert!((after.l - before.l).abs() < 0.01);
    }

    #[test]
    fn markers() {
        let (top, left) = marker_position(0.0, MARKER_RADIUS);
        assert!(approx_eq(top, 8.0) && approx_eq(left, 50.0), "({top}, {left})");
        let (top, left) = marker_position(90.0, MARKER_RADIUS);
        assert!(approx_eq(top, 50.0) && approx_eq(left, 92.0), "({top}, {left})");
    }

    #[test]
    fn marker_roundtrips_through_hue_at_point() {
        for hue in [10.0, 123.0, 250.0, 359.0] {
            let (top, left) = marker_position(hue, MARKER_RADIUS);
            let back = hue_at_point(left - 50.0, top - 50.0);
            assert!((back - hue).abs() < 1e-6, "{hue} -> {back}");
        }
    }

    #[test]
    fn wheel_gradient_has_thirteen_stops() {
        let css = hue_wheel_gradient();
        assert!(css.starts_with("conic-gradient(from 0deg, hsl(0 100% 55%), hsl(30 100% 55%)"));
        assert!(css.ends_with("hsl(360 100% 55%))"));
        assert_eq!(css.matches("hsl(").count(), 13);
    }
}
