//! Gradient descriptors — ordered color stops to CSS-style strings.
//!
//! ```text
//! linear-gradient(<angle>deg, <hex> <pos>%, ...)
//! radial-gradient(circle, <hex> <pos>%, ...)
//! conic-gradient(from <angle>deg, <hex> <pos>%, ...)
//! ```
//!
//! The serializer does not sort or validate stops; [`Gradient`] is the
//! editing model that keeps them ordered.

use std::fmt;
use std::str::FromStr;

use chroma_color::{ColorError, HexCase, Rgb, parse_hex};
use thiserror::Error;

/// Identity of a stop within one gradient. Carries no color meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub u64);

/// A `(color, position)` point along a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub id: StopId,
    /// Hex color string. Stops built by [`Gradient`] always hold lowercase
    /// `#rrggbb`.
    pub color: String,
    /// Percentage along the gradient, [0, 100].
    pub position: f64,
}

impl ColorStop {
    #[must_use]
    pub fn new(id: StopId, color: impl Into<String>, position: f64) -> Self {
        Self {
            id,
            color: color.into(),
            position,
        }
    }
}

/// Gradient function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Conic => "conic",
        }
    }

    /// Whether the angle parameter affects the output.
    #[must_use]
    pub const fn uses_angle(self) -> bool {
        !matches!(self, Self::Radial)
    }
}

/// Error for an unrecognized gradient kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gradient kind {0:?} (expected linear, radial or conic)")]
pub struct UnknownKind(pub String);

impl FromStr for GradientKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            "conic" => Ok(Self::Conic),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialize `stops` into a gradient descriptor.
///
/// Stops are emitted in the given order as `"<hex> <position>%"`. Valid hex
/// colors are normalized to lowercase; anything else is passed through.
/// `angle` is ignored for [`GradientKind::Radial`].
#[must_use]
pub fn serialize_gradient(stops: &[ColorStop], kind: GradientKind, angle: f64) -> String {
    let body = stops
        .iter()
        .map(|stop| format!("{} {}%", display_color(&stop.color), stop.position))
        .collect::<Vec<_>>()
        .join(", ");

    match kind {
        GradientKind::Linear => format!("linear-gradient({angle}deg, {body})"),
        GradientKind::Radial => format!("radial-gradient(circle, {body})"),
        GradientKind::Conic => format!("conic-gradient(from {angle}deg, {body})"),
    }
}

fn display_color(color: &str) -> String {
    parse_hex(color).map_or_else(|_| color.to_string(), |rgb| rgb.to_hex(HexCase::Lower))
}

// ---------------------------------------------------------------------------
// Gradient (editing model)
// ---------------------------------------------------------------------------

/// A gradient being edited: stops kept sorted by position, stable ids,
/// every color a valid hex string.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
    pub kind: GradientKind,
    /// Degrees; only used by linear and conic gradients.
    pub angle: f64,
    next_id: u64,
}

impl Gradient {
    /// Stops below this count cannot be removed.
    pub const MIN_STOPS: usize = 2;

    /// Position given to freshly added stops.
    pub const NEW_STOP_POSITION: f64 = 50.0;

    /// Build from `(color, position)` pairs. Positions are clamped.
    #[must_use]
    pub fn new(
        kind: GradientKind,
        angle: f64,
        stops: impl IntoIterator<Item = (Rgb, f64)>,
    ) -> Self {
        let mut gradient = Self {
            stops: Vec::new(),
            kind,
            angle,
            next_id: 1,
        };
        for (color, position) in stops {
            let id = gradient.allocate_id();
            let hex = color.to_hex(HexCase::Lower);
            gradient
                .stops
                .push(ColorStop::new(id, hex, clamp_position(position)));
        }
        gradient.sort();
        gradient
    }

    /// Build from `(hex, position)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first color that is not valid hex.
    pub fn from_hex<'a>(
        kind: GradientKind,
        angle: f64,
        stops: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, ColorError> {
        let stops = stops
            .into_iter()
            .map(|(hex, position)| Ok((parse_hex(hex)?, position)))
            .collect::<Result<Vec<_>, ColorError>>()?;
        Ok(Self::new(kind, angle, stops))
    }

    /// The three-stop starter gradient.
    #[must_use]
    pub fn starter() -> Self {
        Self::new(
            GradientKind::Linear,
            135.0,
            [
                (Rgb::new(0x6f, 0xb7, 0xb2), 0.0),
                (Rgb::new(0xe3, 0x9a, 0x57), 50.0),
                (Rgb::new(0x8a, 0x7b, 0xb8), 100.0),
            ],
        )
    }

    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Add a stop of `color` at the midpoint and re-sort.
    pub fn add_stop(&mut self, color: Rgb) -> StopId {
        let id = self.allocate_id();
        self.stops.push(ColorStop::new(
            id,
            color.to_hex(HexCase::Lower),
            Self::NEW_STOP_POSITION,
        ));
        self.sort();
        id
    }

    /// Remove a stop. Refused (returns `false`) when only two stops remain
    /// or `id` is unknown.
    pub fn remove_stop(&mut self, id: StopId) -> bool {
        if self.stops.len() <= Self::MIN_STOPS {
            tracing::debug!(?id, "refusing to remove stop below minimum");
            return false;
        }
        let before = self.stops.len();
        self.stops.retain(|stop| stop.id != id);
        self.stops.len() != before
    }

    /// Replace a stop's color from hex input. Returns `Ok(false)` for an
    /// unknown id.
    ///
    /// # Errors
    ///
    /// Malformed hex is rejected and the stop keeps its previous color.
    pub fn set_stop_color(&mut self, id: StopId, hex: &str) -> Result<bool, ColorError> {
        let color = parse_hex(hex)?;
        Ok(self.stop_mut(id).is_some_and(|stop| {
            stop.color = color.to_hex(HexCase::Lower);
            true
        }))
    }

    /// Move a stop (clamped to [0, 100]). Order is left as is, matching the
    /// live-drag behavior of the builder; call [`Gradient::sort`] to reorder.
    pub fn set_stop_position(&mut self, id: StopId, position: f64) -> bool {
        self.stop_mut(id).is_some_and(|stop| {
            stop.position = clamp_position(position);
            true
        })
    }

    /// Stable sort by position.
    pub fn sort(&mut self) {
        self.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// The gradient descriptor.
    #[must_use]
    pub fn css(&self) -> String {
        serialize_gradient(&self.stops, self.kind, self.angle)
    }

    /// A ready-to-paste CSS declaration.
    #[must_use]
    pub fn css_declaration(&self) -> String {
        format!("background: {};", self.css())
    }

    fn stop_mut(&mut self, id: StopId) -> Option<&mut ColorStop> {
        self.stops.iter_mut().find(|stop| stop.id == id)
    }

    const fn allocate_id(&mut self) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::starter()
    }
}

fn clamp_position(position: f64) -> f64 {
    if position.is_nan() { 0.0 } else { position.clamp(0.0, 100.0) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(StopId(1), "#FF0000", 0.0),
            ColorStop::new(StopId(2), "#0000FF", 100.0),
        ]
    }

    // ── serialize_gradient ──────────────────────────────────────────

    #[test]
    fn linear_two_stops() {
        assert_eq!(
            serialize_gradient(&two_stops(), GradientKind::Linear, 90.0),
            "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)"
        );
    }

    #[test]
    fn radial_ignores_angle() {
        assert_eq!(
            serialize_gradient(&two_stops(), GradientKind::Radial, 45.0),
            "radial-gradient(circle, #ff0000 0%, #0000ff 100%)"
        );
    }

    #[test]
    fn conic_uses_from() {
        assert_eq!(
            serialize_gradient(&two_stops(), GradientKind::Conic, 12.5),
            "conic-gradient(from 12.5deg, #ff0000 0%, #0000ff 100%)"
        );
    }

    #[test]
    fn order_is_not_corrected() {
        let mut stops = two_stops();
        stops.reverse();
        assert_eq!(
            serialize_gradient(&stops, GradientKind::Linear, 0.0),
            "linear-gradient(0deg, #0000ff 100%, #ff0000 0%)"
        );
    }

    #[test]
    fn unparseable_color_passes_through() {
        let stops = vec![ColorStop::new(StopId(1), "tomato", 10.0)];
        assert_eq!(
            serialize_gradient(&stops, GradientKind::Radial, 0.0),
            "radial-gradient(circle, tomato 10%)"
        );
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("Conic".parse::<GradientKind>().unwrap(), GradientKind::Conic);
        assert!("diamond".parse::<GradientKind>().is_err());
        assert!(!GradientKind::Radial.uses_angle());
    }

    // ── Gradient editor ─────────────────────────────────────────────

    #[test]
    fn starter_css() {
        assert_eq!(
            Gradient::starter().css_declaration(),
            "background: linear-gradient(135deg, #6fb7b2 0%, #e39a57 50%, #8a7bb8 100%);"
        );
    }

    #[test]
    fn add_stop_lands_in_middle_sorted() {
        let stops = [(Rgb::BLACK, 0.0), (Rgb::WHITE, 100.0)];
        let mut g = Gradient::new(GradientKind::Linear, 90.0, stops);
        let id = g.add_stop(Rgb::new(255, 0, 0));
        let positions: Vec<f64> = g.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 50.0, 100.0]);
        assert_eq!(g.stops()[1].id, id);
        assert_eq!(g.stops()[1].color, "#ff0000");
    }

    #[test]
    fn ids_are_unique() {
        let mut g = Gradient::starter();
        let a = g.add_stop(Rgb::BLACK);
        let b = g.add_stop(Rgb::WHITE);
        assert_ne!(a, b);
        let mut ids: Vec<StopId> = g.stops().iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn remove_keeps_minimum() {
        let mut g = Gradient::starter();
        let first = g.stops()[0].id;
        let second = g.stops()[1].id;
        assert!(g.remove_stop(first));
        assert!(!g.remove_stop(second));
        assert_eq!(g.stops().len(), 2);
    }

    #[test]
    fn remove_unknown_id() {
        let mut g = Gradient::starter();
        assert!(!g.remove_stop(StopId(999)));
        assert_eq!(g.stops().len(), 3);
    }

    #[test]
    fn update_color_and_position() {
        let mut g = Gradient::starter();
        let id = g.stops()[0].id;
        assert_eq!(g.set_stop_color(id, "#ABCDEF"), Ok(true));
        assert!(g.set_stop_position(id, 140.0));
        assert_eq!(g.stops()[0].color, "#abcdef");
        assert_eq!(g.set_stop_color(StopId(999), "#000"), Ok(false));
        assert!((g.stops()[0].position - 100.0).abs() < f64::EPSILON);
        assert!(!g.set_stop_position(StopId(999), 10.0));

        // Moving a stop does not reorder until asked.
        assert!(g.set_stop_position(id, 75.0));
        assert_eq!(g.stops()[0].id, id);
        g.sort();
        assert_eq!(g.stops()[1].id, id);
    }

    #[test]
    fn malformed_color_edit_keeps_last_valid() {
        let stops = [(Rgb::new(255, 0, 0), 0.0), (Rgb::new(0, 0, 255), 100.0)];
        let mut g = Gradient::new(GradientKind::Linear, 90.0, stops);
        let id = g.stops()[0].id;
        for bad in ["#ZZZZZZ", "123456", "#12345", ""] {
            assert!(g.set_stop_color(id, bad).is_err(), "{bad:?} accepted");
        }
        assert_eq!(g.stops()[0].color, "#ff0000");
        assert_eq!(g.css(), "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)");
    }

    #[test]
    fn from_hex_validates_every_stop() {
        let g = Gradient::from_hex(GradientKind::Radial, 0.0, [("#FFF", 100.0), ("#6FB7B2", 0.0)])
            .unwrap();
        assert_eq!(g.css(), "radial-gradient(circle, #6fb7b2 0%, #ffffff 100%)");

        let bad = [("#fff", 0.0), ("#ZZZZZZ", 100.0)];
        assert!(Gradient::from_hex(GradientKind::Linear, 0.0, bad).is_err());
    }
}
