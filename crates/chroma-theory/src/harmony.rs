//! Harmony generator — hue-rotation relationships around a base color.
//!
//! Every derived color keeps the base color's saturation and lightness (after
//! the clamp policy is applied) and differs only in hue:
//!
//! | role            | offset |
//! |-----------------|--------|
//! | Base            | 0      |
//! | Complement      | +180   |
//! | Analogous −     | −30    |
//! | Analogous +     | +30    |
//! | Triadic +       | +120   |
//! | Triadic −       | −120   |
//! | Split +         | +150   |
//! | Split −         | −150   |
//!
//! Tetradic sets (0/90/180/270) and the other multi-hue schemes used by the
//! rings view are exposed through [`HarmonyScheme`].

use chroma_color::{HexCase, Hsl, Rgb, hue::rotate_hue};

// ---------------------------------------------------------------------------
// Clamp policy
// ---------------------------------------------------------------------------

/// How the base color's saturation and lightness are constrained before
/// derived swatches are produced.
///
/// The rings view floors saturation and squeezes lightness into a mid band
/// so every ring segment stays visibly colored; the wheel uses the base tone
/// unchanged. Both are empirical choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyPolicy {
    pub saturation_floor: f64,
    pub lightness_min: f64,
    pub lightness_max: f64,
}

impl HarmonyPolicy {
    /// Base tone passed through, only clamped to [0, 1].
    pub const WHEEL: Self = Self {
        saturation_floor: 0.0,
        lightness_min: 0.0,
        lightness_max: 1.0,
    };

    /// Saturation at least 0.5, lightness in [0.45, 0.65].
    pub const RINGS: Self = Self {
        saturation_floor: 0.5,
        lightness_min: 0.45,
        lightness_max: 0.65,
    };

    /// Constrain `(s, l)` according to this policy. Output is in [0, 1].
    #[must_use]
    pub fn apply(&self, s: f64, l: f64) -> (f64, f64) {
        let s = s.max(self.saturation_floor).clamp(0.0, 1.0);
        // A band given upside down collapses to its lower edge instead of
        // panicking inside `clamp`.
        let hi = self.lightness_max.max(self.lightness_min);
        let l = l.clamp(self.lightness_min, hi).clamp(0.0, 1.0);
        (s, l)
    }
}

impl Default for HarmonyPolicy {
    fn default() -> Self {
        Self::WHEEL
    }
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// One slot of a [`HarmonyResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyRole {
    Base,
    Complement,
    AnalogousMinus,
    AnalogousPlus,
    TriadicPlus,
    TriadicMinus,
    SplitPlus,
    SplitMinus,
}

impl HarmonyRole {
    /// All roles, in the order the swatch grid lists them.
    pub const ALL: [Self; 8] = [
        Self::Base,
        Self::AnalogousMinus,
        Self::AnalogousPlus,
        Self::Complement,
        Self::SplitPlus,
        Self::SplitMinus,
        Self::TriadicPlus,
        Self::TriadicMinus,
    ];

    /// Hue offset from the base, in degrees.
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Base => 0.0,
            Self::Complement => 180.0,
            Self::AnalogousMinus => -30.0,
            Self::AnalogousPlus => 30.0,
            Self::TriadicPlus => 120.0,
            Self::TriadicMinus => -120.0,
            Self::SplitPlus => 150.0,
            Self::SplitMinus => -150.0,
        }
    }

    /// Display tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Complement => "Complement",
            Self::AnalogousMinus => "Analogous -30°",
            Self::AnalogousPlus => "Analogous +30°",
            Self::TriadicPlus => "Triadic +120°",
            Self::TriadicMinus => "Triadic -120°",
            Self::SplitPlus => "Split +150°",
            Self::SplitMinus => "Split -150°",
        }
    }
}

// ---------------------------------------------------------------------------
// Derived colors
// ---------------------------------------------------------------------------

/// A single derived swatch: its role, normalized hue and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedColor {
    pub role: HarmonyRole,
    pub hue: f64,
    pub rgb: Rgb,
}

impl DerivedColor {
    #[must_use]
    pub fn hex(&self, case: HexCase) -> String {
        self.rgb.to_hex(case)
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.role.tag()
    }
}

/// The fixed-shape harmony set for one base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyResult {
    pub base: DerivedColor,
    pub complement: DerivedColor,
    pub analogous_minus: DerivedColor,
    pub analogous_plus: DerivedColor,
    pub triadic_plus: DerivedColor,
    pub triadic_minus: DerivedColor,
    pub split_plus: DerivedColor,
    pub split_minus: DerivedColor,
}

impl HarmonyResult {
    /// Look up the swatch for `role`.
    #[must_use]
    pub const fn get(&self, role: HarmonyRole) -> &DerivedColor {
        match role {
            HarmonyRole::Base => &self.base,
            HarmonyRole::Complement => &self.complement,
            HarmonyRole::AnalogousMinus => &self.analogous_minus,
            HarmonyRole::AnalogousPlus => &self.analogous_plus,
            HarmonyRole::TriadicPlus => &self.triadic_plus,
            HarmonyRole::TriadicMinus => &self.triadic_minus,
            HarmonyRole::SplitPlus => &self.split_plus,
            HarmonyRole::SplitMinus => &self.split_minus,
        }
    }

    /// Swatches in [`HarmonyRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &DerivedColor> {
        HarmonyRole::ALL.into_iter().map(|role| self.get(role))
    }
}

/// Derive the full harmony set with the wheel policy (tone unchanged).
#[must_use]
pub fn derive_harmonies(base: Rgb) -> HarmonyResult {
    derive_harmonies_with(base, &HarmonyPolicy::WHEEL)
}

/// Derive the full harmony set under an explicit clamp policy.
#[must_use]
pub fn derive_harmonies_with(base: Rgb, policy: &HarmonyPolicy) -> HarmonyResult {
    let tone = base_tone(base, policy);
    let mk = |role: HarmonyRole| derive(tone, role.offset(), role);

    HarmonyResult {
        base: mk(HarmonyRole::Base),
        complement: mk(HarmonyRole::Complement),
        analogous_minus: mk(HarmonyRole::AnalogousMinus),
        analogous_plus: mk(HarmonyRole::AnalogousPlus),
        triadic_plus: mk(HarmonyRole::TriadicPlus),
        triadic_minus: mk(HarmonyRole::TriadicMinus),
        split_plus: mk(HarmonyRole::SplitPlus),
        split_minus: mk(HarmonyRole::SplitMinus),
    }
}

/// Base HSL with the policy applied to saturation and lightness.
#[must_use]
pub fn base_tone(base: Rgb, policy: &HarmonyPolicy) -> Hsl {
    let hsl = Hsl::from(base);
    let (s, l) = policy.apply(hsl.s, hsl.l);
    Hsl::new(hsl.h, s, l)
}

fn derive(tone: Hsl, offset: f64, role: HarmonyRole) -> DerivedColor {
    let hue = rotate_hue(tone.h, offset);
    DerivedColor {
        role,
        hue,
        rgb: tone.with_hue(hue).to_rgb(),
    }
}

// ---------------------------------------------------------------------------
// Schemes (multi-hue sets)
// ---------------------------------------------------------------------------

/// A named set of hues around a base, as used by the harmony rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyScheme {
    /// The base hue alone.
    Base,
    /// Base and its opposite.
    Complementary,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
    /// Base with its ±30° neighbours.
    Analogous,
    /// Base with the two hues flanking its complement.
    SplitComplementary,
}

impl HarmonyScheme {
    /// Innermost to outermost ring.
    pub const ALL: [Self; 6] = [
        Self::Base,
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Analogous,
        Self::SplitComplementary,
    ];

    /// Offsets from the base hue, base first.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Base => &[0.0],
            Self::Complementary => &[0.0, 180.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Self::Analogous => &[0.0, -30.0, 30.0],
            Self::SplitComplementary => &[0.0, 150.0, 210.0],
        }
    }

    /// Normalized hues for `base_hue`.
    #[must_use]
    pub fn hues(self, base_hue: f64) -> Vec<f64> {
        self.offsets()
            .iter()
            .map(|&offset| rotate_hue(base_hue, offset))
            .collect()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
