//! Engine options — the `:set`-style tuning layer.
//!
//! Policy constants have fixed defaults; this module is the only way to
//! change them, and it always produces a new value rather than touching
//! shared state.
//!
//! # Supported syntax
//!
//! | Syntax          | Effect                        |
//! |-----------------|-------------------------------|
//! | `option`        | Enable boolean / show numeric |
//! | `nooption`      | Disable boolean               |
//! | `option!`       | Toggle boolean                |
//! | `option?`       | Query current value           |
//! | `option=N`      | Assign numeric value          |
//! | (empty)         | Show changed options          |
//! | `all`           | Show all options              |
//!
//! # Option names
//!
//! | Full name         | Abbrev | Type    | Default | Range     |
//! |-------------------|--------|---------|---------|-----------|
//! | `uppercase`       | `uc`   | bool    | false   |           |
//! | `gamma`           | `gm`   | number  | 1.2     | 0.1–5     |
//! | `saturationfloor` | `sf`   | number  | 0.5     | 0–1       |
//! | `lightnessmin`    | `lmin` | number  | 0.45    | 0–1       |
//! | `lightnessmax`    | `lmax` | number  | 0.65    | 0–1       |
//! | `aaanormal`       | `aaa`  | number  | 7       | 1–21      |
//! | `aanormal`        | `aa`   | number  | 4.5     | 1–21      |
//! | `aalarge`         | `aal`  | number  | 3       | 1–21      |
//!
//! The saturation floor and lightness band apply to the harmony rings; the
//! wheel harmonies always use the base tone unchanged
//! ([`HarmonyPolicy::WHEEL`]).
//!
//! The contrast thresholds must stay ordered, `aalarge ≤ aanormal ≤
//! aaanormal`; an assignment that would break the order is rejected.

use chroma_color::HexCase;
use thiserror::Error;

use crate::contrast::WcagThresholds;
use crate::harmony::HarmonyPolicy;
use crate::mix::MixPolicy;

/// A parsed `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `option` — enable a boolean option.
    On(String),

    /// `nooption` — disable a boolean option.
    Off(String),

    /// `option!` — toggle a boolean option.
    Toggle(String),

    /// `option?` — query the current value.
    Query(String),

    /// `option=value` — assign a value.
    Assign(String, String),

    /// No arguments — show changed options.
    ShowChanged,

    /// `all` — show all options.
    ShowAll,
}

/// Errors from applying a directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),

    #[error("{0} is a number option, use {0}=value")]
    NotBoolean(String),

    #[error("{0} is a boolean option and takes no value")]
    NotNumeric(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },

    #[error("{name}={value} breaks the threshold order aalarge <= aanormal <= aaanormal")]
    ThresholdOrder { name: String, value: String },
}

// ---------------------------------------------------------------------------
// Option table
// ---------------------------------------------------------------------------

/// Canonical option identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Uppercase,
    Gamma,
    SaturationFloor,
    LightnessMin,
    LightnessMax,
    AaaNormal,
    AaNormal,
    AaLarge,
}

impl Key {
    const ALL: [Self; 8] = [
        Self::Uppercase,
        Self::Gamma,
        Self::SaturationFloor,
        Self::LightnessMin,
        Self::LightnessMax,
        Self::AaaNormal,
        Self::AaNormal,
        Self::AaLarge,
    ];

    fn lookup(name: &str) -> Option<Self> {
        Some(match name {
            "uppercase" | "uc" => Self::Uppercase,
            "gamma" | "gm" => Self::Gamma,
            "saturationfloor" | "sf" => Self::SaturationFloor,
            "lightnessmin" | "lmin" => Self::LightnessMin,
            "lightnessmax" | "lmax" => Self::LightnessMax,
            "aaanormal" | "aaa" => Self::AaaNormal,
            "aanormal" | "aa" => Self::AaNormal,
            "aalarge" | "aal" => Self::AaLarge,
            _ => return None,
        })
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Gamma => "gamma",
            Self::SaturationFloor => "saturationfloor",
            Self::LightnessMin => "lightnessmin",
            Self::LightnessMax => "lightnessmax",
            Self::AaaNormal => "aaanormal",
            Self::AaNormal => "aanormal",
            Self::AaLarge => "aalarge",
        }
    }

    const fn is_bool(self) -> bool {
        matches!(self, Self::Uppercase)
    }

    /// The boolean option name behind a `no` prefix, as in `nouc`.
    fn negated(arg: &str) -> Option<&str> {
        let name = arg.strip_prefix("no")?;
        Self::lookup(name).is_some_and(Self::is_bool).then_some(name)
    }

    /// What a bare name means: booleans switch on, numbers report
    /// their value.
    fn bare(self, name: &str) -> SetDirective {
        if self.is_bool() {
            SetDirective::On(name.to_string())
        } else {
            SetDirective::Query(name.to_string())
        }
    }

    /// Legal range for numeric options.
    const fn range(self) -> (f64, f64) {
        match self {
            Self::Uppercase => (0.0, 1.0),
            Self::Gamma => (0.1, 5.0),
            Self::SaturationFloor | Self::LightnessMin | Self::LightnessMax => (0.0, 1.0),
            Self::AaaNormal | Self::AaNormal | Self::AaLarge => (1.0, 21.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a whitespace-separated argument string into directives.
///
/// An empty string produces [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single argument into a directive.
///
/// Unknown names still parse; [`Options::apply`] reports them.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    match arg.char_indices().next_back() {
        Some((at, '?')) => SetDirective::Query(arg[..at].to_string()),
        Some((at, '!')) => SetDirective::Toggle(arg[..at].to_string()),
        _ => match (Key::lookup(arg), Key::negated(arg)) {
            (Some(key), _) => key.bare(arg),
            (None, Some(name)) => SetDirective::Off(name.to_string()),
            (None, None) => SetDirective::On(arg.to_string()),
        },
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// All tunable engine policy in one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Casing for formatted hex output.
    pub case: HexCase,
    /// Clamp policy for the harmony rings.
    pub rings: HarmonyPolicy,
    pub mix: MixPolicy,
    pub thresholds: WcagThresholds,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            case: HexCase::Lower,
            rings: HarmonyPolicy::RINGS,
            mix: MixPolicy::DEFAULT,
            thresholds: WcagThresholds::WCAG2,
        }
    }
}

impl Options {
    /// Apply one directive.
    ///
    /// Returns a message to show the user for queries and listings, `None`
    /// for silent assignments.
    ///
    /// # Errors
    ///
    /// Fails for unknown options, a boolean directive on a numeric option
    /// (or vice versa), values that are not finite numbers, and threshold
    /// assignments that break their order. A failed directive changes
    /// nothing.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>, OptionError> {
        match directive {
            SetDirective::ShowAll => Ok(Some(self.listing(false))),
            SetDirective::ShowChanged => {
                let changed = self.listing(true);
                Ok((!changed.is_empty()).then_some(changed))
            }
            SetDirective::Query(name) => {
                let key = resolve(name)?;
                Ok(Some(self.format(key)))
            }
            SetDirective::On(name) => self.set_bool(name, |_| true),
            SetDirective::Off(name) => self.set_bool(name, |_| false),
            SetDirective::Toggle(name) => self.set_bool(name, |current| !current),
            SetDirective::Assign(name, value) => {
                let key = resolve(name)?;
                if key.is_bool() {
                    return Err(OptionError::NotNumeric(key.name().to_string()));
                }
                let parsed: f64 = value
                    .parse()
                    .ok()
                    .filter(|v: &f64| v.is_finite())
                    .ok_or_else(|| OptionError::InvalidValue {
                        name: key.name().to_string(),
                        value: value.clone(),
                    })?;
                let (lo, hi) = key.range();
                let clamped = parsed.clamp(lo, hi);
                if clamped.to_bits() != parsed.to_bits() {
                    tracing::debug!(option = key.name(), parsed, clamped, "option value clamped");
                }

                let mut next = *self;
                next.set_number(key, clamped);
                if !next.thresholds_ordered() {
                    return Err(OptionError::ThresholdOrder {
                        name: key.name().to_string(),
                        value: value.clone(),
                    });
                }
                *self = next;
                Ok(None)
            }
        }
    }

    /// Parse and apply a whole argument string, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`Options::apply`].
    pub fn apply_str(&mut self, args: &str) -> Result<Vec<String>, OptionError> {
        let mut messages = Vec::new();
        for directive in parse_set(args) {
            if let Some(msg) = self.apply(&directive)? {
                messages.push(msg);
            }
        }
        Ok(messages)
    }

    fn set_bool(
        &mut self,
        name: &str,
        f: impl FnOnce(bool) -> bool,
    ) -> Result<Option<String>, OptionError> {
        let key = resolve(name)?;
        match key {
            Key::Uppercase => {
                let next = f(self.case == HexCase::Upper);
                self.case = if next { HexCase::Upper } else { HexCase::Lower };
                Ok(None)
            }
            _ => Err(OptionError::NotBoolean(key.name().to_string())),
        }
    }

    const fn set_number(&mut self, key: Key, value: f64) {
        match key {
            Key::Uppercase => {}
            Key::Gamma => self.mix.gamma = value,
            Key::SaturationFloor => self.rings.saturation_floor = value,
            Key::LightnessMin => self.rings.lightness_min = value,
            Key::LightnessMax => self.rings.lightness_max = value,
            Key::AaaNormal => self.thresholds.aaa_normal = value,
            Key::AaNormal => self.thresholds.aa_normal = value,
            Key::AaLarge => self.thresholds.aa_large = value,
        }
    }

    fn thresholds_ordered(&self) -> bool {
        let t = &self.thresholds;
        t.aa_large <= t.aa_normal && t.aa_normal <= t.aaa_normal
    }

    fn number(&self, key: Key) -> f64 {
        match key {
            Key::Uppercase => f64::from(u8::from(self.case == HexCase::Upper)),
            Key::Gamma => self.mix.gamma,
            Key::SaturationFloor => self.rings.saturation_floor,
            Key::LightnessMin => self.rings.lightness_min,
            Key::LightnessMax => self.rings.lightness_max,
            Key::AaaNormal => self.thresholds.aaa_normal,
            Key::AaNormal => self.thresholds.aa_normal,
            Key::AaLarge => self.thresholds.aa_large,
        }
    }

    /// `uppercase` / `nouppercase` for booleans, `name=value` otherwise.
    fn format(&self, key: Key) -> String {
        match (key.is_bool(), self.number(key) > 0.0) {
            (true, true) => key.name().to_string(),
            (true, false) => format!("no{}", key.name()),
            (false, _) => format!("{}={}", key.name(), self.number(key)),
        }
    }

    fn listing(&self, changed_only: bool) -> String {
        let defaults = Self::default();
        Key::ALL
            .iter()
            .filter(|&&key| !changed_only || self.number(key).to_bits() != defaults.number(key).to_bits())
            .map(|&key| self.format(key))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

fn resolve(name: &str) -> Result<Key, OptionError> {
    Key::lookup(name).ok_or_else(|| OptionError::Unknown(name.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
