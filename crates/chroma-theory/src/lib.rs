//! # chroma-theory — color-science engine for chromalab
//!
//! Pure, deterministic functions that derive new colors and metrics from
//! the value types in [`chroma_color`]. Nothing here performs I/O, holds
//! mutable global state, or depends on a presentation layer; the UI (or
//! the `chromalab` CLI) calls in, never the other way around.
//!
//! # Architecture
//!
//! ```text
//! chroma_color: hex ⇄ Rgb ⇄ Hsl / Hsv
//!     │
//!     ├── contrast.rs:  WCAG relative luminance, contrast ratio, grading
//!     ├── harmony.rs:   hue-rotation harmonies (complement, triadic, ...)
//!     │     └── rings.rs / wheel.rs: concentric rings, wheel geometry
//!     ├── mix.rs:       additive and approximate subtractive blending
//!     └── random.rs:    seeded base colors for "random" buttons
//!
//! gradient.rs:  color stops → linear/radial/conic descriptor strings
//! palette.rs:   opaque palette records + curated reference swatches
//! options.rs:   `:set`-style tuning of the policy constants
//! ```
//!
//! # Policy constants
//!
//! Several constants (the rings saturation floor, the subtractive-mix
//! gamma, WCAG thresholds) are empirical "looks right" values rather than
//! derived laws. They live in `const` policy structs and can be adjusted
//! through [`options::Options`], never mutated globally.

// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod contrast;
pub mod gradient;
pub mod harmony;
pub mod mix;
pub mod options;
pub mod palette;
pub mod random;
pub mod rings;
pub mod wheel;

pub use contrast::{Compliance, ContrastReport, Grade, contrast_ratio, relative_luminance};
pub use gradient::{ColorStop, Gradient, GradientKind, serialize_gradient};
pub use harmony::{HarmonyPolicy, HarmonyResult, HarmonyRole, derive_harmonies};
pub use mix::{MixPolicy, mix_additive, mix_subtractive};
pub use options::Options;
pub use palette::Palette;
