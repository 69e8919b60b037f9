// SPDX-License-Identifier: MIT
//
// chroma-color — color representations for chromalab.
//
// The leaf layer of the color-science engine. Every higher component
// (contrast, harmony, mixing) is built on the three value types defined
// here and the total conversions between them:
//
//   hex string ⇄ Rgb ⇄ Hsl
//                 Rgb ⇄ Hsv
//
// All types are small `Copy` values. Nothing here allocates except hex
// formatting, and nothing here performs I/O or holds state.

// Single-character variable names (r, g, b, h, s, l, v) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod hue;
pub mod rgb;

pub use error::{ColorError, Result};
pub use hex::{HexCase, format_hex, parse_hex};
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use hue::normalize_hue;
pub use rgb::Rgb;
