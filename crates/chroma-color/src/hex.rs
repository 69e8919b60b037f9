// SPDX-License-Identifier: MIT
//
// Hex string ⇄ Rgb.
//
// Accepted input:
//
//   #RRGGBB   lossless, each pair is one channel
//   #RGB      shorthand, each digit is duplicated (#f80 → #ff8800)
//
// Digits are case-insensitive. The leading `#` is required. Anything else
// (wrong length, non-hex characters, an alpha component) is rejected with
// `ColorError::InvalidFormat`, so callers can keep their last valid color.

use crate::error::{ColorError, Result};
use crate::rgb::Rgb;

/// Letter casing for formatted hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HexCase {
    /// `#c95a4a`
    #[default]
    Lower,
    /// `#C95A4A`
    Upper,
}

/// Parse a `#rrggbb` or `#rgb` string into an [`Rgb`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] when the `#` prefix is missing,
/// the digit count is not 3 or 6, or any digit is not hexadecimal.
pub fn parse_hex(s: &str) -> Result<Rgb> {
    let Some(digits) = s.strip_prefix('#') else {
        return Err(ColorError::invalid_format(s, "missing '#' prefix"));
    };
    let bytes = digits.as_bytes();

    let parsed = match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0]);
            let g = parse_hex_digit(bytes[1]);
            let b = parse_hex_digit(bytes[2]);
            match (r, g, b) {
                (Some(r), Some(g), Some(b)) => Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b)),
                _ => None,
            }
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2]);
            let g = parse_hex_byte(&bytes[2..4]);
            let b = parse_hex_byte(&bytes[4..6]);
            match (r, g, b) {
                (Some(r), Some(g), Some(b)) => Some(Rgb::new(r, g, b)),
                _ => None,
            }
        }
        _ => return Err(ColorError::invalid_format(s, "expected 3 or 6 hex digits")),
    };

    parsed.ok_or_else(|| ColorError::invalid_format(s, "non-hexadecimal digit"))
}

/// Format an [`Rgb`] as `#` followed by three zero-padded 2-digit channels.
#[must_use]
pub fn format_hex(rgb: Rgb, case: HexCase) -> String {
    match case {
        HexCase::Lower => format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b),
        HexCase::Upper => format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b),
    }
}

/// `true` if `s` would parse successfully.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|c| parse_hex_digit(c).is_some())
    })
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_rrggbb() {
        assert_eq!(parse_hex("#6fb7b2").unwrap(), Rgb::new(111, 183, 178));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_hex("#6FB7B2").unwrap(), parse_hex("#6fb7b2").unwrap());
    }

    #[test]
    fn parse_short_duplicates_digits() {
        assert_eq!(parse_hex("#f80").unwrap(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(matches!(
            parse_hex("#ZZZZZZ"),
            Err(ColorError::InvalidFormat { .. })
        ));
        assert!(parse_hex("#12345g").is_err());
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#1234567").is_err());
        assert!(parse_hex("#ff000080").is_err());
        assert!(parse_hex("#").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn parse_requires_hash() {
        let err = parse_hex("00ff00").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidFormat {
                input: "00ff00".into(),
                reason: "missing '#' prefix",
            }
        );
    }

    #[test]
    fn parse_rejects_multibyte_input() {
        // Six bytes, but not six hex digits.
        assert!(parse_hex("#ééé").is_err());
    }

    #[test]
    fn format_pads_single_digits() {
        assert_eq!(format_hex(Rgb::new(1, 2, 3), HexCase::Lower), "#010203");
    }

    #[test]
    fn format_casing() {
        let c = Rgb::new(201, 90, 74);
        assert_eq!(format_hex(c, HexCase::Lower), "#c95a4a");
        assert_eq!(format_hex(c, HexCase::Upper), "#C95A4A");
    }

    #[test]
    fn six_digit_roundtrip_is_lossless() {
        for s in ["#000000", "#ffffff", "#c86432", "#5e8fbf"] {
            assert_eq!(format_hex(parse_hex(s).unwrap(), HexCase::Lower), s);
        }
    }

    #[test]
    fn validity_check_matches_parser() {
        for s in ["#abc", "#abcdef", "#ABCDEF", "#abcd", "abc", "#xyz", ""] {
            assert_eq!(is_valid_hex(s), parse_hex(s).is_ok(), "{s}");
        }
    }
}
