// SPDX-License-Identifier: MIT
//
// Error type for color parsing.
//
// Numeric inputs are never rejected (they are clamped), so the only way to
// fail in this crate is to hand it a malformed string.

use thiserror::Error;

/// Errors produced while parsing color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a `#rrggbb` or `#rgb` hex color.
    #[error("invalid color {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        tracing::debug!(input, reason, "rejected color string");
        Self::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;
