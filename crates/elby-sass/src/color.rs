//! Hex color parsing.
//!
//! Copyright (c) 2025 Posit, PBC

use std::fmt;

use crate::error::StyleError;

/// An RGB triple.
///
/// Displays as `r, g, b` so it can be dropped straight into `rgba(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Convert a hex color code to its RGB channels.
///
/// One leading `#` is stripped. Three digits are expanded by nibble
/// replication (`abc` reads as `aabbcc`), six digits are read as pairs.
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`StyleError::InvalidColorFormat`] for any other length or for
/// non-hex characters.
///
/// # Example
///
/// ```rust
/// use elby_sass::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#1e3a8a").unwrap(), Rgb::new(30, 58, 138));
/// assert_eq!(hex_to_rgb("fff").unwrap(), Rgb::new(255, 255, 255));
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, StyleError> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || StyleError::InvalidColorFormat {
        value: hex.to_string(),
    };

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    // All bytes are ASCII from here on, so byte slicing is safe.
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match digits.len() {
        3 => Ok(Rgb {
            r: channel(&digits[0..1])? * 17,
            g: channel(&digits[1..2])? * 17,
            b: channel(&digits[2..3])? * 17,
        }),
        6 => Ok(Rgb {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        }),
        _ => Err(invalid()),
    }
}

/// A validated color.
///
/// Always renders as a lowercase six-digit `#rrggbb` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb);

impl HexColor {
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// Parse a 3- or 6-digit hex code, `#` optional.
    pub fn parse(value: &str) -> Result<Self, StyleError> {
        hex_to_rgb(value).map(Self)
    }

    pub fn rgb(&self) -> Rgb {
        self.0
    }

    /// The color with `#` percent-encoded, for use inside `data:` URIs.
    pub fn url_encoded(&self) -> String {
        format!("%23{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}
