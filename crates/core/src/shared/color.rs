use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must not be empty")]
    Empty,
    #[error("color '{0}' must have 6 (RRGGBB) or 8 (AARRGGBB) hex digits")]
    InvalidLength(String),
    #[error("color '{0}' contains non-hex digits")]
    InvalidHex(String),
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Text and integer forms use the `AARRGGBB` ordering, so `0xFFFFFFFF` is
/// opaque white and `#80000000` is half-transparent black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgba8(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_rgba8(0, 0, 0, 255);

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a packed `0xAARRGGBB` color int.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#RRGGBB`, `#AARRGGBB`, `0xAARRGGBB` or the bare digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(s.to_string()));
        }
        let value = match digits.len() {
            6 => 0xFF00_0000 | parse_hex(digits, s)?,
            8 => parse_hex(digits, s)?,
            _ => return Err(ColorParseError::InvalidLength(s.to_string())),
        };
        Ok(Color::from_argb(value))
    }
}

fn parse_hex(digits: &str, original: &str) -> Result<u32, ColorParseError> {
    u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidHex(original.to_string()))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
