//! Color value type and its parse entry point

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::parser;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Empty color string")]
    Empty,
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Invalid color channel: {0}")]
    InvalidChannel(String),
    #[error("Expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },
    #[error("Unknown color function: {0}")]
    UnknownFunction(String),
    #[error("Negative packed color: {0}")]
    Negative(i64),
    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

/// The accepted input shapes for building a [`Color`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpec<'a> {
    /// Three channel values, each clamped to 0-255
    Components(i64, i64, i64),
    /// Packed 0xRRGGBB, or 0xRRGGBBAA when above 0xFFFFFF (alpha dropped)
    Packed(i64),
    /// Textual form: hex, rgb()/rgba(), or "r,g,b[,a]"
    Text(&'a str),
}

/// Opaque RGB color as used by the toolkit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create color from RGB bytes
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from packed 0xRRGGBB (higher bits ignored)
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Convert to packed 0xRRGGBB
    pub const fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// "#RRGGBB", upper case
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// "rgb(r,g,b)"
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Build a color from any supported input shape
    pub fn parse(spec: ColorSpec<'_>) -> Result<Self, ColorParseError> {
        match spec {
            ColorSpec::Components(r, g, b) => Ok(Self::rgb(
                clamp_channel(r),
                clamp_channel(g),
                clamp_channel(b),
            )),
            ColorSpec::Packed(value) if value < 0 => Err(ColorParseError::Negative(value)),
            ColorSpec::Packed(value) => Ok(Self::from_packed(value as u64)),
            ColorSpec::Text(text) => parser::parse_text(text),
        }
    }

    fn from_packed(value: u64) -> Self {
        if value > 0xFF_FFFF {
            // 0xRRGGBBAA
            Self::rgb(
                ((value >> 24) & 0xFF) as u8,
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
            )
        } else {
            Self::from_u32(value as u32)
        }
    }
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(ColorSpec::Text(s))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
