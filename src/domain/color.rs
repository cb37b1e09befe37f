//! Color normalization
//!
//! Every color that passes through the engine is parsed into a canonical
//! [`Color`] and written back out in a single canonical textual form:
//! `rgb(r, g, b)` for opaque colors and `rgba(r, g, b, a)` otherwise.
//!
//! Parsing is delegated to `csscolorparser`. The [`ColorAdapter`] trait is
//! the seam the reconciler talks to, so a different color library can be
//! substituted without touching it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ColorError {
    #[error("empty color value")]
    Empty,

    #[error("unrecognized color '{0}'")]
    Unrecognized(String),

    #[error("not a recognized CSS color: {reason}")]
    Invalid { value: String, reason: String },
}

/// Canonical color value: 8-bit RGB channels plus an alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: f64,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Creates a color with transparency; alpha is clamped to `0.0..=1.0`
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        let alpha = if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self { r, g, b, alpha }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        let parsed = csscolorparser::parse(trimmed).map_err(|err| ColorError::Invalid {
            value: trimmed.to_string(),
            reason: err.to_string(),
        })?;

        let [r, g, b, _] = parsed.to_rgba8();
        // Hex alpha is a byte, so it is kept to two decimals (#0008 => 0.53)
        let places = if trimmed.starts_with('#') { 2 } else { 4 };
        let alpha = round_to(f64::from(parsed.a), places);

        Ok(Self::rgba(r, g, b, alpha))
    }
}

/// Capability for turning color text into canonical values and back
pub trait ColorAdapter {
    fn parse(&self, text: &str) -> Result<Color, ColorError>;

    fn serialize(&self, color: &Color) -> String;
}

/// CSS color syntax: hex, `rgb()`, `hsl()`, `hwb()` and the named colors
#[derive(Debug, Default, Clone, Copy)]
pub struct CssColorAdapter;

impl ColorAdapter for CssColorAdapter {
    fn parse(&self, text: &str) -> Result<Color, ColorError> {
        text.parse()
    }

    fn serialize(&self, color: &Color) -> String {
        color.to_string()
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
