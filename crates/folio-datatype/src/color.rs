//! Color values produced by evaluating color expressions.
//!
//! Colors enter the expression language three ways: hex color specs
//! (`#rgb`, `#rrggbb`), the `rgb(r, g, b)` function, and the
//! `system-color(name)` function
//! ([XSL 1.1 § 5.10 Core Function Library](https://www.w3.org/TR/xsl11/)).

use core::fmt;
use serde::Serialize;

use crate::error::PropertyError;

/// An RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// Red component (0-255).
    pub red: u8,
    /// Green component (0-255).
    pub green: u8,
    /// Blue component (0-255).
    pub blue: u8,
}

impl ColorValue {
    /// Black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (#ffffff).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from 8-bit components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from the numeric components of an `rgb()` call.
    ///
    /// Components are on the 0-255 scale and are clamped into range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_components(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: red.clamp(0.0, 255.0) as u8,
            green: green.clamp(0.0, 255.0) as u8,
            blue: blue.clamp(0.0, 255.0) as u8,
        }
    }

    /// Parse a hex color spec, with or without the leading `#`.
    ///
    /// Accepts the 3-digit form (each digit doubled, so `#fff` is
    /// `#ffffff`) and the 6-digit form. Anything else is an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the digit count is not 3 or 6, or a digit
    /// is not hexadecimal.
    pub fn from_hex(hex: &str) -> Result<Self, PropertyError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let component = |part: &str| {
            u8::from_str_radix(part, 16)
                .map_err(|_| PropertyError::new(format!("invalid hex digit in color: {hex}")))
        };

        match digits.len() {
            // Each digit stands for itself doubled: f -> ff.
            3 => Ok(Self {
                red: component(&digits[0..1])? * 17,
                green: component(&digits[1..2])? * 17,
                blue: component(&digits[2..3])? * 17,
            }),
            6 => Ok(Self {
                red: component(&digits[0..2])?,
                green: component(&digits[2..4])?,
                blue: component(&digits[4..6])?,
            }),
            _ => Err(PropertyError::new("color not 3 or 6 hex digits")),
        }
    }

    /// Look up a named system color.
    ///
    /// The table covers the sixteen keyword colors shared by HTML and
    /// the XSL system color set.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        match name {
            "aqua" => Some(Self::new(0, 255, 255)),
            "black" => Some(Self::BLACK),
            "blue" => Some(Self::new(0, 0, 255)),
            "fuchsia" => Some(Self::new(255, 0, 255)),
            "gray" => Some(Self::new(128, 128, 128)),
            "green" => Some(Self::new(0, 128, 0)),
            "lime" => Some(Self::new(0, 255, 0)),
            "maroon" => Some(Self::new(128, 0, 0)),
            "navy" => Some(Self::new(0, 0, 128)),
            "olive" => Some(Self::new(128, 128, 0)),
            "purple" => Some(Self::new(128, 0, 128)),
            "red" => Some(Self::new(255, 0, 0)),
            "silver" => Some(Self::new(192, 192, 192)),
            "teal" => Some(Self::new(0, 128, 128)),
            "white" => Some(Self::WHITE),
            "yellow" => Some(Self::new(255, 255, 0)),
            _ => None,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
