//! ODF color values and parsing.
//!
//! [OpenDocument v1.2 Part 1 § 18 (Datatypes), `color`](https://docs.oasis-open.org/office/v1.2/os/OpenDocument-v1.2-os-part1.html)
//!
//! The datatype is the six-digit hexadecimal RGB form (`#ff0000`). Parsing
//! also tolerates the abbreviated three-digit form and the basic color names
//! that legacy office documents carry; formatting always produces the
//! canonical six-digit lowercase form.

use std::fmt;

use serde::Serialize;

use crate::error::ParseError;

/// Opaque sRGB color. The ODF `color` datatype has no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Color {
    /// the red channel (0-255)
    pub r: u8,
    /// the green channel (0-255)
    pub g: u8,
    /// the blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Black (`#000000`), the default border color.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// White (`#ffffff`).
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    /// Create a color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse the hexadecimal notation, with or without the leading `#`.
    ///
    /// The six-digit form is the one the datatype defines; the three-digit
    /// form is converted by replicating digits (`#f00` reads as `#ff0000`,
    /// the CSS abbreviation rule).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // Multi-byte characters would put the digit slices below off a char
        // boundary.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Self { r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }

    /// Look up a color name, ASCII case-insensitively.
    ///
    /// Covers the basic 16 HTML colors plus the `grey` spelling - the set
    /// legacy producers write into attributes in place of hex.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Some(Self::rgb(255, 255, 255)),
            "black" => Some(Self::rgb(0, 0, 0)),
            "red" => Some(Self::rgb(255, 0, 0)),
            "green" => Some(Self::rgb(0, 128, 0)),
            "blue" => Some(Self::rgb(0, 0, 255)),
            "yellow" => Some(Self::rgb(255, 255, 0)),
            "gray" | "grey" => Some(Self::rgb(128, 128, 128)),
            "aqua" | "cyan" => Some(Self::rgb(0, 255, 255)),
            "fuchsia" | "magenta" => Some(Self::rgb(255, 0, 255)),
            "lime" => Some(Self::rgb(0, 255, 0)),
            "maroon" => Some(Self::rgb(128, 0, 0)),
            "navy" => Some(Self::rgb(0, 0, 128)),
            "olive" => Some(Self::rgb(128, 128, 0)),
            "purple" => Some(Self::rgb(128, 0, 128)),
            "silver" => Some(Self::rgb(192, 192, 192)),
            "teal" => Some(Self::rgb(0, 128, 128)),
            _ => None,
        }
    }

    /// Parse a color token: hex notation first, then the name table.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidColor`] if the token is neither a valid
    /// hex form nor a known name.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let token = text.trim();
        Self::from_hex(token)
            .or_else(|| Self::from_named(token))
            .ok_or_else(|| ParseError::InvalidColor(token.to_string()))
    }

    /// The canonical six-digit lowercase hex form, e.g. `#ff0000`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    /// Formats as the canonical `#rrggbb` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
