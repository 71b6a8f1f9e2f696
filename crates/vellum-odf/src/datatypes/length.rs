//! ODF length values and parsing.
//!
//! [OpenDocument v1.2 Part 1 § 18 (Datatypes), `length`](https://docs.oasis-open.org/office/v1.2/os/OpenDocument-v1.2-os-part1.html)
//!
//! "A length is a number followed by a unit of measure" - the unit set is the
//! absolute one (cm, mm, in, pt, pc, px); relative units like `em` are not
//! part of the datatype.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::error::ParseError;

/// Points per inch. [CSS 2.1 § 4.3.2](https://www.w3.org/TR/CSS2/syndata.html#length-units): "1pt = 1/72nd of 1in".
const PT_PER_IN: f64 = 72.0;
/// Centimeters per inch.
const CM_PER_IN: f64 = 2.54;
/// Millimeters per inch.
const MM_PER_IN: f64 = 25.4;
/// Picas per inch. "1pc = 12pt".
const PC_PER_IN: f64 = 6.0;
/// Pixels per inch. "1px = 1/96th of 1in".
const PX_PER_IN: f64 = 96.0;

/// Unit of measure of an ODF length.
///
/// The keyword form of each unit is its lowercase name (`cm`, `mm`, ...),
/// both when parsing and when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LengthUnit {
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Inches.
    In,
    /// Points, 1/72 of an inch. The customary unit for border widths.
    #[default]
    Pt,
    /// Picas, 12 points.
    Pc,
    /// Pixels, 1/96 of an inch.
    Px,
}

/// A measurement: numeric value plus unit, e.g. `0.5pt` or `1.27cm`.
///
/// Equality is structural - `10mm` and `1cm` are distinct values even though
/// they measure the same distance. Compare [`Length::to_pt`] results when the
/// distance is what matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Create a length from a value and unit.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parse a length token: a decimal number immediately followed by a unit.
    ///
    /// Surrounding whitespace is ignored. The numeric part runs up to the
    /// first ASCII letter, so exponent notation does not parse (ODF documents
    /// do not carry it).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLength`] when the numeric part is missing
    /// or malformed, [`ParseError::UnknownUnit`] when the unit suffix is
    /// missing or not an ODF unit.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let token = text.trim();
        let unit_start = token
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(token.len());
        let (number, unit) = token.split_at(unit_start);

        let value = f64::from_str(number)
            .map_err(|_| ParseError::InvalidLength(token.to_string()))?;
        let unit = LengthUnit::from_str(unit)
            .map_err(|_| ParseError::UnknownUnit(unit.to_string()))?;

        Ok(Self { value, unit })
    }

    /// The numeric value, expressed in [`Length::unit`]s.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The unit the value is expressed in.
    #[must_use]
    pub const fn unit(self) -> LengthUnit {
        self.unit
    }

    /// The measured distance in points.
    ///
    /// Point values pass through untouched; other units convert through
    /// their inch ratios.
    #[must_use]
    pub fn to_pt(self) -> f64 {
        match self.unit {
            LengthUnit::Cm => self.value / CM_PER_IN * PT_PER_IN,
            LengthUnit::Mm => self.value / MM_PER_IN * PT_PER_IN,
            LengthUnit::In => self.value * PT_PER_IN,
            LengthUnit::Pt => self.value,
            LengthUnit::Pc => self.value * (PT_PER_IN / PC_PER_IN),
            LengthUnit::Px => self.value * (PT_PER_IN / PX_PER_IN),
        }
    }

    /// The measured distance in centimeters.
    #[must_use]
    pub fn to_cm(self) -> f64 {
        match self.unit {
            LengthUnit::Cm => self.value,
            LengthUnit::Mm => self.value / MM_PER_IN * CM_PER_IN,
            LengthUnit::In => self.value * CM_PER_IN,
            LengthUnit::Pt => self.value / PT_PER_IN * CM_PER_IN,
            LengthUnit::Pc => self.value / PC_PER_IN * CM_PER_IN,
            LengthUnit::Px => self.value / PX_PER_IN * CM_PER_IN,
        }
    }
}

impl fmt::Display for Length {
    /// Formats as `<value><unit>` with no separator: `0.5pt`, `1cm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
