//! ODF border specification values.
//!
//! The `fo:border` attribute family carries a compact shorthand for one box
//! edge - width, line style, color - or the literal `none`:
//!
//! ```text
//! fo:border="0.5pt solid #ff0000"    fo:border="none"
//! ```
//!
//! - [OpenDocument v1.2 Part 1 § 20, `fo:border`](https://docs.oasis-open.org/office/v1.2/os/OpenDocument-v1.2-os-part1.html)
//! - [CSS 2.1 § 8.5.4 Border shorthand properties](https://www.w3.org/TR/CSS2/box.html#border-shorthand-properties)
//!   (the grammar ODF inherits through XSL)

use std::fmt;

use serde::Serialize;

use vellum_common::warning::warn_once;

use super::color::Color;
use super::length::Length;

/// Line style of a border edge.
///
/// [CSS 2.1 § 8.5.3](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
/// keywords extended with the compound dash patterns and the thin double
/// variant office suites draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LineStyle {
    /// No recognized line style. This is the parse default when the style
    /// token is missing or unknown - NOT the same state as an explicit
    /// `"none"` border (see [`BorderStyle::is_none`]).
    #[default]
    None,
    /// Single solid line.
    Solid,
    /// Two solid lines.
    Double,
    /// Dotted line.
    Dotted,
    /// Dashed line.
    Dashed,
    /// Alternating dashes and dots.
    DotDash,
    /// Dashes alternating with pairs of dots.
    DotDotDash,
    /// Short, closely spaced dashes.
    FineDashed,
    /// Two thin solid lines.
    DoubleThin,
}

impl LineStyle {
    /// Look up a shorthand style keyword, case-sensitively.
    ///
    /// Both `dot-dashed` (the spelling some legacy producers emit) and
    /// `dash-dot` name [`LineStyle::DotDash`].
    #[must_use]
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "solid" => Some(Self::Solid),
            "double" => Some(Self::Double),
            "dotted" => Some(Self::Dotted),
            "dashed" => Some(Self::Dashed),
            "dot-dashed" | "dash-dot" => Some(Self::DotDash),
            "dash-dot-dot" => Some(Self::DotDotDash),
            "fine-dashed" => Some(Self::FineDashed),
            "double-thin" => Some(Self::DoubleThin),
            _ => None,
        }
    }

    /// The canonical keyword this style serializes as.
    ///
    /// Deliberately not the inverse of [`LineStyle::from_keyword`]:
    /// [`LineStyle::DotDash`] always renders as `dash-dot` whichever spelling
    /// it was parsed from, and [`LineStyle::None`] renders as `solid`, so a
    /// border whose style token was missing or unrecognized serializes as a
    /// solid border.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::None | Self::Solid => "solid",
            Self::Double => "double",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::DotDash => "dash-dot",
            Self::DotDotDash => "dash-dot-dot",
            Self::FineDashed => "fine-dashed",
            Self::DoubleThin => "double-thin",
        }
    }
}

/// A border specification: width, line style, and color, plus the explicit
/// "no border" state.
///
/// Two flags ride along with the three value fields:
///
/// - the **none** flag: the border was explicitly `"none"`. When set, the
///   value fields are not meaningful and equality ignores them.
/// - the **initialized** flag: some constructor or parse has produced this
///   value. Only a default-constructed value and `parse("")` report
///   `initialized() == false`, which lets a document reader tell "attribute
///   absent" from "attribute parsed but empty".
///
/// The none flag and [`LineStyle::None`] are independent. Parsing
/// `"1pt wavy #000000"` leaves the style at its [`LineStyle::None`] default
/// yet reports `is_none() == false`: a border was specified, its style just
/// was not understood. The two must not be collapsed into one another.
#[derive(Debug, Serialize)]
pub struct BorderStyle {
    length: Length,
    style: LineStyle,
    color: Color,
    none: bool,
    initialized: bool,
}

impl BorderStyle {
    /// Build a border from explicit parts.
    ///
    /// The none state is derived here: a [`LineStyle::None`] style means no
    /// border. This is the one constructor where the two are coupled;
    /// parsing keeps them independent.
    #[must_use]
    pub fn from_parts(color: Color, style: LineStyle, length: Length) -> Self {
        Self {
            length,
            style,
            color,
            none: style == LineStyle::None,
            initialized: true,
        }
    }

    /// Parse the `fo:border` shorthand.
    ///
    /// The parser is total: it never fails. A sub-token that does not parse
    /// is dropped (with a deduplicated warning) and the matching field keeps
    /// its default, so one bad token never discards the rest of the
    /// attribute. Hand-edited and legacy documents lean on this.
    ///
    /// - `"none"` - case-insensitive, surrounding whitespace ignored -
    ///   yields the explicit no-border value.
    /// - The empty string yields the default value with `initialized()`
    ///   still false.
    /// - Anything else is split on runs of spaces and tabs into at most
    ///   three tokens - width, style keyword, color, in that order - and
    ///   reports `is_none() == false` whether or not any token was
    ///   recognized. Tokens past the third are ignored.
    ///
    /// Style keywords match case-sensitively even though the `"none"` check
    /// does not; documents accepted under that asymmetry stay accepted.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        // A specified border starts with the none flag cleared; only the
        // "none" branch sets it.
        let mut border = Self {
            none: false,
            ..Self::default()
        };

        if text.is_empty() {
            // Absent attribute: `initialized` stays false.
            return border;
        }

        if text.trim().eq_ignore_ascii_case("none") {
            border.none = true;
            border.initialized = true;
            return border;
        }

        let mut tokens = text.split([' ', '\t']).filter(|token| !token.is_empty());

        if let Some(token) = tokens.next() {
            match Length::parse(token) {
                Ok(length) => border.length = length,
                // Drop the bad width; the style and color tokens still parse.
                Err(err) => warn_once(
                    "ODF",
                    &format!("ignoring malformed border width '{token}': {err}"),
                ),
            }
        }

        if let Some(token) = tokens.next() {
            match LineStyle::from_keyword(token) {
                Some(style) => border.style = style,
                None => warn_once("ODF", &format!("ignoring unknown border line style '{token}'")),
            }
        }

        if let Some(token) = tokens.next() {
            match Color::parse(token) {
                Ok(color) => border.color = color,
                Err(err) => warn_once(
                    "ODF",
                    &format!("ignoring malformed border color '{token}': {err}"),
                ),
            }
        }

        border.initialized = true;
        border
    }

    /// True iff the border is explicitly absent (`"none"`).
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.none
    }

    /// True once any constructor or parse has produced this value.
    #[must_use]
    pub const fn initialized(&self) -> bool {
        self.initialized
    }

    /// Border thickness. Meaningful only when not [`BorderStyle::is_none`].
    #[must_use]
    pub const fn length(&self) -> Length {
        self.length
    }

    /// Line style. Meaningful only when not [`BorderStyle::is_none`].
    #[must_use]
    pub const fn style(&self) -> LineStyle {
        self.style
    }

    /// Border color. Meaningful only when not [`BorderStyle::is_none`].
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }
}

impl Default for BorderStyle {
    /// The "nothing specified yet" state: no border, not initialized.
    fn default() -> Self {
        Self {
            length: Length::default(),
            style: LineStyle::None,
            color: Color::default(),
            none: true,
            initialized: false,
        }
    }
}

impl Clone for BorderStyle {
    /// Field-wise copy, except that a copy always reports `initialized()`.
    /// Cloning an untouched default yields an initialized value.
    fn clone(&self) -> Self {
        Self {
            length: self.length,
            style: self.style,
            color: self.color,
            none: self.none,
            initialized: true,
        }
    }
}

impl PartialEq for BorderStyle {
    /// Equality gated on the none state: two `"none"` borders are equal
    /// whatever their value fields hold, a `"none"` border never equals a
    /// drawn one, and drawn borders compare color, length, and style
    /// structurally. The initialized flag never participates.
    fn eq(&self, other: &Self) -> bool {
        if self.none && other.none {
            return true;
        }
        if self.none || other.none {
            return false;
        }
        self.color == other.color && self.length == other.length && self.style == other.style
    }
}

impl fmt::Display for BorderStyle {
    /// Formats the canonical shorthand: exactly `none` for an absent border,
    /// otherwise `<length> <keyword> <color>`.
    ///
    /// Not a strict inverse of [`BorderStyle::parse`]: a value holding the
    /// [`LineStyle::None`] style without the none flag renders as `solid`
    /// (see [`LineStyle::keyword`]).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.none {
            return f.write_str("none");
        }
        write!(f, "{} {} {}", self.length, self.style.keyword(), self.color)
    }
}
