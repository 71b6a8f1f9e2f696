//! Parse failures shared by the datatype parsers.

use thiserror::Error;

/// Failure to parse one attribute token as a datatype value.
///
/// Only the leaf parsers ([`crate::Length::parse`], [`crate::Color::parse`])
/// surface these; the border shorthand parser absorbs them and keeps the
/// affected field at its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The numeric part of a length token is missing or malformed.
    #[error("invalid length '{0}'")]
    InvalidLength(String),
    /// The unit suffix of a length token is missing or not an ODF unit.
    #[error("unknown length unit '{0}'")]
    UnknownUnit(String),
    /// The token is neither a hex color nor a known color name.
    #[error("invalid color '{0}'")]
    InvalidColor(String),
}
