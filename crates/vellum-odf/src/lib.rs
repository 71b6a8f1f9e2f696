//! OpenDocument attribute datatypes for the Vellum document toolkit.
//!
//! # Scope
//!
//! This crate implements the typed values behind ODF formatting attributes:
//!
//! - **Lengths** - `<number><unit>` measurements (`0.5pt`, `1.27cm`) with
//!   absolute-unit conversions
//! - **Colors** - six-digit hex sRGB (`#ff0000`), the abbreviated
//!   three-digit form, and the basic legacy color names
//! - **Borders** - the `fo:border` shorthand (`0.5pt solid #ff0000` /
//!   `none`): tolerant parsing, canonical formatting, none-aware equality
//!
//! Values are constructed from attribute text extracted upstream by an XML
//! reader and format back to attribute text for a downstream writer to embed.
//! Locating attributes in markup, package I/O, and rendering live elsewhere.
//!
//! # Not Implemented
//!
//! - Relative units (`em`, `%`) - the ODF `length` datatype is absolute
//! - Color-space conversion beyond the sRGB hex/name forms
//! - Translated unit names

/// ODF attribute value types per [OpenDocument v1.2 Part 1 § 18 (Datatypes)](https://docs.oasis-open.org/office/v1.2/os/OpenDocument-v1.2-os-part1.html).
pub mod datatypes;
/// Parse failures shared by the datatype parsers.
pub mod error;

// Re-exports for convenience
pub use datatypes::{BorderStyle, Color, Length, LengthUnit, LineStyle};
pub use error::ParseError;
