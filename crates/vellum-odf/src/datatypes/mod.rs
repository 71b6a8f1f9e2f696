//! ODF attribute value types and parsing.
//!
//! - [OpenDocument v1.2 Part 1 § 18 (Datatypes)](https://docs.oasis-open.org/office/v1.2/os/OpenDocument-v1.2-os-part1.html)
//! - [CSS 2.1 § 8.5 Border properties](https://www.w3.org/TR/CSS2/box.html#border-properties)

mod border;
mod color;
mod length;

pub use border::{BorderStyle, LineStyle};
pub use color::Color;
pub use length::{Length, LengthUnit};
