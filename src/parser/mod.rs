//! Decoding and token parsing for graphic assets.
//!
//! This module sits at the boundary between raw asset bytes and the colour
//! extractors:
//!
//! - [`png`] decodes PNG bytes into a [`PixelGrid`](crate::types::PixelGrid)
//! - [`svg`] parses SVG text into a [`MarkupNode`](crate::types::MarkupNode) tree
//! - [`style`] splits inline `style` attributes into declarations
//! - [`colour`] normalizes colour tokens to canonical form
//!
//! # Usage
//!
//! ```ignore
//! use swatch::parser::{normalize_colour, parse_svg};
//!
//! let root = parse_svg(r##"<svg><rect fill="#0af"/></svg>"##)?;
//! let fill = root.children()[0].attribute("fill").unwrap();
//! assert_eq!(normalize_colour(fill).to_string(), "#00AAFF");
//! ```

pub mod colour;
pub mod png;
pub mod style;
pub mod svg;

pub use colour::{is_white, normalize_colour};
pub use png::{decode_png, grid_from_image};
pub use style::{declarations, Declaration};
pub use svg::{parse_svg, parse_svg_bytes};
