//! Core types for colour extraction.

mod asset;
mod colour;
mod grid;
mod markup;
mod result;

pub use asset::{Asset, AssetKind};
pub use colour::CanonicalColour;
pub use grid::PixelGrid;
pub use markup::{Descendants, MarkupNode};
pub use result::{ColourSet, ExtractionResult};
