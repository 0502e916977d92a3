//! Colour extraction engine.
//!
//! Two extractors share one output shape:
//!
//! - [`extract_raster`] for decoded RGBA pixel grids
//! - [`extract_vector`] for parsed SVG markup
//!
//! [`detect`] dispatches on the asset kind. Nothing here performs I/O or
//! keeps state between calls; decoding is done by [`crate::parser`].

pub mod raster;
pub mod vector;

use crate::error::Result;
use crate::parser::{decode_png, parse_svg_bytes};
use crate::types::{Asset, AssetKind, ExtractionResult};

pub use raster::extract_raster;
pub use vector::{extract_vector, is_visible};

/// Extract the colours of a decoded asset.
///
/// Unsupported assets yield an empty result rather than an error.
pub fn detect(asset: &Asset) -> ExtractionResult {
    match asset {
        Asset::Raster(grid) => extract_raster(grid),
        Asset::Vector(root) => extract_vector(root),
        Asset::Unsupported => ExtractionResult::empty(),
    }
}

/// Decode raw asset bytes of the given kind.
///
/// Unsupported kinds are not decoded at all.
pub fn decode(bytes: &[u8], kind: AssetKind) -> Result<Asset> {
    Ok(match kind {
        AssetKind::Png => Asset::Raster(decode_png(bytes)?),
        AssetKind::Svg => Asset::Vector(parse_svg_bytes(bytes)?),
        AssetKind::Unsupported => Asset::Unsupported,
    })
}

/// Decode and extract in one step.
///
/// Only decoding can fail; an unsupported kind returns an empty result.
pub fn detect_bytes(bytes: &[u8], kind: AssetKind) -> Result<ExtractionResult> {
    Ok(detect(&decode(bytes, kind)?))
}
