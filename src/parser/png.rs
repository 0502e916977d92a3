//! PNG decoding.
//!
//! Decodes PNG bytes into an RGBA [`PixelGrid`]. Palette, greyscale and RGB
//! images are converted to RGBA first.

use image::{ImageFormat, RgbaImage};

use crate::error::{Result, SwatchError};
use crate::types::PixelGrid;

/// Decode PNG bytes into a pixel grid.
pub fn decode_png(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| SwatchError::Decode {
            format: "PNG",
            message: e.to_string(),
        })?
        .to_rgba8();

    grid_from_image(img)
}

/// Convert an already-decoded RGBA image into a pixel grid.
pub fn grid_from_image(img: RgbaImage) -> Result<PixelGrid> {
    let (width, height) = img.dimensions();
    PixelGrid::from_raw(width, height, img.into_raw())
}
