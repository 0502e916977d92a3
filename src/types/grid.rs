//! Decoded raster pixel grid.

use crate::error::{Result, SwatchError};

/// A decoded RGBA image, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelGrid {
    /// Create a grid from RGBA quadruples.
    ///
    /// Fails if the number of pixels does not match `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(SwatchError::Decode {
                format: "RGBA",
                message: format!(
                    "{}x{} grid needs {} pixels, got {}",
                    width,
                    height,
                    expected,
                    pixels.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from a flat RGBA byte buffer (4 bytes per pixel).
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(SwatchError::Decode {
                format: "RGBA",
                message: format!("buffer length {} is not a multiple of 4", bytes.len()),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();

        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Get the pixel at (x, y), or None if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
