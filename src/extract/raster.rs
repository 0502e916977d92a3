//! Raster colour extraction.

use std::collections::HashSet;

use crate::types::{CanonicalColour, ColourSet, ExtractionResult, PixelGrid};

/// Collect the distinct colours of a pixel grid.
///
/// Fully transparent pixels (alpha 0) are skipped; every other pixel counts
/// by its exact RGB value, regardless of alpha. Pure white is reported as
/// `white`, everything else as `#RRGGBB`.
pub fn extract_raster(grid: &PixelGrid) -> ExtractionResult {
    let mut seen: HashSet<[u8; 3]> = HashSet::new();

    for &[r, g, b, a] in grid.pixels() {
        if a == 0 {
            continue;
        }
        seen.insert([r, g, b]);
    }

    seen.into_iter()
        .map(|[r, g, b]| CanonicalColour::from_rgb(r, g, b))
        .collect::<ColourSet>()
        .into()
}
