//! Asset kinds and decoded assets.

use std::fmt;
use std::path::Path;

use super::{MarkupNode, PixelGrid};

/// The kind of graphic asset, chosen from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Png,
    Svg,
    Unsupported,
}

impl AssetKind {
    /// Detect the asset kind from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => AssetKind::Png,
            "svg" => AssetKind::Svg,
            _ => AssetKind::Unsupported,
        }
    }

    /// Detect the asset kind from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(AssetKind::Unsupported, Self::from_extension)
    }

    pub fn is_supported(self) -> bool {
        self != AssetKind::Unsupported
    }

    pub fn name(self) -> &'static str {
        match self {
            AssetKind::Png => "png",
            AssetKind::Svg => "svg",
            AssetKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decoded asset content handed to the extractors.
#[derive(Debug, Clone)]
pub enum Asset {
    Raster(PixelGrid),
    Vector(MarkupNode),
    Unsupported,
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Raster(_) => AssetKind::Png,
            Asset::Vector(_) => AssetKind::Svg,
            Asset::Unsupported => AssetKind::Unsupported,
        }
    }
}
