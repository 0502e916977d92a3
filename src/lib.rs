//! swatch - Colour detection for logo assets
//!
//! A library for extracting the set of distinct colours used by PNG and SVG
//! logos, normalizing them to canonical labels, and checking them against a
//! brand palette.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod output;
pub mod parser;
pub mod report;
pub mod types;
pub mod validation;

pub use discovery::{
    detect_file, detect_files, discover, discover_paths, load_asset, DiscoveryResult, Manifest,
    ScanResult,
};
pub use error::{Result, SwatchError};
pub use extract::{detect, detect_bytes, extract_raster, extract_vector};
pub use parser::{decode_png, normalize_colour, parse_svg};
pub use report::{Outcome, Report, ReportEntry};
pub use types::{
    Asset, AssetKind, CanonicalColour, ColourSet, ExtractionResult, MarkupNode, PixelGrid,
};
pub use validation::{check_report, Diagnostic, Policy, Severity, ValidationResult};
