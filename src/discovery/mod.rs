//! Asset discovery for swatch projects.
//!
//! Finds PNG and SVG assets either from explicit paths or by scanning a
//! project directory, optionally guided by a `swatch.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use swatch::discovery::{discover, detect_files};
//!
//! let result = discover("./brand")?;
//! let report = detect_files(&result.files());
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{detect_file, detect_files, load_asset};
pub use manifest::Manifest;
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "swatch.yaml";

/// Result of discovering assets in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no swatch.yaml was found).
    pub manifest: Manifest,

    /// Whether a swatch.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered asset files.
    pub scan: ScanResult,

    /// Explicitly named files with an unsupported extension.
    pub unsupported: Vec<PathBuf>,
}

impl DiscoveryResult {
    /// Every file to report on: scanned assets by path, then unsupported files.
    pub fn files(&self) -> Vec<PathBuf> {
        self.scan
            .files()
            .into_iter()
            .chain(&self.unsupported)
            .cloned()
            .collect()
    }
}

/// Discover assets in a project directory.
///
/// Loads `swatch.yaml` from the root if present and scans its sources,
/// otherwise scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
        unsupported: Vec::new(),
    })
}

/// Discover assets from explicit files and directories.
///
/// Explicit files are kept even if their extension is unsupported, so they
/// show up in reports with an empty result instead of vanishing. The
/// manifest is carried through unchanged; its exclude patterns apply when
/// scanning directories.
pub fn discover_paths(paths: &[PathBuf], manifest: Manifest) -> DiscoveryResult {
    let mut scan = ScanResult::new();
    let mut unsupported = Vec::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if !scan.push(path.clone()) {
            unsupported.push(path.clone());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
        unsupported,
    }
}
