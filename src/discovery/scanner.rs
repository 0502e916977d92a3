//! File system scanner for discovering logo assets.
//!
//! Recursively scans directories for `.png` and `.svg` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::AssetKind;

use super::manifest::Manifest;

/// Result of scanning for assets.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered PNG files.
    pub pngs: Vec<PathBuf>,
    /// Discovered SVG files.
    pub svgs: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.pngs.len() + self.svgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Record a file under its kind. Unsupported files are ignored.
    pub fn push(&mut self, path: PathBuf) -> bool {
        match AssetKind::from_path(&path) {
            AssetKind::Png => self.pngs.push(path),
            AssetKind::Svg => self.svgs.push(path),
            AssetKind::Unsupported => return false,
        }
        true
    }

    /// Get files of a specific asset kind.
    pub fn files_of_kind(&self, kind: AssetKind) -> &[PathBuf] {
        match kind {
            AssetKind::Png => &self.pngs,
            AssetKind::Svg => &self.svgs,
            AssetKind::Unsupported => &[],
        }
    }

    /// All discovered files, sorted by path.
    pub fn files(&self) -> Vec<&PathBuf> {
        let mut files: Vec<&PathBuf> = self.pngs.iter().chain(&self.svgs).collect();
        files.sort();
        files
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.pngs.extend(other.pngs);
        self.svgs.extend(other.svgs);
    }
}

/// Scan a directory for PNG and SVG files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if manifest.is_excluded(path) {
            continue;
        }

        result.push(path.to_path_buf());
    }

    result
}

/// Scan multiple source paths relative to a base directory.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}
