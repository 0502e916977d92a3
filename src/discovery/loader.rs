//! Asset loader - reads discovered files and runs detection.

use std::fs;
use std::path::Path;

use crate::error::{Result, SwatchError};
use crate::extract::{decode, detect};
use crate::output::display_path;
use crate::report::Report;
use crate::types::{Asset, AssetKind, ExtractionResult};

/// Read and decode an asset file, choosing the decoder by extension.
///
/// Files with an unsupported extension are not read.
pub fn load_asset(path: &Path) -> Result<Asset> {
    let kind = AssetKind::from_path(path);
    if !kind.is_supported() {
        return Ok(Asset::Unsupported);
    }

    let bytes = fs::read(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    decode(&bytes, kind)
}

/// Detect the colours of a single asset file.
pub fn detect_file(path: &Path) -> Result<ExtractionResult> {
    Ok(detect(&load_asset(path)?))
}

/// Detect colours for every file, recording failures per file.
pub fn detect_files<P: AsRef<Path>>(paths: &[P]) -> Report {
    let mut report = Report::new();

    for path in paths {
        let path = path.as_ref();
        let filename = display_path(path);

        match detect_file(path) {
            Ok(result) => report.push_detected(filename, result),
            Err(e) => report.push_failed(filename, &e),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_detect_svg_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.svg");
        fs::write(&path, r##"<svg><rect fill="#0af"/></svg>"##).unwrap();

        let result = detect_file(&path).unwrap();
        assert_eq!(result.labels(), vec!["#00AAFF"]);
    }

    #[test]
    fn test_detect_png_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");

        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();

        let result = detect_file(&path).unwrap();
        assert_eq!(result.labels(), vec!["white", "#FF0000"]);
    }

    #[test]
    fn test_detect_fixture_logo() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/logo.svg");

        let result = detect_file(&path).unwrap();
        assert_eq!(
            result.labels(),
            vec!["white", "#1D1D1B", "#7F0000", "#E30613", "#FFC800", "navy"]
        );
    }

    #[test]
    fn test_unsupported_file_not_read() {
        let result = detect_file(Path::new("/nonexistent/logo.gif")).unwrap();
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_missing_file() {
        let err = detect_file(Path::new("/nonexistent/logo.svg")).unwrap_err();
        assert!(matches!(err, SwatchError::Io { .. }));
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.png");
        let good = dir.path().join("good.svg");
        fs::write(&broken, "not a png").unwrap();
        fs::write(&good, r#"<svg fill="white"/>"#).unwrap();

        let report = detect_files(&[broken, good]);

        assert_eq!(report.len(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(report.entries()[0].error().is_some());
        assert_eq!(report.entries()[1].result().map(|r| r.count()), Some(1));
    }
}
