//! Individual compliance checks.
//!
//! Each check looks at one report entry and returns zero or more
//! diagnostics.

use crate::report::ReportEntry;

use super::warning::Diagnostic;
use super::Policy;

/// The asset could not be read at all.
pub fn check_decode(entry: &ReportEntry) -> Option<Diagnostic> {
    let error = entry.error()?;
    Some(
        Diagnostic::error("swatch::check::decode", &entry.filename, error)
            .with_help("Re-export the asset as a valid PNG or SVG"),
    )
}

/// Every detected colour must be in the allowed palette.
///
/// Skipped when no palette is configured.
pub fn check_palette(entry: &ReportEntry, policy: &Policy) -> Vec<Diagnostic> {
    let Some(result) = entry.result() else {
        return vec![];
    };

    if policy.palette.is_empty() {
        return vec![];
    }

    result
        .colours()
        .difference(&policy.palette)
        .map(|colour| {
            Diagnostic::error(
                "swatch::check::off-palette",
                &entry.filename,
                format!("colour {} is not in the brand palette", colour),
            )
            .with_help("Replace it with a palette colour or add it to swatch.yaml")
        })
        .collect()
}

/// The asset must not use more colours than allowed.
pub fn check_max_colours(entry: &ReportEntry, policy: &Policy) -> Option<Diagnostic> {
    let result = entry.result()?;
    let max = policy.max_colours?;

    if result.count() <= max {
        return None;
    }

    Some(Diagnostic::error(
        "swatch::check::too-many-colours",
        &entry.filename,
        format!("uses {} colours, at most {} allowed", result.count(), max),
    ))
}

/// An asset with no detectable colours is suspicious but not fatal.
pub fn check_no_colours(entry: &ReportEntry) -> Option<Diagnostic> {
    let result = entry.result()?;

    if result.count() > 0 {
        return None;
    }

    Some(
        Diagnostic::warning(
            "swatch::check::no-colours",
            &entry.filename,
            "no colours detected",
        )
        .with_help("The asset may be fully transparent, hidden, or an unsupported type"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwatchError;
    use crate::report::Report;
    use crate::types::{CanonicalColour, ColourSet, ExtractionResult};

    fn detected(colours: Vec<CanonicalColour>) -> ReportEntry {
        let mut report = Report::new();
        report.push_detected("logo.svg", ExtractionResult::new(colours.into_iter().collect()));
        report.entries()[0].clone()
    }

    fn failed() -> ReportEntry {
        let mut report = Report::new();
        report.push_failed(
            "logo.png",
            &SwatchError::Decode {
                format: "PNG",
                message: "truncated".to_string(),
            },
        );
        report.entries()[0].clone()
    }

    fn policy(palette: &[CanonicalColour], max_colours: Option<usize>) -> Policy {
        Policy {
            palette: palette.iter().cloned().collect::<ColourSet>(),
            max_colours,
        }
    }

    #[test]
    fn test_check_decode() {
        let d = check_decode(&failed()).unwrap();
        assert_eq!(d.code, "swatch::check::decode");
        assert_eq!(d.asset, "logo.png");
        assert!(check_decode(&detected(vec![])).is_none());
    }

    #[test]
    fn test_check_palette() {
        let red = CanonicalColour::from_rgb(255, 0, 0);
        let entry = detected(vec![CanonicalColour::White, red.clone()]);

        let diagnostics = check_palette(&entry, &policy(&[CanonicalColour::White], None));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("#FF0000"));

        let diagnostics = check_palette(&entry, &policy(&[CanonicalColour::White, red], None));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_check_palette_without_palette() {
        let entry = detected(vec![CanonicalColour::from_rgb(1, 2, 3)]);
        assert!(check_palette(&entry, &Policy::default()).is_empty());
    }

    #[test]
    fn test_check_max_colours() {
        let entry = detected(vec![
            CanonicalColour::White,
            CanonicalColour::from_rgb(0, 0, 0),
            CanonicalColour::from_rgb(255, 0, 0),
        ]);

        assert!(check_max_colours(&entry, &policy(&[], Some(3))).is_none());
        assert!(check_max_colours(&entry, &policy(&[], None)).is_none());

        let d = check_max_colours(&entry, &policy(&[], Some(2))).unwrap();
        assert_eq!(d.message, "uses 3 colours, at most 2 allowed");
    }

    #[test]
    fn test_check_no_colours() {
        let d = check_no_colours(&detected(vec![])).unwrap();
        assert_eq!(d.code, "swatch::check::no-colours");
        assert!(check_no_colours(&detected(vec![CanonicalColour::White])).is_none());
        assert!(check_no_colours(&failed()).is_none());
    }
}
