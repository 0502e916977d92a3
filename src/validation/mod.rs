//! Palette compliance checks for detection reports.
//!
//! Runs every check against every entry of a [`Report`] and collects the
//! findings. Used by `swatch check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::discovery::Manifest;
use crate::output::{plural, Printer};
use crate::report::Report;
use crate::types::ColourSet;

/// The colour rules an asset must satisfy.
#[derive(Debug, Clone, Default)]
pub struct Policy {
    /// Allowed colours. Empty means any colour is allowed.
    pub palette: ColourSet,
    /// Maximum distinct colours per asset.
    pub max_colours: Option<usize>,
}

impl Policy {
    /// Build a policy from the manifest's `palette` and `max_colours`.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            palette: manifest.palette_colours(),
            max_colours: manifest.max_colours,
        }
    }
}

/// Run all compliance checks against a report.
pub fn check_report(report: &Report, policy: &Policy) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in report.entries() {
        result.extend(checks::check_decode(entry));
        result.extend(checks::check_palette(entry, policy));
        result.extend(checks::check_max_colours(entry, policy));
        result.extend(checks::check_no_colours(entry));
    }

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let is_error = d.severity == Severity::Error;
        eprintln!(
            "{}[{}]: {}: {}",
            printer.severity(&d.severity.to_string(), is_error),
            d.code,
            printer.cyan(&d.asset),
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.warning_count() > 0 {
        printer.warning("Passed", &format!("with {}", warnings));
    } else {
        printer.success("Passed", "all assets are compliant");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwatchError;
    use crate::types::{CanonicalColour, ExtractionResult};

    fn report() -> Report {
        let mut report = Report::new();
        report.push_detected(
            "ok.svg",
            ExtractionResult::new(vec![CanonicalColour::White].into_iter().collect()),
        );
        report.push_detected(
            "loud.svg",
            ExtractionResult::new(
                vec![
                    CanonicalColour::White,
                    CanonicalColour::from_rgb(0, 255, 0),
                    CanonicalColour::from_rgb(0, 0, 255),
                ]
                .into_iter()
                .collect(),
            ),
        );
        report.push_detected("blank.png", ExtractionResult::empty());
        report.push_failed(
            "bad.png",
            &SwatchError::Decode {
                format: "PNG",
                message: "bad".to_string(),
            },
        );
        report
    }

    #[test]
    fn test_check_report_without_policy() {
        let result = check_report(&report(), &Policy::default());

        // decode failure + blank warning
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.for_asset("ok.svg").count(), 0);
    }

    #[test]
    fn test_check_report_with_policy() {
        let policy = Policy {
            palette: vec![CanonicalColour::White, CanonicalColour::from_rgb(0, 0, 255)]
                .into_iter()
                .collect(),
            max_colours: Some(2),
        };

        let result = check_report(&report(), &policy);

        let loud: Vec<&str> = result.for_asset("loud.svg").map(|d| d.code.as_str()).collect();
        assert_eq!(
            loud,
            vec!["swatch::check::off-palette", "swatch::check::too-many-colours"]
        );
        assert_eq!(result.for_asset("ok.svg").count(), 0);
    }

    #[test]
    fn test_policy_from_manifest() {
        let manifest = Manifest {
            palette: vec!["#FFF".to_string(), "#E30613".to_string()],
            max_colours: Some(2),
            ..Default::default()
        };

        let policy = Policy::from_manifest(&manifest);
        assert_eq!(policy.palette.len(), 2);
        assert_eq!(policy.max_colours, Some(2));
    }
}
