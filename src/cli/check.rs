//! Check command implementation.
//!
//! Detects colours and validates them against the palette and colour limit
//! from swatch.yaml or the command line.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::detect_files;
use crate::error::{Result, SwatchError};
use crate::output::{plural, Printer};
use crate::parser::normalize_colour;
use crate::validation::{check_report, print_diagnostics, Policy};

/// Check assets against the brand colour policy
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Allowed colours, comma separated (overrides the manifest palette)
    #[arg(long, value_delimiter = ',')]
    pub palette: Vec<String>,

    /// Maximum distinct colours per asset (overrides the manifest)
    #[arg(long)]
    pub max_colours: Option<usize>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let discovery = super::resolve_inputs(&args.paths)?;
    let policy = build_policy(&args, &Policy::from_manifest(&discovery.manifest));

    let files = discovery.files();
    printer.status("Checking", &plural(files.len(), "asset", "assets"));

    let report = detect_files(&files);
    let result = check_report(&report, &policy);

    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(SwatchError::Validation {
            message: format!(
                "{} found in {}",
                plural(result.error_count(), "problem", "problems"),
                plural(report.len(), "asset", "assets")
            ),
            help: Some("Fix the assets or update the palette in swatch.yaml".to_string()),
        });
    }

    Ok(())
}

/// Command-line options take precedence over the manifest.
fn build_policy(args: &CheckArgs, manifest_policy: &Policy) -> Policy {
    let palette = if args.palette.is_empty() {
        manifest_policy.palette.clone()
    } else {
        args.palette.iter().map(|c| normalize_colour(c)).collect()
    };

    Policy {
        palette,
        max_colours: args.max_colours.or(manifest_policy.max_colours),
    }
}
