//! Detect command implementation.
//!
//! Reports the distinct colours of each asset, as text or JSON.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::detect_files;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::report::{Outcome, Report};

/// Detect the colours used in PNG and SVG assets
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Print a JSON report to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DetectArgs, printer: &Printer) -> Result<()> {
    let discovery = super::resolve_inputs(&args.paths)?;
    let files = discovery.files();

    printer.status("Scanning", &plural(files.len(), "asset", "assets"));

    let report = detect_files(&files);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report, printer);
    }

    let failures = report.failure_count();
    if failures > 0 {
        printer.warning("Skipped", &plural(failures, "unreadable asset", "unreadable assets"));
    } else {
        printer.success("Finished", &plural(report.len(), "asset", "assets"));
    }

    Ok(())
}

/// Print one block per asset: the filename and count, then one colour per line.
fn print_report(report: &Report, printer: &Printer) {
    for entry in report.entries() {
        match &entry.outcome {
            Outcome::Detected(result) => {
                println!(
                    "{}: {}",
                    entry.filename,
                    plural(result.count(), "colour", "colours")
                );
                for colour in result.colours() {
                    println!("  {}", printer.swatch(colour));
                }
            }
            Outcome::Failed { error } => {
                printer.error("Failed", &format!("{}: {}", entry.filename, error));
            }
        }
    }
}
