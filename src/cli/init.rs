//! Init command implementation.
//!
//! Generates a `swatch.yaml` manifest from discovered assets, seeding the
//! palette with every colour they currently use.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{detect_files, discover, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::types::ColourSet;

/// Initialize a swatch project by generating a swatch.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing swatch.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SwatchError::Validation {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));

    let discovery = discover(&args.path)?;
    if discovery.has_manifest {
        printer.warning("Replacing", MANIFEST_FILENAME);
    }
    let files = discovery.scan.files();

    let source_dirs = source_dirs(&files, &discovery.root);

    let report = detect_files(&files);
    let palette: ColourSet = report
        .entries()
        .iter()
        .filter_map(|entry| entry.result())
        .flat_map(|result| result.colours().iter().cloned())
        .collect();

    let manifest = Manifest {
        sources: if source_dirs.len() == 1 && source_dirs.contains(".") {
            Vec::new()
        } else {
            source_dirs.iter().cloned().collect()
        },
        excludes: discovery.manifest.excludes.clone(),
        palette: palette.iter().map(|c| c.to_string()).collect(),
        max_colours: discovery.manifest.max_colours,
    };

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| SwatchError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({}, {})",
            MANIFEST_FILENAME,
            plural(files.len(), "asset", "assets"),
            plural(palette.len(), "colour", "colours")
        ),
    );

    Ok(())
}

/// Unique parent directories of `files`, relative to `root`.
fn source_dirs(files: &[&PathBuf], root: &Path) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|file| file.parent())
        .map(|parent| {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            }
        })
        .collect()
}
