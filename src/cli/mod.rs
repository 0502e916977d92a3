pub mod check;
pub mod completions;
pub mod detect;
pub mod init;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::discovery::{discover, discover_paths, DiscoveryResult, Manifest, MANIFEST_FILENAME};
use crate::error::Result;

/// swatch - Count and check the colours used in logos
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the colours used in PNG and SVG assets
    Detect(detect::DetectArgs),

    /// Check assets against the brand colour policy
    Check(check::CheckArgs),

    /// Initialize a swatch project (generates swatch.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Resolve command-line paths into assets.
///
/// With no paths, the current directory is discovered as a project. With
/// explicit paths, a swatch.yaml in the current directory still supplies
/// excludes and policy.
pub(crate) fn resolve_inputs(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    if paths.is_empty() {
        return discover(".");
    }

    let manifest_path = Path::new(MANIFEST_FILENAME);
    let manifest = if manifest_path.exists() {
        Manifest::load(manifest_path)?
    } else {
        Manifest::default()
    };

    let mut result = discover_paths(paths, manifest);
    result.has_manifest = manifest_path.exists();
    Ok(result)
}
