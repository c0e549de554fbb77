//! Command line interface for the packager.
//!
//! This module wires argument parsing, manifest loading, settings
//! construction, workflow execution, and the completion summary.

mod args;
mod output;

pub use args::{Args, DEFAULT_ENTRY_POINT, RuntimeConfig};
pub use output::OutputManager;

use std::path::PathBuf;

use crate::error::{CliError, Result};
use crate::metadata;
use crate::packager::{PackagedArtifact, Packager, SettingsBuilder, summary};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }
    let config = RuntimeConfig::from(&args);

    let manifest = metadata::load_manifest(&args.manifest)?;
    config.verbose_println(&format!("Manifest: {}", args.manifest.display()))?;

    // CLI flags win over the manifest, the manifest over built-in defaults.
    let entry_point = args
        .entry_point
        .clone()
        .or_else(|| manifest.entry_point.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY_POINT));
    if !entry_point.is_file() {
        return Err(CliError::InvalidArguments {
            reason: format!("Entry point not found: {}", entry_point.display()),
        }
        .into());
    }

    let product_name = args
        .name
        .clone()
        .or_else(|| manifest.name.clone())
        .or_else(|| {
            entry_point
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .ok_or_else(|| CliError::InvalidArguments {
            reason: format!(
                "Cannot derive an output name from {}",
                entry_point.display()
            ),
        })?;

    let mut builder = SettingsBuilder::new()
        .product_name(&product_name)
        .entry_point(&entry_point)
        .bundler_program(&args.bundler);
    if let Some(version) = &manifest.version {
        builder = builder.version(version.clone());
    }
    let settings = builder.build()?;

    config.section(&format!("Packaging {product_name}"))?;
    config.progress(&format!("Entry point: {}", entry_point.display()))?;
    config.progress(&format!("Bundler: {}", args.bundler))?;
    if manifest.version.is_none() {
        config.warn("No release version in the manifest; tag guidance uses a placeholder")?;
    }

    let packager = Packager::new(settings);
    let artifact = packager.package().await?;

    print_summary(&config, &packager, &artifact)?;

    Ok(0)
}

/// Print the completion summary and release guidance.
fn print_summary(
    config: &RuntimeConfig,
    packager: &Packager,
    artifact: &PackagedArtifact,
) -> std::io::Result<()> {
    config.section("Packaging complete")?;
    config.success(&format!("Created {}", artifact.path.display()))?;
    config.indent(&format!(
        "Size:    {} ({} bytes)",
        summary::format_size(artifact.size),
        artifact.size
    ))?;
    config.indent(&format!("SHA-256: {}", artifact.checksum))?;

    config.section("Next steps")?;
    for command in summary::release_guidance(packager.settings().version()) {
        config.indent(&command)?;
    }
    config.progress("Windows and macOS artifacts are built by the CI pipeline on tag push.")?;

    Ok(())
}

/// Parse arguments without executing (for testing)
#[allow(dead_code)] // Public API - preserved for external consumers
pub fn parse_args() -> Args {
    Args::parse_args()
}

/// Validate arguments without executing (for testing)
#[allow(dead_code)] // Public API - preserved for external consumers
pub fn validate_args(args: &Args) -> std::result::Result<(), String> {
    args.validate()
}
