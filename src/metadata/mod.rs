//! Release metadata from the optional packager.toml manifest.

use crate::error::{CliError, PackagerError, Result};
use std::path::{Path, PathBuf};

/// Package metadata extracted from packager.toml
#[derive(Debug, Default)]
pub struct PackageManifest {
    /// Output binary name from [package] name
    pub name: Option<String>,

    /// Release version from [package] version, semver-validated
    pub version: Option<semver::Version>,

    /// Python entry point from [package] entry-point
    pub entry_point: Option<PathBuf>,
}

/// Load the release manifest, if present (single read + parse).
///
/// Absence of the manifest is not an error; every field has a CLI-side
/// default. A manifest that exists but does not parse is an error.
pub fn load_manifest(path: &Path) -> Result<PackageManifest> {
    if !path.exists() {
        log::debug!("no manifest at {}", path.display());
        return Ok(PackageManifest::default());
    }

    // Step 1: Read file once
    let raw = std::fs::read_to_string(path).map_err(|e| {
        PackagerError::Cli(CliError::ExecutionFailed {
            command: "read_manifest".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    // Step 2: Parse TOML once
    let toml_value: toml::Value = toml::from_str(&raw)?;

    let Some(package) = toml_value.get("package") else {
        return Err(CliError::InvalidArguments {
            reason: format!("No [package] section in {}", path.display()),
        }
        .into());
    };

    // Step 3: Extract fields from parsed TOML (no additional I/O)
    let name = package
        .get("name")
        .and_then(|v| v.as_str())
        .map(String::from);

    let version = package
        .get("version")
        .and_then(|v| v.as_str())
        .map(|s| {
            semver::Version::parse(s).map_err(|e| CliError::InvalidArguments {
                reason: format!("Invalid version {:?} in {}: {}", s, path.display(), e),
            })
        })
        .transpose()?;

    let entry_point = package
        .get("entry-point")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);

    Ok(PackageManifest {
        name,
        version,
        entry_point,
    })
}
