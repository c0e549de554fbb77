//! Artifact relocation, permissions, and checksum metadata.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

use super::error::{Error, ErrorExt, Result};
use super::settings::Settings;
use crate::bail;

/// A packaged artifact with its on-disk metadata.
#[derive(Debug, Clone)]
pub struct PackagedArtifact {
    /// Final artifact path (platform-suffixed, in the working directory).
    pub path: PathBuf,

    /// Artifact size in bytes.
    pub size: u64,

    /// Hex-encoded SHA-256 of the artifact.
    pub checksum: String,
}

/// Relocate the bundled binary to its stable public path and collect
/// metadata.
///
/// Copies the binary out of the distribution-output directory to
/// `<name>-Linux`, sets the executable bit, and records size and
/// checksum. A missing bundled binary is a distinct failure from a failed
/// bundler invocation.
pub async fn collect_artifact(settings: &Settings) -> Result<PackagedArtifact> {
    let bundled = settings.bundled_binary_path();
    if !bundled.is_file() {
        return Err(Error::ArtifactMissing { path: bundled });
    }

    let destination = settings.artifact_path();
    copy_file(&bundled, &destination).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(&destination, std::fs::Permissions::from_mode(0o755))
            .await
            .fs_context("setting executable permissions", &destination)?;
    }

    let metadata = tokio::fs::metadata(&destination)
        .await
        .fs_context("reading artifact metadata", &destination)?;

    let checksum = calculate_sha256(&destination).await?;

    log::info!("✓ created artifact: {}", destination.display());

    Ok(PackagedArtifact {
        path: destination,
        size: metadata.len(),
        checksum,
    })
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        bail!("{from:?} does not exist");
    }
    if !from.is_file() {
        bail!("{from:?} is not a file");
    }
    if let Some(dest_dir) = to.parent() {
        tokio::fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    tokio::fs::copy(from, to)
        .await
        .fs_context("copying artifact", to)?;
    Ok(())
}

/// Calculates SHA256 checksum of a single file.
///
/// Reads the file in 8KB chunks to handle large files efficiently.
pub async fn calculate_sha256(file_path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
