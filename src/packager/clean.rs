//! Stale artifact removal.
//!
//! Clears the bundler's scratch and distribution directories and any
//! packaging descriptors left behind by a previous run. Removal is
//! idempotent; absence of any of these is not an error.

use std::io;
use std::path::Path;

use super::error::{Context, Result};
use super::settings::Settings;

/// Remove stale build output, distribution output, and descriptor files.
pub async fn remove_stale_artifacts(settings: &Settings) -> Result<()> {
    remove_dir_all_if_exists(&settings.build_dir()).await?;
    remove_dir_all_if_exists(&settings.dist_dir()).await?;

    let pattern = settings.descriptor_glob();
    for entry in glob::glob(&pattern).context("invalid descriptor pattern")? {
        let path = entry.context("reading descriptor glob entry")?;
        remove_file_if_exists(&path).await?;
    }

    Ok(())
}

/// Removes the directory and its contents if it exists.
async fn remove_dir_all_if_exists(path: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => {
            log::debug!("removed stale directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

/// Removes the file if it exists.
async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            log::debug!("removed stale descriptor {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::settings::SettingsBuilder;

    fn settings_in(dir: &Path) -> Settings {
        SettingsBuilder::new()
            .product_name("app")
            .entry_point("main.py")
            .working_dir(dir)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn removes_prior_run_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        std::fs::create_dir_all(dir.path().join("build/scratch")).unwrap();
        std::fs::create_dir(dir.path().join("dist")).unwrap();
        std::fs::write(dir.path().join("dist/app"), b"old").unwrap();
        std::fs::write(dir.path().join("app.spec"), b"stale").unwrap();
        std::fs::write(dir.path().join("renamed.spec"), b"stale").unwrap();

        remove_stale_artifacts(&settings).await.unwrap();

        assert!(!dir.path().join("build").exists());
        assert!(!dir.path().join("dist").exists());
        assert!(!dir.path().join("app.spec").exists());
        assert!(!dir.path().join("renamed.spec").exists());
    }

    #[tokio::test]
    async fn clean_workspace_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());

        remove_stale_artifacts(&settings).await.unwrap();
        remove_stale_artifacts(&settings).await.unwrap();
    }

    #[tokio::test]
    async fn unrelated_files_survive() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        std::fs::write(dir.path().join("main.py"), b"print()").unwrap();

        remove_stale_artifacts(&settings).await.unwrap();

        assert!(dir.path().join("main.py").exists());
    }
}
