//! Packaging workflow orchestration.
//!
//! This module provides the [`Packager`] orchestrator that runs the
//! linear packaging workflow: clean stale artifacts, invoke the bundling
//! tool, relocate the binary, and collect artifact metadata.

mod artifact;
mod bundle;
mod clean;
pub mod error;
pub mod settings;
pub mod summary;

pub use artifact::PackagedArtifact;
pub use error::{Error, Result};
pub use settings::{Settings, SettingsBuilder};

/// Main packaging orchestrator.
///
/// Runs the workflow steps in strict order with no retries and no
/// rollback: each step's success is a precondition for the next, and the
/// first failure aborts the run.
///
/// # Examples
///
/// ```no_run
/// use pypack::packager::{Packager, SettingsBuilder};
///
/// # async fn example() -> pypack::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .product_name("hardwareMonitor")
///     .entry_point("main.py")
///     .build()?;
///
/// let artifact = Packager::new(settings).package().await?;
/// println!("created {} ({} bytes)", artifact.path.display(), artifact.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: Settings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the packager settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Executes the packaging workflow.
    ///
    /// # Steps
    ///
    /// 1. Remove stale `build/`, `dist/`, and `*.spec` leftovers
    /// 2. Invoke the bundling tool against the entry point
    /// 3. Copy `dist/<name>` to `<name>-Linux` and set the executable bit
    /// 4. Collect size and SHA-256 checksum
    ///
    /// # Errors
    ///
    /// Returns the first step failure: a missing or failing bundler, or a
    /// bundler run that left no binary behind.
    pub async fn package(&self) -> Result<PackagedArtifact> {
        clean::remove_stale_artifacts(&self.settings).await?;
        bundle::run_bundler(&self.settings).await?;
        artifact::collect_artifact(&self.settings).await
    }
}
