//! Packaging settings and builder.

use std::path::{Path, PathBuf};

use super::error::{Context, Result};

/// Default bundling tool invoked when none is configured.
pub const DEFAULT_BUNDLER: &str = "pyinstaller";

/// Platform suffix appended to the relocated artifact.
///
/// This tool only builds Linux artifacts; other platforms come from the
/// CI pipeline on tag push.
pub const PLATFORM_SUFFIX: &str = "Linux";

/// Scratch directory the bundler uses for intermediate artifacts.
pub const BUILD_DIR: &str = "build";

/// Directory where the bundler conventionally places the final binary.
pub const DIST_DIR: &str = "dist";

/// Main settings for packaging operations.
///
/// Central configuration for the packager, constructed via
/// [`SettingsBuilder`]. Derived accessors give every path the workflow
/// touches, all relative to the working directory.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Output binary name.
    product_name: String,

    /// Python entry point handed to the bundler.
    entry_point: PathBuf,

    /// Bundling tool program name or path.
    bundler_program: String,

    /// Directory the workflow runs in.
    ///
    /// Stale artifacts are removed here and the final binary lands here.
    working_dir: PathBuf,

    /// Release version woven into the tag guidance, when known.
    version: Option<semver::Version>,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the entry point path.
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Returns the bundler program name or path.
    pub fn bundler_program(&self) -> &str {
        &self.bundler_program
    }

    /// Returns the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Returns the release version, when the manifest carries one.
    pub fn version(&self) -> Option<&semver::Version> {
        self.version.as_ref()
    }

    /// Scratch directory the bundler uses for intermediates.
    pub fn build_dir(&self) -> PathBuf {
        self.working_dir.join(BUILD_DIR)
    }

    /// Distribution-output directory of the bundler.
    pub fn dist_dir(&self) -> PathBuf {
        self.working_dir.join(DIST_DIR)
    }

    /// Glob matching packaging descriptors left behind by prior runs.
    pub fn descriptor_glob(&self) -> String {
        self.working_dir
            .join("*.spec")
            .to_string_lossy()
            .into_owned()
    }

    /// Path where the bundler leaves the bundled binary.
    pub fn bundled_binary_path(&self) -> PathBuf {
        self.dist_dir().join(&self.product_name)
    }

    /// Stable public path of the relocated artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.working_dir
            .join(format!("{}-{}", self.product_name, PLATFORM_SUFFIX))
    }
}

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use pypack::packager::SettingsBuilder;
///
/// # fn example() -> pypack::packager::Result<()> {
/// let settings = SettingsBuilder::new()
///     .product_name("hardwareMonitor")
///     .entry_point("main.py")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    product_name: Option<String>,
    entry_point: Option<PathBuf>,
    bundler_program: Option<String>,
    working_dir: Option<PathBuf>,
    version: Option<semver::Version>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the output binary name.
    ///
    /// # Required
    pub fn product_name<S: Into<String>>(mut self, name: S) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the Python entry point.
    ///
    /// # Required
    pub fn entry_point<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.entry_point = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the bundling tool program name or path.
    ///
    /// Default: [`DEFAULT_BUNDLER`]
    pub fn bundler_program<S: Into<String>>(mut self, program: S) -> Self {
        self.bundler_program = Some(program.into());
        self
    }

    /// Sets the working directory.
    ///
    /// Default: current directory
    pub fn working_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.working_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the release version.
    pub fn version(mut self, version: semver::Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `product_name` or `entry_point` is missing, or
    /// if no working directory is set and the current directory cannot be
    /// resolved.
    pub fn build(self) -> Result<Settings> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        Ok(Settings {
            product_name: self.product_name.context("product_name is required")?,
            entry_point: self.entry_point.context("entry_point is required")?,
            bundler_program: self
                .bundler_program
                .unwrap_or_else(|| DEFAULT_BUNDLER.to_string()),
            working_dir,
            version: self.version,
        })
    }
}
