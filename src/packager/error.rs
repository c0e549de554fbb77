//! Error types for the packaging workflow.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the packaging workflow steps.
///
/// The bundler-invocation and missing-artifact cases are distinct so a
/// failed tool run is never reported as a copy problem.
#[derive(Debug, Error)]
pub enum Error {
    /// IO errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// IO errors with operation and path context
    #[error("{context} at {}: {source}", path.display())]
    FsError {
        /// Operation that failed
        context: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The bundling tool is not installed or not executable
    #[error("bundler `{program}` not found on PATH")]
    BundlerMissing {
        /// Configured bundler program
        program: String,
    },

    /// The bundling tool ran and reported failure
    #[error("bundler `{program}` failed: {status}")]
    BundlerFailed {
        /// Configured bundler program
        program: String,
        /// Exit status the tool reported
        status: std::process::ExitStatus,
    },

    /// The bundling tool reported success but left no binary behind
    #[error("bundled binary not found at {}", path.display())]
    ArtifactMissing {
        /// Expected location inside the distribution-output directory
        path: PathBuf,
    },

    /// Generic errors
    #[error("{0}")]
    GenericError(String),
}

/// Return a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::error::Error::GenericError(format!($($arg)*)).into())
    };
}

/// Attach a static message to an absent or failed value.
pub trait Context<T> {
    /// Convert into a workflow result, using `msg` as the error text.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Attach an operation name and path to a filesystem error.
pub trait ErrorExt<T> {
    /// Wrap an IO failure as [`Error::FsError`] with operation context.
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::FsError {
            context,
            path: path.to_path_buf(),
            source,
        })
    }
}
