//! Standalone-executable packager for Python entry points.
//!
//! Orchestrates a linear packaging workflow: remove stale build artifacts,
//! invoke an external bundling tool against a Python entry point, relocate
//! the produced binary to a stable platform-suffixed path, mark it
//! executable, and report its size and checksum.
//!
//! Only Linux artifacts are built here; Windows and macOS artifacts come
//! from the CI pipeline triggered on tag pushes.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod packager;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
