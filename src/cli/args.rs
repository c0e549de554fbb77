//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling.

use clap::Parser;
use std::path::PathBuf;

use crate::packager::settings::DEFAULT_BUNDLER;

/// Default entry point when neither the CLI nor the manifest names one.
pub const DEFAULT_ENTRY_POINT: &str = "main.py";

/// Standalone-executable packager for Python entry points
#[derive(Parser, Debug)]
#[command(
    name = "pypack",
    version,
    about = "Standalone-executable packager for Python entry points",
    long_about = "Produces a single self-contained Linux executable from a Python entry point.

Removes stale build artifacts, invokes the bundling tool, relocates the
binary to <name>-Linux in the working directory, marks it executable, and
prints a release summary.

Usage:
  pypack
  pypack --entry-point main.py --name hardwareMonitor
  pypack --bundler /opt/python/bin/pyinstaller

Exit code 0 = artifact guaranteed to exist at <name>-Linux."
)]
pub struct Args {
    /// Python entry point to bundle (default: manifest entry-point, then main.py)
    #[arg(short = 'e', long, value_name = "PATH")]
    pub entry_point: Option<PathBuf>,

    /// Output binary name (default: manifest name, then the entry-point stem)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Bundling tool to invoke
    #[arg(
        short = 'b',
        long,
        value_name = "PROGRAM",
        env = "PYPACK_BUNDLER",
        default_value = DEFAULT_BUNDLER
    )]
    pub bundler: String,

    /// Release manifest path
    #[arg(short = 'm', long, value_name = "PATH", default_value = "packager.toml")]
    pub manifest: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.bundler.trim().is_empty() {
            return Err("Bundler program cannot be empty".to_string());
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Output name cannot be empty".to_string());
            }
            if name.contains(std::path::MAIN_SEPARATOR) {
                return Err(format!("Output name must be a bare file name: {}", name));
            }
        }

        if let Some(entry) = &self.entry_point {
            if entry.extension().and_then(|e| e.to_str()) != Some("py") {
                return Err(format!(
                    "Entry point must be a .py file: {}",
                    entry.display()
                ));
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(_args: &Args) -> Self {
        let output = super::OutputManager::new(
            true,  // Always verbose
            false, // Never quiet
        );

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
