//! pypack - standalone-executable packager for Python entry points.
//!
//! This binary drives an external bundling tool (PyInstaller by default)
//! to produce a single self-contained Linux executable, relocates it to a
//! stable platform-suffixed path, and prints a release summary.

mod cli;
mod error;
mod metadata;
mod packager;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
