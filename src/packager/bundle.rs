//! External bundler invocation and tool detection.

use std::path::PathBuf;

use super::error::{Error, Result};
use super::settings::Settings;

/// Resolve the bundling tool and log its version.
///
/// An unresolvable program is fatal; a failing version probe is only
/// logged, since the bundle step itself decides success.
fn detect_bundler(program: &str) -> Result<PathBuf> {
    let path = match which::which(program) {
        Ok(path) => path,
        Err(e) => {
            log::debug!("bundler `{}` not found: {}", program, e);
            return Err(Error::BundlerMissing {
                program: program.to_string(),
            });
        }
    };

    log::debug!("found bundler at: {}", path.display());

    match std::process::Command::new(&path).arg("--version").output() {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            log::info!("✓ bundler available: {} {}", program, version.trim());
        }
        Ok(output) => {
            log::warn!(
                "bundler found at {} but --version check failed (exit code: {:?})",
                path.display(),
                output.status.code()
            );
        }
        Err(e) => {
            log::warn!(
                "bundler found at {} but failed to execute: {}",
                path.display(),
                e
            );
        }
    }

    Ok(path)
}

/// Invoke the bundling tool against the configured entry point.
///
/// Instructs the tool to produce a single self-contained executable named
/// after the product, which it places inside the distribution-output
/// directory. A non-zero exit status fails the run; there are no retries.
pub async fn run_bundler(settings: &Settings) -> Result<()> {
    let program = settings.bundler_program();
    let bundler = detect_bundler(program)?;

    log::info!(
        "bundling {} from {}",
        settings.product_name(),
        settings.entry_point().display()
    );

    let status = tokio::process::Command::new(&bundler)
        .arg("--onefile")
        .args(["--name", settings.product_name()])
        .arg(settings.entry_point())
        .current_dir(settings.working_dir())
        .status()
        .await
        .map_err(|e| Error::GenericError(format!("failed to execute {}: {}", program, e)))?;

    if !status.success() {
        return Err(Error::BundlerFailed {
            program: program.to_string(),
            status,
        });
    }

    Ok(())
}
