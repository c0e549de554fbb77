//! Size formatting and release guidance for the completion summary.

/// Format a byte count in human-readable units.
///
/// Whole bytes below 1 KiB, one decimal place above.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Commands for the operator to commit, tag, and push the release.
///
/// Pushing the annotated tag triggers the CI pipeline that builds the
/// non-Linux artifacts. Without a manifest version the tag is a
/// placeholder for the operator to fill in.
pub fn release_guidance(version: Option<&semver::Version>) -> Vec<String> {
    let tag = match version {
        Some(version) => format!("v{version}"),
        None => "vX.Y.Z".to_string(),
    };

    vec![
        "git add -A".to_string(),
        format!("git commit -m \"release {tag}\""),
        format!("git tag -a {tag} -m \"release {tag}\""),
        "git push origin main --tags".to_string(),
    ]
}
