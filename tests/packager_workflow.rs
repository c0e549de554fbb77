//! End-to-end tests driving the pypack binary against a fake bundler.
//!
//! The fake bundler is a shell script honoring the real invocation
//! contract: `--onefile --name <name> <entry>` drops a binary at
//! `dist/<name>` in the working directory.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_fake_bundler(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-bundler");
    let script = format!(
        "#!/bin/sh\nif [ \"$1\" = --version ]; then echo 6.0.0; exit 0; fi\n{body}\n"
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn workspace_with_entry_point() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();
    dir
}

fn pypack_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pypack").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn packages_an_artifact_end_to_end() {
    let dir = workspace_with_entry_point();
    // $3 is the --name value
    let bundler = write_fake_bundler(
        dir.path(),
        "mkdir -p dist\nprintf 'fake binary payload' > \"dist/$3\"",
    );

    pypack_in(&dir)
        .args(["--name", "hardwareMonitor", "--bundler"])
        .arg(&bundler)
        .assert()
        .success()
        .stdout(predicate::str::contains("hardwareMonitor-Linux"))
        .stdout(predicate::str::contains("19 B"))
        .stdout(predicate::str::contains("git push origin main --tags"));

    let artifact = dir.path().join("hardwareMonitor-Linux");
    assert!(artifact.is_file());
    let mode = fs::metadata(&artifact).unwrap().permissions().mode();
    assert_ne!(mode & 0o111, 0);
}

#[test]
fn prior_run_leftovers_are_removed() {
    let dir = workspace_with_entry_point();
    let bundler = write_fake_bundler(dir.path(), "mkdir -p dist\nprintf bin > \"dist/$3\"");
    fs::create_dir_all(dir.path().join("build/deep")).unwrap();
    fs::write(dir.path().join("old.spec"), "stale").unwrap();

    pypack_in(&dir)
        .args(["--name", "app", "--bundler"])
        .arg(&bundler)
        .assert()
        .success();

    assert!(!dir.path().join("build").exists());
    assert!(!dir.path().join("old.spec").exists());
    assert!(dir.path().join("app-Linux").is_file());
}

#[test]
fn reruns_overwrite_the_artifact() {
    let dir = workspace_with_entry_point();
    let bundler = write_fake_bundler(dir.path(), "mkdir -p dist\nprintf bin > \"dist/$3\"");

    for _ in 0..2 {
        pypack_in(&dir)
            .args(["--name", "app", "--bundler"])
            .arg(&bundler)
            .assert()
            .success();
    }

    assert!(dir.path().join("app-Linux").is_file());
}

#[test]
fn failing_bundler_fails_the_run() {
    let dir = workspace_with_entry_point();
    let bundler = write_fake_bundler(dir.path(), "exit 7");

    pypack_in(&dir)
        .args(["--name", "app", "--bundler"])
        .arg(&bundler)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Next steps").not())
        .stderr(predicate::str::contains("bundler"))
        .stderr(predicate::str::contains("failed"));

    assert!(!dir.path().join("app-Linux").exists());
}

#[test]
fn bundler_without_output_is_reported() {
    let dir = workspace_with_entry_point();
    let bundler = write_fake_bundler(dir.path(), "exit 0");

    pypack_in(&dir)
        .args(["--name", "app", "--bundler"])
        .arg(&bundler)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bundled binary not found"));
}

#[test]
fn manifest_supplies_name_and_version() {
    let dir = workspace_with_entry_point();
    fs::write(
        dir.path().join("packager.toml"),
        "[package]\nname = \"hardware-monitor\"\nversion = \"1.4.2\"\nentry-point = \"main.py\"\n",
    )
    .unwrap();
    let bundler = write_fake_bundler(dir.path(), "mkdir -p dist\nprintf bin > \"dist/$3\"");

    pypack_in(&dir)
        .arg("--bundler")
        .arg(&bundler)
        .assert()
        .success()
        .stdout(predicate::str::contains("hardware-monitor-Linux"))
        .stdout(predicate::str::contains("git tag -a v1.4.2"));

    assert!(dir.path().join("hardware-monitor-Linux").is_file());
}

#[test]
fn missing_entry_point_is_rejected() {
    let dir = TempDir::new().unwrap();

    pypack_in(&dir)
        .args(["--name", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry point not found"));
}

#[test]
fn non_python_entry_point_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.txt"), "hi").unwrap();

    pypack_in(&dir)
        .args(["--entry-point", "main.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".py"));
}

#[test]
fn missing_bundler_is_rejected() {
    let dir = workspace_with_entry_point();

    pypack_in(&dir)
        .args(["--name", "app", "--bundler", "no-such-bundler-9f2c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found on PATH"));
}
