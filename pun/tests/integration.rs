use assert_cmd::Command;
use predicates::prelude::*;

/// Test that --help flag works
#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("pun").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Notify about outdated packages in a Python environment",
        ))
        .stdout(predicate::str::contains("--requirements"))
        .stdout(predicate::str::contains("--project-path"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--check-security"));
}

/// Test that -h short flag works
#[test]
fn test_help_short_flag() {
    let mut cmd = Command::cargo_bin("pun").unwrap();
    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Notify about outdated packages in a Python environment",
        ));
}

/// Test that --version flag works
#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("pun").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pip-update-notifier"));
}

/// Test that -V short version flag works
#[test]
fn test_version_short_flag() {
    let mut cmd = Command::cargo_bin("pun").unwrap();
    cmd.arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("pip-update-notifier"));
}

/// Unknown flags are rejected
#[test]
fn test_unknown_flag_rejected() {
    let mut cmd = Command::cargo_bin("pun").unwrap();
    cmd.arg("--definitely-not-a-flag").assert().failure();
}

#[cfg(unix)]
mod pipeline {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Put a stub executable on a private PATH entry
    fn stub_tool(dir: &TempDir, name: &str, script: &str) {
        let path = dir.path().join(name);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn path_with(dir: &TempDir) -> String {
        let system_path = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", dir.path().display(), system_path)
    }

    /// An empty environment reports up to date without touching the network
    #[test]
    fn test_empty_environment_is_up_to_date() {
        let tools = TempDir::new().unwrap();
        stub_tool(&tools, "pip", "#!/bin/sh\necho '[]'\n");

        let mut cmd = Command::cargo_bin("pun").unwrap();
        cmd.env("PATH", path_with(&tools))
            .assert()
            .success()
            .stdout(predicate::str::contains("All dependencies are up to date."));
    }

    /// A failing pip aborts the update phase and yields a nonzero exit
    #[test]
    fn test_listing_failure_exits_nonzero() {
        let tools = TempDir::new().unwrap();
        stub_tool(&tools, "pip", "#!/bin/sh\necho 'boom' >&2\nexit 1\n");

        let mut cmd = Command::cargo_bin("pun").unwrap();
        cmd.env("PATH", path_with(&tools))
            .assert()
            .failure()
            .stdout(predicate::str::contains("->").not());
    }

    /// The security phase still runs when listing has already failed
    #[test]
    fn test_security_phase_runs_after_listing_failure() {
        let tools = TempDir::new().unwrap();
        stub_tool(&tools, "pip", "#!/bin/sh\nexit 1\n");
        stub_tool(&tools, "safety", "#!/bin/sh\nexit 0\n");

        let mut cmd = Command::cargo_bin("pun").unwrap();
        cmd.env("PATH", path_with(&tools))
            .arg("--check-security")
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "No known security vulnerabilities found",
            ));
    }

    /// A vulnerable scan relays the scanner's report into the log stream
    #[test]
    fn test_security_findings_are_relayed() {
        let tools = TempDir::new().unwrap();
        stub_tool(&tools, "pip", "#!/bin/sh\necho '[]'\n");
        stub_tool(
            &tools,
            "safety",
            "#!/bin/sh\necho 'insecure package found: demo==1.0.0'\nexit 1\n",
        );

        let mut cmd = Command::cargo_bin("pun").unwrap();
        cmd.env("PATH", path_with(&tools))
            .arg("--check-security")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "insecure package found: demo==1.0.0",
            ));
    }
}
