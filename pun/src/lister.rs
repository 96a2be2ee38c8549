use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::debug;
use update_notifier_core::InstalledPackage;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("pip not found. Ensure pip is installed and in your PATH")]
    PipNotFound,
    #[error("failed to invoke pip: {0}")]
    Io(#[from] io::Error),
    #[error("pip list exited with status {status}: {stderr}")]
    PipFailed { status: i32, stderr: String },
    #[error("could not parse pip list output: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

/// Enumerates installed packages by invoking `pip list --format=json`.
///
/// Listing is read-only; pip never mutates the environment in list mode.
pub struct PipLister {
    project_path: PathBuf,
}

impl PipLister {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }

    /// Produce one record per installed package, preserving pip's order
    pub fn list_installed(&self) -> Result<Vec<InstalledPackage>, ListingError> {
        let mut command = Command::new("pip");
        command.args(["list", "--format=json"]);
        if self.project_path != Path::new(".") {
            command.arg("--path").arg(&self.project_path);
        }

        debug!(path = %self.project_path.display(), "listing installed packages");

        let output = command.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ListingError::PipNotFound
            } else {
                ListingError::Io(e)
            }
        })?;

        if !output.status.success() {
            return Err(ListingError::PipFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_pip_list(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse the JSON array produced by `pip list --format=json`
pub fn parse_pip_list(output: &str) -> Result<Vec<InstalledPackage>, ListingError> {
    let packages: Vec<InstalledPackage> = serde_json::from_str(output)?;
    debug!(count = packages.len(), "parsed installed packages");
    Ok(packages)
}
