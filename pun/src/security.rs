use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("safety not found. Install it with: pip install safety")]
    ScannerNotFound,
    #[error("failed to invoke safety: {0}")]
    Io(#[from] io::Error),
    #[error("safety check failed with status {status}: {stderr}")]
    ScannerFailed { status: i32, stderr: String },
}

/// Verdict of a vulnerability scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanVerdict {
    Clean,
    /// Raw report text from the scanner, relayed unmodified
    VulnerabilitiesFound(String),
}

/// Runs the `safety` vulnerability scanner against a project.
///
/// Exit code contract: 0 = clean, 1 = vulnerabilities found (report on
/// stdout), anything else = scanner failure (details on stderr).
pub struct SafetyScanner {
    project_path: PathBuf,
}

impl SafetyScanner {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }

    pub fn scan(&self) -> Result<ScanVerdict, ScanError> {
        let mut command = Command::new("safety");
        command.args(["check", "--full-report"]);
        if self.project_path != Path::new(".") {
            command.arg("--project").arg(&self.project_path);
        }

        debug!(path = %self.project_path.display(), "running safety check");

        let output = command.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ScanError::ScannerNotFound
            } else {
                ScanError::Io(e)
            }
        })?;

        interpret_output(
            output.status.code(),
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
        )
    }
}

fn interpret_output(
    code: Option<i32>,
    stdout: &str,
    stderr: &str,
) -> Result<ScanVerdict, ScanError> {
    match code {
        Some(0) => Ok(ScanVerdict::Clean),
        Some(1) => Ok(ScanVerdict::VulnerabilitiesFound(stdout.to_string())),
        other => Err(ScanError::ScannerFailed {
            status: other.unwrap_or(-1),
            stderr: stderr.trim().to_string(),
        }),
    }
}
