use crate::version::Version;
use serde::Deserialize;

/// A package installed in the target environment, as reported by the package
/// manager. The version is kept as the raw reported string; parsing happens
/// at comparison time so one malformed entry never poisons the whole listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
}

/// Severity of an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSeverity {
    Major,
    Minor,
    Patch,
}

/// A package whose latest published version strictly exceeds the installed
/// one. Exists only within a single run's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCandidate {
    pub name: String,
    pub installed: Version,
    pub latest: Version,
}

impl UpdateCandidate {
    /// Classify the jump from installed to latest, for output coloring
    pub fn severity(&self) -> UpdateSeverity {
        if self.latest.major() > self.installed.major() {
            UpdateSeverity::Major
        } else if self.latest.minor() > self.installed.minor() {
            UpdateSeverity::Minor
        } else {
            UpdateSeverity::Patch
        }
    }
}
