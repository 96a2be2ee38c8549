use std::fmt;
use std::str::FromStr;
use update_notifier_core::{InstalledPackage, UpdateCandidate, Version};

/// Why a package was left out of the update report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Installed version string did not parse under the version grammar
    InvalidInstalledVersion(String),
    /// Latest-version lookup was indeterminate
    LatestUnknown,
}

/// A package that could not be compared. Local to that package, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPackage {
    pub name: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::InvalidInstalledVersion(version) => {
                write!(f, "{}: invalid installed version '{version}'", self.name)
            }
            SkipReason::LatestUnknown => {
                write!(f, "{}: latest version could not be determined", self.name)
            }
        }
    }
}

/// Outcome of one detection pass
#[derive(Debug, Clone, Default)]
pub struct DetectionReport {
    pub candidates: Vec<UpdateCandidate>,
    pub skipped: Vec<SkippedPackage>,
}

/// Compare each installed package against its resolved latest version.
///
/// A candidate is produced only when `installed < latest` under structured
/// version ordering. Input order is preserved. Packages that cannot be
/// compared end up in `skipped`, one entry each, never in `candidates`.
pub fn detect_updates(entries: &[(InstalledPackage, Option<Version>)]) -> DetectionReport {
    let mut report = DetectionReport::default();

    for (package, latest) in entries {
        let Some(latest) = latest else {
            report.skipped.push(SkippedPackage {
                name: package.name.clone(),
                reason: SkipReason::LatestUnknown,
            });
            continue;
        };

        let installed = match Version::from_str(&package.version) {
            Ok(version) => version,
            Err(_) => {
                report.skipped.push(SkippedPackage {
                    name: package.name.clone(),
                    reason: SkipReason::InvalidInstalledVersion(package.version.clone()),
                });
                continue;
            }
        };

        if installed < *latest {
            report.candidates.push(UpdateCandidate {
                name: package.name.clone(),
                installed,
                latest: latest.clone(),
            });
        }
    }

    report
}
