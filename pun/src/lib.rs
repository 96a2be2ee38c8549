pub mod cli;
pub mod detector;
pub mod lister;
pub mod pypi;
pub mod report;
pub mod security;

// Re-export core types for convenience
pub use update_notifier_core::{
    InstalledPackage, UpdateCandidate, UpdateSeverity, Version, VersionError,
};
