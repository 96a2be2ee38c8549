pub mod types;
pub mod version;

// Re-export commonly used types at crate root
pub use types::{InstalledPackage, UpdateCandidate, UpdateSeverity};
pub use version::{Qualifier, QualifierKind, Version, VersionError};
