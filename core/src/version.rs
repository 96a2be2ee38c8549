use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version string: {0}")]
    InvalidVersion(String),
}

/// Kind of release qualifier attached to a version.
///
/// Pre-release kinds (dev, alpha, beta, rc) order before the final release
/// with the same release segments; post orders after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualifierKind {
    Dev,
    Alpha,
    Beta,
    ReleaseCandidate,
    Post,
}

/// A parsed release qualifier, e.g. `rc1` or `post2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifier {
    pub kind: QualifierKind,
    pub number: u64,
}

impl Qualifier {
    /// Position relative to the final release (rank 4).
    fn rank(self) -> u8 {
        match self.kind {
            QualifierKind::Dev => 0,
            QualifierKind::Alpha => 1,
            QualifierKind::Beta => 2,
            QualifierKind::ReleaseCandidate => 3,
            QualifierKind::Post => 5,
        }
    }
}

/// A parsed version following PEP-440-like rules: numeric release segments,
/// an optional qualifier and an optional local segment.
///
/// Ordering is structural, never lexical: release segments compare numerically
/// (missing segments count as zero), then the qualifier decides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    /// Numeric release segments, at least one
    pub release: Vec<u64>,
    pub qualifier: Option<Qualifier>,
    /// Local version segment (after `+`), ignored for ordering
    pub local: Option<String>,
    /// Original string representation
    pub original: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            release: vec![major, minor, patch],
            qualifier: None,
            local: None,
            original: format!("{major}.{minor}.{patch}"),
        }
    }

    pub fn major(&self) -> u64 {
        self.segment(0)
    }

    pub fn minor(&self) -> u64 {
        self.segment(1)
    }

    pub fn patch(&self) -> u64 {
        self.segment(2)
    }

    fn segment(&self, idx: usize) -> u64 {
        self.release.get(idx).copied().unwrap_or(0)
    }

    /// Check if this is a pre-release version (dev, alpha, beta or rc)
    pub fn is_prerelease(&self) -> bool {
        self.qualifier
            .is_some_and(|q| !matches!(q.kind, QualifierKind::Post))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let original = s.trim();
        if original.is_empty() {
            return Err(VersionError::InvalidVersion(s.to_string()));
        }

        let lowered = original.to_ascii_lowercase();
        let lowered = lowered.strip_prefix('v').unwrap_or(&lowered);

        // Split off the local segment (+) first, it never affects ordering
        let (version_part, local) = match lowered.split_once('+') {
            Some((v, l)) if !l.is_empty() => (v, Some(l.to_string())),
            Some((v, _)) => (v, None),
            None => (lowered, None),
        };

        // The release part runs up to the first character that is neither a
        // digit nor a dot; everything after is the qualifier
        let boundary = version_part.find(|c: char| !c.is_ascii_digit() && c != '.');
        let (release_part, qualifier_part) = match boundary {
            Some(idx) => (&version_part[..idx], Some(&version_part[idx..])),
            None => (version_part, None),
        };

        let release = parse_release(release_part.trim_end_matches('.'), original)?;
        let qualifier = match qualifier_part {
            Some(q) => Some(parse_qualifier(q, original)?),
            None => None,
        };

        Ok(Version {
            release,
            qualifier,
            local,
            original: original.to_string(),
        })
    }
}

fn parse_release(s: &str, original: &str) -> Result<Vec<u64>, VersionError> {
    if s.is_empty() {
        return Err(VersionError::InvalidVersion(original.to_string()));
    }

    s.split('.')
        .map(|segment| {
            segment
                .parse()
                .map_err(|_| VersionError::InvalidVersion(original.to_string()))
        })
        .collect()
}

fn parse_qualifier(s: &str, original: &str) -> Result<Qualifier, VersionError> {
    let s = s.trim_start_matches(['.', '-', '_']);

    let word_end = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    let word = &s[..word_end];
    let digits = s[word_end..].trim_start_matches(['.', '-', '_']);

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(VersionError::InvalidVersion(original.to_string()));
    }

    let number = if digits.is_empty() {
        0
    } else {
        digits
            .parse()
            .map_err(|_| VersionError::InvalidVersion(original.to_string()))?
    };

    let kind = match word {
        "dev" => QualifierKind::Dev,
        "a" | "alpha" => QualifierKind::Alpha,
        "b" | "beta" => QualifierKind::Beta,
        "c" | "rc" | "pre" | "preview" => QualifierKind::ReleaseCandidate,
        // PEP 440 treats a bare trailing number ("1.0-1") as a post release
        "post" | "rev" | "r" | "" => QualifierKind::Post,
        _ => return Err(VersionError::InvalidVersion(original.to_string())),
    };

    Ok(Qualifier { kind, number })
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Segment-wise numeric comparison, padding the shorter release with
        // zeros so "1.2" == "1.2.0"
        let segments = self.release.len().max(other.release.len());
        for idx in 0..segments {
            match self.segment(idx).cmp(&other.segment(idx)) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        let self_rank = self.qualifier.map_or(4, Qualifier::rank);
        let other_rank = other.qualifier.map_or(4, Qualifier::rank);
        match self_rank.cmp(&other_rank) {
            Ordering::Equal => {}
            ord => return ord,
        }

        match (&self.qualifier, &other.qualifier) {
            (Some(a), Some(b)) => a.number.cmp(&b.number),
            _ => Ordering::Equal,
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
