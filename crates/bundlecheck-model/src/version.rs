//! Packaging-format versioning.
//!
//! Every bundle carries the version of the format that produced it; rules
//! use it as a compatibility cutoff when enforcement of a requirement began
//! in a later version than the bundle was built with.

use semver::Version;
use serde::{Deserialize, Serialize};

/// The format version stamped by this toolchain.
const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Comparable version of the packaging format that built a bundle.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FormatVersion(Version);

impl FormatVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Parse a version from its string form.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        Version::parse(input)
            .map(Self)
            .map_err(|source| VersionError {
                input: input.to_string(),
                source,
            })
    }

    /// The version stamped into bundles built by the current toolchain.
    pub fn current() -> Self {
        Self::parse(CURRENT_VERSION).expect("CARGO_PKG_VERSION is valid semver")
    }

    /// Whether this version is strictly older than `other`.
    pub fn is_older_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for FormatVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A version string that is not valid semver.
#[derive(Debug, thiserror::Error)]
#[error("invalid format version '{input}'")]
pub struct VersionError {
    input: String,
    #[source]
    source: semver::Error,
}
