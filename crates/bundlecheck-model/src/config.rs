//! Package-level build configuration carried by the base module.

use serde::{Deserialize, Serialize};

use crate::version::FormatVersion;

/// Build configuration stamped into a bundle by the packaging toolchain.
///
/// Loading this from a bundle archive is the archive reader's job; rules
/// only read the already-parsed record off the base module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Version of the packaging format that produced the bundle.
    pub version: FormatVersion,
}

impl BundleConfig {
    pub fn new(version: FormatVersion) -> Self {
        Self { version }
    }
}
