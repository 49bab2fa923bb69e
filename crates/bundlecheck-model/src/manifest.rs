//! Manifest view of a module.
//!
//! Only the fields validation rules consume are modeled here; parsing the
//! binary manifest format is the archive reader's job.

use serde::{Deserialize, Serialize};

use crate::resources::ResourceId;

/// Structured metadata declared by a module's manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleManifest {
    /// Reference into the base module's string resources naming this module
    /// for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ref: Option<ResourceId>,
}

impl ModuleManifest {
    /// A manifest declaring the given title reference.
    pub fn with_title_ref(title_ref: ResourceId) -> Self {
        Self {
            title_ref: Some(title_ref),
        }
    }
}
