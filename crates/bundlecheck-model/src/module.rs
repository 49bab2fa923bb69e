//! Module identity and composition of a bundle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::BundleConfig;
use crate::manifest::ModuleManifest;
use crate::resources::{ResourceId, ResourceTable};

/// Unique name of a module within a bundle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delivery role of a module within the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleRole {
    /// The mandatory, always-installed unit; supplies shared resources to
    /// the rest of the bundle.
    Base,
    /// Installed on demand; must declare a display title.
    Dynamic,
    /// Any other delivery mode (install-time feature, asset pack).
    Other,
}

/// One unit of the package, as parsed out of a bundle archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub name: ModuleName,
    pub role: ModuleRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ModuleManifest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_table: Option<ResourceTable>,
    /// Package-level build config; carried by the base module only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BundleConfig>,
}

impl Module {
    /// Create a bare module with the given name and role.
    pub fn new(name: impl Into<String>, role: ModuleRole) -> Self {
        Self {
            name: ModuleName::new(name),
            role,
            manifest: None,
            resource_table: None,
            config: None,
        }
    }

    pub fn is_base(&self) -> bool {
        self.role == ModuleRole::Base
    }

    pub fn is_dynamic(&self) -> bool {
        self.role == ModuleRole::Dynamic
    }

    /// The manifest's title reference, if the manifest declares one.
    pub fn title_ref(&self) -> Option<ResourceId> {
        self.manifest.as_ref().and_then(|m| m.title_ref)
    }

    /// Identifiers of the given resource type defined by this module.
    ///
    /// A module with no resource table yields the empty set.
    pub fn resource_ids_of_type(&self, type_name: &str) -> BTreeSet<ResourceId> {
        self.resource_table
            .as_ref()
            .map(|table| table.ids_of_type(type_name))
            .unwrap_or_default()
    }
}
