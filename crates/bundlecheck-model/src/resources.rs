//! Typed resource identifiers and per-module resource tables.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Resource type holding the human-readable strings of a bundle.
pub const STRING_TYPE: &str = "string";

/// Opaque identifier of one resource in a resource table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Mapping from resource-type name to the identifiers defined for that type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable {
    types: BTreeMap<String, BTreeSet<ResourceId>>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identifier under the given resource type.
    pub fn insert(&mut self, type_name: impl Into<String>, id: ResourceId) {
        self.types.entry(type_name.into()).or_default().insert(id);
    }

    /// Identifiers defined for the given type. Unknown types yield the
    /// empty set.
    pub fn ids_of_type(&self, type_name: &str) -> BTreeSet<ResourceId> {
        self.types.get(type_name).cloned().unwrap_or_default()
    }

    pub fn contains(&self, type_name: &str, id: ResourceId) -> bool {
        self.types
            .get(type_name)
            .is_some_and(|ids| ids.contains(&id))
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
