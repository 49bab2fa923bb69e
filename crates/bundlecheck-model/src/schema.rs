//! JSON (de)serialization of a module set.

use crate::module::Module;
use anyhow::{Context, Result};

/// Serialize a module set to a pretty-printed JSON string.
pub fn to_json(modules: &[Module]) -> Result<String> {
    serde_json::to_string_pretty(modules).context("failed to serialize module set to JSON")
}

/// Deserialize a module set from a JSON string.
pub fn from_json(json: &str) -> Result<Vec<Module>> {
    serde_json::from_str(json).context("failed to deserialize module set from JSON")
}
