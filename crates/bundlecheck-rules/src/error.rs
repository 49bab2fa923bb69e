//! Typed violations reported by bundle rules.

use bundlecheck_model::module::ModuleName;

/// A bundle authoring defect found by a rule.
///
/// Violations are terminal for the offending bundle: they are reported to
/// the caller, never retried or recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    /// A dynamic module declares no title reference in its manifest.
    #[error("mandatory title is missing in manifest for dynamic module '{module}'")]
    MissingTitle { module: ModuleName },

    /// A dynamic module's title reference resolves to no string resource in
    /// the base module's table.
    #[error("title for dynamic module '{module}' is missing in the base resource table")]
    UnresolvedTitle { module: ModuleName },

    /// The module set contains no base module.
    #[error("bundle contains no base module")]
    MissingBaseModule,
}
