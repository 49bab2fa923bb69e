//! Title enforcement for dynamic modules.
//!
//! Every on-demand module must carry a human-readable title, declared as a
//! reference into the base module's string resources. Bundles stamped with a
//! format version older than the enforcement cutoff predate this requirement
//! and pass unconditionally.

use bundlecheck_model::module::Module;
use bundlecheck_model::resources::STRING_TYPE;
use bundlecheck_model::version::FormatVersion;

use crate::error::RuleViolation;
use crate::rule::BundleRule;

/// Validates that every dynamic module's title resolves to a string
/// resource defined in the base module.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleTitleRule;

/// Bundles built before this format version are exempt from title checks.
fn enforcement_cutoff() -> FormatVersion {
    FormatVersion::new(0, 4, 3)
}

impl BundleRule for ModuleTitleRule {
    fn validate(&self, modules: &[Module]) -> Result<(), RuleViolation> {
        let base = find_base(modules).ok_or(RuleViolation::MissingBaseModule)?;

        // Bundles declaring a pre-cutoff version predate title enforcement.
        // A base module without a config counts as built by the current
        // toolchain, so enforcement applies.
        if let Some(config) = &base.config {
            if config.version.is_older_than(&enforcement_cutoff()) {
                return Ok(());
            }
        }

        let string_ids = base.resource_ids_of_type(STRING_TYPE);

        for module in modules {
            if !module.is_dynamic() {
                continue;
            }
            let Some(title_ref) = module.title_ref() else {
                return Err(RuleViolation::MissingTitle {
                    module: module.name.clone(),
                });
            };
            if !string_ids.contains(&title_ref) {
                return Err(RuleViolation::UnresolvedTitle {
                    module: module.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// First base module in input order, if any.
///
/// A well-formed bundle has exactly one; with duplicates the first wins,
/// deterministically, and cardinality is left to the module-set rules.
fn find_base(modules: &[Module]) -> Option<&Module> {
    modules.iter().find(|m| m.is_base())
}
