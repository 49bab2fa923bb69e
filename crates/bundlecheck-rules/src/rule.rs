//! The rule seam consumed by the validation pipeline.

use bundlecheck_model::module::Module;

use crate::error::RuleViolation;

/// One validation rule over the full module set of a bundle.
///
/// Implementations are pure: no mutation, no I/O, no logging. A rule reports
/// at most one violation per run, the first it finds in input order, and the
/// caller decides whether that halts the wider pipeline or moves on to the
/// next rule.
pub trait BundleRule {
    /// Check the module set, failing fast on the first violation.
    fn validate(&self, modules: &[Module]) -> Result<(), RuleViolation>;
}
