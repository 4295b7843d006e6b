//! Eligibility rule engine.
//!
//! Evaluation flows one way: batch -> scheme -> rule -> field resolver. No
//! step performs I/O or keeps state between calls, and none of them fail:
//! unknown operators, unresolved fields and type mismatches all evaluate to
//! a non-match, and a scheme without rules is reported as not evaluable.

mod batch;
mod explain;
mod profile;
mod rules;
mod scheme;

#[cfg(test)]
mod tests;

pub use batch::{BatchResult, EligibleSchemeBrief};
pub use explain::ExplanationContext;
pub use profile::{FieldPath, Profile, ProfileCategory};
pub use rules::{Rule, RuleOperator};
pub use scheme::{EligibilityCriteria, RuleSet, Scheme, SchemeEvaluation};

/// Stateless evaluator applying scheme rule sets to citizen profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every candidate scheme and split the results by eligibility,
    /// keeping the caller's order within each partition.
    pub fn evaluate(&self, profile: &Profile, schemes: &[Scheme]) -> BatchResult {
        batch::evaluate_all(profile, schemes)
    }

    pub fn evaluate_scheme(&self, profile: &Profile, scheme: &Scheme) -> SchemeEvaluation {
        scheme::evaluate_scheme(profile, scheme)
    }
}
