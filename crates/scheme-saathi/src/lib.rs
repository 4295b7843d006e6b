//! Welfare-scheme eligibility matching.
//!
//! The [`eligibility`] module holds the rule engine itself. Everything else in
//! the crate (catalog, service facade, HTTP router, config, telemetry) is the
//! plumbing a deployment needs around it.

pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod router;
pub mod service;
pub mod telemetry;

pub use catalog::{attach_rule_sets, InMemorySchemeCatalog, RuleSetRecord, SchemeCatalog};
pub use eligibility::{
    BatchResult, EligibilityEngine, Profile, Rule, RuleOperator, RuleSet, Scheme,
    SchemeEvaluation,
};
pub use router::eligibility_router;
pub use service::{EligibilityService, EligibilityServiceError};
