//! Read-only access to the scheme catalog the engine is run against.

mod memory;

pub use memory::InMemorySchemeCatalog;

use serde::{Deserialize, Serialize};

use crate::eligibility::{EligibilityCriteria, RuleSet, Scheme};

/// Storage abstraction so the service can be exercised without a database.
pub trait SchemeCatalog: Send + Sync {
    fn list(&self) -> Result<Vec<Scheme>, CatalogError>;
    fn fetch(&self, scheme_id: &str) -> Result<Option<Scheme>, CatalogError>;
}

/// Error enumeration for catalog failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scheme catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scheme {0} appears more than once in the catalog")]
    DuplicateScheme(String),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Rule set stored apart from its scheme, keyed by scheme id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSetRecord {
    pub scheme_id: String,
    #[serde(flatten)]
    pub rules: RuleSet,
}

/// Attach separately stored rule sets to their schemes. Schemes without a
/// record keep whatever criteria they already carry.
pub fn attach_rule_sets(schemes: Vec<Scheme>, records: &[RuleSetRecord]) -> Vec<Scheme> {
    schemes
        .into_iter()
        .map(|mut scheme| {
            if let Some(record) = records
                .iter()
                .find(|record| record.scheme_id == scheme.scheme_id)
            {
                scheme
                    .eligibility_criteria
                    .get_or_insert_with(EligibilityCriteria::default)
                    .engine_rules = Some(record.rules.clone());
            }
            scheme
        })
        .collect()
}
