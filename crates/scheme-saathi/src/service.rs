use std::sync::Arc;

use tracing::info;

use crate::catalog::{CatalogError, SchemeCatalog};
use crate::eligibility::{BatchResult, EligibilityEngine, Profile, Scheme, SchemeEvaluation};

/// Service composing the scheme catalog and the eligibility engine.
pub struct EligibilityService<C> {
    catalog: Arc<C>,
    engine: EligibilityEngine,
}

impl<C> EligibilityService<C>
where
    C: SchemeCatalog + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            engine: EligibilityEngine::new(),
        }
    }

    /// Check one catalog scheme for a profile.
    pub fn check(
        &self,
        profile: &Profile,
        scheme_id: &str,
    ) -> Result<SchemeEvaluation, EligibilityServiceError> {
        let scheme = self
            .catalog
            .fetch(scheme_id)?
            .ok_or_else(|| EligibilityServiceError::SchemeNotFound(scheme_id.to_string()))?;

        let evaluation = self.engine.evaluate_scheme(profile, &scheme);
        info!(
            citizen_id = profile.citizen_id().unwrap_or("unknown"),
            scheme_id,
            eligible = evaluation.is_eligible,
            score = evaluation.score,
            "eligibility check completed"
        );
        Ok(evaluation)
    }

    /// Check a profile against every scheme in the catalog.
    pub fn check_batch(&self, profile: &Profile) -> Result<BatchResult, EligibilityServiceError> {
        let schemes = self.catalog.list()?;
        Ok(self.check_candidates(profile, &schemes))
    }

    /// Check a profile against a caller-supplied scheme list.
    pub fn check_candidates(&self, profile: &Profile, schemes: &[Scheme]) -> BatchResult {
        let result = self.engine.evaluate(profile, schemes);
        info!(
            citizen_id = profile.citizen_id().unwrap_or("unknown"),
            evaluated = result.total_evaluated(),
            eligible = result.eligible_count(),
            "batch eligibility check completed"
        );
        result
    }

    pub fn schemes(&self) -> Result<Vec<Scheme>, EligibilityServiceError> {
        Ok(self.catalog.list()?)
    }

    pub fn scheme(&self, scheme_id: &str) -> Result<Scheme, EligibilityServiceError> {
        self.catalog
            .fetch(scheme_id)?
            .ok_or_else(|| EligibilityServiceError::SchemeNotFound(scheme_id.to_string()))
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error("scheme {0} not found")]
    SchemeNotFound(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
