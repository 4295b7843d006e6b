use serde::{Deserialize, Serialize};

use super::profile::Profile;
use super::scheme::{evaluate_scheme, Scheme, SchemeEvaluation};

/// Outcome of checking one profile against a candidate scheme list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen_id: Option<String>,
    pub eligible_schemes: Vec<SchemeEvaluation>,
    pub ineligible_schemes: Vec<SchemeEvaluation>,
    pub summary: String,
}

/// The slice of an eligible result the voice flow reads out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibleSchemeBrief {
    pub scheme_name: String,
    pub score: f64,
    pub missing_documents: Vec<String>,
}

impl BatchResult {
    pub fn eligible_count(&self) -> usize {
        self.eligible_schemes.len()
    }

    pub fn total_evaluated(&self) -> usize {
        self.eligible_schemes.len() + self.ineligible_schemes.len()
    }

    /// First `limit` eligible schemes in caller order.
    pub fn top_eligible(&self, limit: usize) -> Vec<EligibleSchemeBrief> {
        self.eligible_schemes
            .iter()
            .take(limit)
            .map(|evaluation| EligibleSchemeBrief {
                scheme_name: evaluation.scheme_name.clone(),
                score: evaluation.score,
                missing_documents: evaluation.missing_documents.clone(),
            })
            .collect()
    }

    /// Documents still needed across eligible schemes, first mention wins.
    pub fn missing_documents(&self) -> Vec<String> {
        let mut documents: Vec<String> = Vec::new();
        for document in self
            .eligible_schemes
            .iter()
            .flat_map(|evaluation| evaluation.missing_documents.iter())
        {
            if !documents.contains(document) {
                documents.push(document.clone());
            }
        }
        documents
    }
}

pub(crate) fn evaluate_all(profile: &Profile, schemes: &[Scheme]) -> BatchResult {
    let (eligible_schemes, ineligible_schemes): (Vec<_>, Vec<_>) = schemes
        .iter()
        .map(|scheme| evaluate_scheme(profile, scheme))
        .partition(|evaluation| evaluation.is_eligible);

    let subject = profile
        .full_name()
        .or_else(|| profile.citizen_id())
        .unwrap_or("Citizen");
    let summary = format!(
        "{subject} is eligible for {} schemes.",
        eligible_schemes.len()
    );

    BatchResult {
        citizen_id: profile.citizen_id().map(str::to_string),
        eligible_schemes,
        ineligible_schemes,
        summary,
    }
}
