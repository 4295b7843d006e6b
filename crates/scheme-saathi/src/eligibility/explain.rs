use serde::Serialize;
use serde_json::Value;

use super::profile::Profile;
use super::scheme::{Scheme, SchemeEvaluation};

/// Grounding handed to the natural-language explanation service. Everything
/// here comes from the profile, the catalog entry, or the engine's own result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationContext {
    pub citizen_name: String,
    pub scheme_id: String,
    pub scheme_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_name_hindi: Option<String>,
    pub verdict: &'static str,
    pub score: f64,
    pub reasoning: Vec<String>,
    pub missing_documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_process: Option<Value>,
}

impl ExplanationContext {
    pub fn new(profile: &Profile, scheme: &Scheme, evaluation: &SchemeEvaluation) -> Self {
        Self {
            citizen_name: profile.full_name().unwrap_or("Citizen").to_string(),
            scheme_id: evaluation.scheme_id.clone(),
            scheme_name: scheme.display_name().to_string(),
            scheme_name_hindi: scheme
                .metadata
                .get("scheme_name_hindi")
                .and_then(Value::as_str)
                .map(str::to_string),
            verdict: if evaluation.is_eligible {
                "Eligible"
            } else {
                "Not Eligible"
            },
            score: evaluation.score,
            reasoning: evaluation.reasoning.clone(),
            missing_documents: evaluation.missing_documents.clone(),
            application_process: scheme.metadata.get("application_process").cloned(),
        }
    }
}
