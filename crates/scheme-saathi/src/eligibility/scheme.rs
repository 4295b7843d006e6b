use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::profile::Profile;
use super::rules::Rule;

pub(crate) const NO_RULES_DEFINED: &str = "No eligibility rules defined for this scheme.";

/// Welfare program as stored in the catalog. Fields the engine does not read
/// are kept in `metadata` so they survive a round trip through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub scheme_id: String,
    #[serde(default)]
    pub scheme_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility_criteria: Option<EligibilityCriteria>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Scheme {
    pub fn new(scheme_id: impl Into<String>, scheme_name: impl Into<String>) -> Self {
        Self {
            scheme_id: scheme_id.into(),
            scheme_name: scheme_name.into(),
            eligibility_criteria: None,
            metadata: Map::new(),
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.eligibility_criteria
            .get_or_insert_with(EligibilityCriteria::default)
            .engine_rules = Some(rules);
        self
    }

    pub fn rule_set(&self) -> Option<&RuleSet> {
        self.eligibility_criteria
            .as_ref()
            .and_then(|criteria| criteria.engine_rules.as_ref())
    }

    /// Name for display, falling back to the id when the catalog left it blank.
    pub fn display_name(&self) -> &str {
        if self.scheme_name.trim().is_empty() {
            &self.scheme_id
        } else {
            &self.scheme_name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_rules: Option<RuleSet>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The three rule lists and threshold attached to one scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub inclusion_rules: Vec<Rule>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exclusion_rules: Vec<Rule>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub special_priority_rules: Vec<Rule>,
    #[serde(
        default,
        deserialize_with = "number_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_score: Option<f64>,
    /// `rule_type`, `logic` and `alternative_schemes` are passed through for
    /// collaborators; the engine does not read them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub alternative_schemes: Vec<String>,
}

impl RuleSet {
    pub fn minimum_score(&self) -> f64 {
        self.minimum_score.unwrap_or(0.0)
    }
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Numeric fields accept only JSON numbers; anything else reads as unset.
pub(crate) fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| value.as_f64()))
}

/// Per-scheme decision with the trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeEvaluation {
    pub scheme_id: String,
    pub scheme_name: String,
    pub is_eligible: bool,
    pub score: f64,
    pub reasoning: Vec<String>,
    pub missing_documents: Vec<String>,
    pub priority_boost: f64,
}

impl SchemeEvaluation {
    fn not_evaluable(scheme: &Scheme) -> Self {
        Self {
            scheme_id: scheme.scheme_id.clone(),
            scheme_name: scheme.scheme_name.clone(),
            is_eligible: false,
            score: 0.0,
            reasoning: vec![NO_RULES_DEFINED.to_string()],
            missing_documents: Vec::new(),
            priority_boost: 0.0,
        }
    }
}

/// Reasoning entry kinds, rendered in the wording downstream explainers expect.
enum Finding<'a> {
    Disqualified(&'a str),
    Passed(&'a str),
    Failed(&'a str),
    Boosted { boost: f64, explanation: &'a str },
    BelowThreshold { total: f64, minimum: f64 },
}

impl fmt::Display for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Disqualified(explanation) => write!(f, "❌ Disqualified: {explanation}"),
            Finding::Passed(explanation) => write!(f, "✅ {explanation}"),
            Finding::Failed(explanation) => write!(f, "ℹ️ Failed: {explanation}"),
            Finding::Boosted { boost, explanation } => {
                write!(f, "⭐ Priority Boost ({boost}): {explanation}")
            }
            Finding::BelowThreshold { total, minimum } => write!(
                f,
                "⚠️ Total score ({total}) is below minimum threshold ({minimum})"
            ),
        }
    }
}

pub(crate) fn evaluate_scheme(profile: &Profile, scheme: &Scheme) -> SchemeEvaluation {
    let Some(rules) = scheme.rule_set() else {
        debug!(scheme_id = %scheme.scheme_id, "scheme carries no engine rules");
        return SchemeEvaluation::not_evaluable(scheme);
    };

    let mut reasoning = Vec::new();
    let mut missing_documents = Vec::new();

    // Every exclusion is checked so the trail lists all disqualifiers.
    let mut disqualified = false;
    for rule in &rules.exclusion_rules {
        if rule.matches(profile) {
            disqualified = true;
            reasoning.push(Finding::Disqualified(&rule.explanation).to_string());
        }
    }

    let mut inclusion_score = 0.0;
    for rule in &rules.inclusion_rules {
        if rule.matches(profile) {
            inclusion_score += rule.weight();
            reasoning.push(Finding::Passed(&rule.explanation).to_string());
        } else {
            reasoning.push(Finding::Failed(&rule.explanation).to_string());
            if rule.is_document_requirement() {
                missing_documents.push(rule.document_label());
            }
        }
    }

    let mut priority_boost = 0.0;
    for rule in &rules.special_priority_rules {
        if rule.matches(profile) {
            priority_boost += rule.priority_boost();
            reasoning.push(
                Finding::Boosted {
                    boost: rule.priority_boost(),
                    explanation: &rule.explanation,
                }
                .to_string(),
            );
        }
    }

    let total = inclusion_score + priority_boost;
    let minimum = rules.minimum_score();
    let is_eligible = !disqualified && total >= minimum;

    if !is_eligible && !disqualified {
        reasoning.push(Finding::BelowThreshold { total, minimum }.to_string());
    }

    debug!(
        scheme_id = %scheme.scheme_id,
        score = total,
        minimum,
        disqualified,
        is_eligible,
        "scheme evaluated"
    );

    SchemeEvaluation {
        scheme_id: scheme.scheme_id.clone(),
        scheme_name: scheme.scheme_name.clone(),
        is_eligible,
        score: total,
        reasoning,
        missing_documents,
        priority_boost,
    }
}
