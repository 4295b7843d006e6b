use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use super::profile::{FieldPath, Profile, ProfileCategory};
use super::scheme::number_or_none;

/// Comparison applied between a resolved profile value and a rule operand.
///
/// Catalogs are authored outside the engine, so tags this build does not
/// know are kept as [`RuleOperator::Unsupported`] and never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleOperator {
    Equals,
    GreaterThan,
    LessThan,
    LessThanEqual,
    In,
    NotEmpty,
    Between,
    Unsupported(String),
}

impl RuleOperator {
    pub fn as_str(&self) -> &str {
        match self {
            RuleOperator::Equals => "equals",
            RuleOperator::GreaterThan => "greater_than",
            RuleOperator::LessThan => "less_than",
            RuleOperator::LessThanEqual => "less_than_equal",
            RuleOperator::In => "in",
            RuleOperator::NotEmpty => "not_empty",
            RuleOperator::Between => "between",
            RuleOperator::Unsupported(tag) => tag,
        }
    }

    /// Apply the operator. `actual` is `None` when the field did not resolve.
    pub fn apply(&self, actual: Option<&Value>, operand: &Value) -> bool {
        match self {
            RuleOperator::Equals => equals(actual, operand),
            RuleOperator::GreaterThan => compare(actual, operand, |a, b| a > b),
            RuleOperator::LessThan => compare(actual, operand, |a, b| a < b),
            RuleOperator::LessThanEqual => compare(actual, operand, |a, b| a <= b),
            RuleOperator::In => contained_in(actual, operand),
            RuleOperator::NotEmpty => not_empty(actual),
            RuleOperator::Between => between(actual, operand),
            RuleOperator::Unsupported(tag) => {
                debug!(operator = %tag, "unsupported rule operator evaluated as non-match");
                false
            }
        }
    }
}

impl From<String> for RuleOperator {
    fn from(value: String) -> Self {
        match value.as_str() {
            "equals" => RuleOperator::Equals,
            "greater_than" => RuleOperator::GreaterThan,
            "less_than" => RuleOperator::LessThan,
            "less_than_equal" => RuleOperator::LessThanEqual,
            "in" => RuleOperator::In,
            "not_empty" => RuleOperator::NotEmpty,
            "between" => RuleOperator::Between,
            _ => RuleOperator::Unsupported(value),
        }
    }
}

impl From<&str> for RuleOperator {
    fn from(value: &str) -> Self {
        RuleOperator::from(value.to_string())
    }
}

impl From<RuleOperator> for String {
    fn from(value: RuleOperator) -> Self {
        match value {
            RuleOperator::Unsupported(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Absent, `null` or non-string operators become an empty or JSON-rendered
/// [`RuleOperator::Unsupported`] tag instead of failing the whole catalog.
fn lenient_operator<'de, D>(deserializer: D) -> Result<RuleOperator, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(tag)) => RuleOperator::from(tag),
        None | Some(Value::Null) => RuleOperator::Unsupported(String::new()),
        Some(other) => RuleOperator::Unsupported(other.to_string()),
    })
}

fn missing_operator() -> RuleOperator {
    RuleOperator::Unsupported(String::new())
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One authored condition inside a scheme's rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    pub field: FieldPath,
    #[serde(default = "missing_operator", deserialize_with = "lenient_operator")]
    pub operator: RuleOperator,
    #[serde(default)]
    pub value: Value,
    #[serde(
        default,
        deserialize_with = "number_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,
    /// Carried for catalog consumers; any matching exclusion disqualifies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disqualifies: Option<bool>,
    #[serde(
        default,
        deserialize_with = "number_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority_boost: Option<f64>,
    #[serde(default)]
    pub explanation: String,
}

impl Rule {
    pub fn new(
        field: impl Into<FieldPath>,
        operator: impl Into<RuleOperator>,
        value: Value,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: None,
            field: field.into(),
            operator: operator.into(),
            value,
            weight: None,
            disqualifies: None,
            priority_boost: None,
            explanation: explanation.into(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_priority_boost(mut self, boost: f64) -> Self {
        self.priority_boost = Some(boost);
        self
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        let actual = profile.resolve(&self.field);
        let matched = self.operator.apply(actual, &self.value);
        trace!(
            field = %self.field,
            operator = %self.operator,
            resolved = actual.is_some(),
            matched,
            "rule evaluated"
        );
        matched
    }

    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    pub fn priority_boost(&self) -> f64 {
        self.priority_boost.unwrap_or(0.0)
    }

    pub fn is_document_requirement(&self) -> bool {
        self.field.category() == Some(ProfileCategory::Documents)
    }

    /// Document label derived from the explanation, e.g. `"Aadhaar card required"`
    /// becomes `"Aadhaar card"`.
    pub fn document_label(&self) -> String {
        let explanation = self.explanation.trim_end();
        explanation
            .strip_suffix(" required")
            .unwrap_or(explanation)
            .to_string()
    }
}

// Strings compare case-insensitively, numbers by value, anything else structurally.
fn equals(actual: Option<&Value>, operand: &Value) -> bool {
    match (actual, operand) {
        (None, _) => false,
        (Some(Value::String(left)), Value::String(right)) => {
            left.to_lowercase() == right.to_lowercase()
        }
        (Some(left), right) => strict_eq(left, right),
    }
}

fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        _ => left == right,
    }
}

fn compare(actual: Option<&Value>, operand: &Value, cmp: fn(f64, f64) -> bool) -> bool {
    match (actual.and_then(Value::as_f64), operand.as_f64()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

fn contained_in(actual: Option<&Value>, operand: &Value) -> bool {
    match (actual, operand) {
        (Some(value), Value::Array(candidates)) => {
            candidates.iter().any(|candidate| strict_eq(value, candidate))
        }
        _ => false,
    }
}

fn not_empty(actual: Option<&Value>) -> bool {
    match actual {
        None | Some(Value::Null) => false,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

// Bounds are inclusive on both ends.
fn between(actual: Option<&Value>, operand: &Value) -> bool {
    let Some(value) = actual.and_then(Value::as_f64) else {
        return false;
    };
    match operand.as_array().map(Vec::as_slice) {
        Some([low, high]) => match (low.as_f64(), high.as_f64()) {
            (Some(low), Some(high)) => low <= value && value <= high,
            _ => false,
        },
        _ => false,
    }
}
