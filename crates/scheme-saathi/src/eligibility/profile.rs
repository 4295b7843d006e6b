use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named groupings inside a citizen profile, in the order the bare-name
/// fallback scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileCategory {
    PersonalInfo,
    Location,
    Occupation,
    FarmerDetails,
    Financial,
    Social,
    Family,
    Housing,
    Documents,
    Exclusions,
    Digital,
}

impl ProfileCategory {
    pub const SCAN_ORDER: [ProfileCategory; 11] = [
        ProfileCategory::PersonalInfo,
        ProfileCategory::Location,
        ProfileCategory::Occupation,
        ProfileCategory::FarmerDetails,
        ProfileCategory::Financial,
        ProfileCategory::Social,
        ProfileCategory::Family,
        ProfileCategory::Housing,
        ProfileCategory::Documents,
        ProfileCategory::Exclusions,
        ProfileCategory::Digital,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ProfileCategory::PersonalInfo => "personal_info",
            ProfileCategory::Location => "location",
            ProfileCategory::Occupation => "occupation",
            ProfileCategory::FarmerDetails => "farmer_details",
            ProfileCategory::Financial => "financial",
            ProfileCategory::Social => "social",
            ProfileCategory::Family => "family",
            ProfileCategory::Housing => "housing",
            ProfileCategory::Documents => "documents",
            ProfileCategory::Exclusions => "exclusions",
            ProfileCategory::Digital => "digital",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::SCAN_ORDER
            .into_iter()
            .find(|category| category.key() == key)
    }
}

/// A rule's field reference, either fully qualified (`occupation.monthly_income`)
/// or a bare attribute name (`monthly_income`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldPath {
    raw: String,
}

impl FieldPath {
    pub fn parse(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }

    /// True when the path has no `.` and may be looked up by category scan.
    pub fn is_bare(&self) -> bool {
        !self.raw.contains('.')
    }

    /// Category named by the leading segment of a qualified path.
    pub fn category(&self) -> Option<ProfileCategory> {
        if self.is_bare() {
            return None;
        }
        self.segments().next().and_then(ProfileCategory::from_key)
    }
}

impl From<String> for FieldPath {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<FieldPath> for String {
    fn from(value: FieldPath) -> Self {
        value.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Unvalidated citizen record as supplied by the data store or request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Value);

impl Profile {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Resolve a field by direct traversal, then by scanning the categories
    /// for a bare name. Absent fields yield `None`.
    pub fn resolve(&self, path: &FieldPath) -> Option<&Value> {
        if let Some(value) = self.traverse(path) {
            return Some(value);
        }

        if !path.is_bare() {
            return None;
        }

        ProfileCategory::SCAN_ORDER.iter().find_map(|category| {
            self.0
                .get(category.key())
                .filter(|group| group.is_object())
                .and_then(|group| group.get(path.as_str()))
        })
    }

    pub fn lookup(&self, path: &str) -> Option<&Value> {
        self.resolve(&FieldPath::parse(path))
    }

    pub fn citizen_id(&self) -> Option<&str> {
        self.lookup("citizen_id").and_then(Value::as_str)
    }

    pub fn full_name(&self) -> Option<&str> {
        self.lookup("full_name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    fn traverse(&self, path: &FieldPath) -> Option<&Value> {
        path.segments()
            .try_fold(&self.0, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            })
    }
}

impl From<Value> for Profile {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
