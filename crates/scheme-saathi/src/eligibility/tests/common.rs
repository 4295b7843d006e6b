use serde_json::{json, Value};

use crate::eligibility::{Profile, Rule, RuleSet, Scheme};

pub(super) fn ramesh_value() -> Value {
    json!({
        "citizen_id": "CIT001",
        "full_name": "Ramesh Kumar",
        "age": 45,
        "gender": "Male",
        "location": {
            "state": "Uttar Pradesh",
            "district": "Barabanki",
            "area_type": "Rural",
            "pincode": "225001"
        },
        "occupation": {
            "primary_occupation": "Farmer",
            "occupation_category": "Agriculture",
            "monthly_income": 8000,
            "is_bpl": true
        },
        "farmer_details": {
            "is_farmer": true,
            "land_ownership": true,
            "land_area_acres": 1.5,
            "crops_grown": ["Wheat", "Rice"]
        },
        "financial": {
            "has_bank_account": true,
            "is_income_tax_payer": false
        },
        "social": { "caste_category": "OBC" },
        "family": { "family_size": 5, "is_widow": false },
        "housing": { "house_type": "Semi-pucca", "owns_house": true },
        "documents": {
            "aadhaar_card": true,
            "bank_passbook": true,
            "land_records": true,
            "bpl_card": false
        },
        "exclusions": {
            "is_government_employee": false,
            "is_pensioner": false,
            "is_income_tax_payer": false
        },
        "digital": { "has_smartphone": false }
    })
}

pub(super) fn ramesh() -> Profile {
    Profile::new(ramesh_value())
}

pub(super) fn sunita() -> Profile {
    Profile::new(json!({
        "citizen_id": "CIT002",
        "full_name": "Sunita Devi",
        "age": 38,
        "gender": "Female",
        "location": { "state": "Bihar", "district": "Gaya", "area_type": "Rural" },
        "occupation": {
            "primary_occupation": "Agricultural Labourer",
            "monthly_income": 4500,
            "employment_type": "Unorganised",
            "is_bpl": true
        },
        "social": { "caste_category": "SC" },
        "family": { "family_size": 4, "is_widow": true, "has_girl_child": true },
        "housing": { "house_type": "Kutcha", "owns_house": true },
        "documents": { "aadhaar_card": true, "bpl_card": true, "bank_passbook": true },
        "exclusions": { "is_government_employee": false }
    }))
}

pub(super) fn scheme_from(value: Value) -> Scheme {
    serde_json::from_value(value).expect("scheme fixture deserializes")
}

pub(super) fn pm_kisan() -> Scheme {
    scheme_from(json!({
        "scheme_id": "SCH001",
        "scheme_name": "PM-KISAN",
        "scheme_name_hindi": "प्रधानमंत्री किसान सम्मान निधि",
        "category": "Agriculture",
        "benefit_amount": 6000,
        "application_process": { "portal_url": "https://pmkisan.gov.in", "mode": "Online/CSC" },
        "eligibility_criteria": {
            "summary": "Small and marginal landholding farmer families",
            "engine_rules": {
                "rule_type": "weighted",
                "logic": "AND",
                "minimum_score": 20,
                "exclusion_rules": [
                    {
                        "rule_id": "SCH001-E1",
                        "field": "exclusions.is_government_employee",
                        "operator": "equals",
                        "value": true,
                        "disqualifies": true,
                        "explanation": "Government employees are excluded"
                    },
                    {
                        "rule_id": "SCH001-E2",
                        "field": "exclusions.is_income_tax_payer",
                        "operator": "equals",
                        "value": true,
                        "disqualifies": true,
                        "explanation": "Income tax payers are excluded"
                    }
                ],
                "inclusion_rules": [
                    {
                        "rule_id": "SCH001-I1",
                        "field": "occupation.primary_occupation",
                        "operator": "equals",
                        "value": "farmer",
                        "weight": 15,
                        "explanation": "Primary occupation must be farming"
                    },
                    {
                        "rule_id": "SCH001-I2",
                        "field": "farmer_details.land_ownership",
                        "operator": "equals",
                        "value": true,
                        "weight": 10,
                        "explanation": "Must own cultivable land"
                    },
                    {
                        "rule_id": "SCH001-I3",
                        "field": "land_area_acres",
                        "operator": "less_than_equal",
                        "value": 5,
                        "weight": 5,
                        "explanation": "Small and marginal farmers (up to 5 acres)"
                    },
                    {
                        "rule_id": "SCH001-I4",
                        "field": "documents.land_records",
                        "operator": "equals",
                        "value": true,
                        "weight": 0,
                        "explanation": "Land records required"
                    }
                ],
                "special_priority_rules": [
                    {
                        "rule_id": "SCH001-P1",
                        "field": "social.caste_category",
                        "operator": "in",
                        "value": ["SC", "ST"],
                        "priority_boost": 5,
                        "explanation": "Priority for SC/ST farmers"
                    }
                ]
            }
        }
    }))
}

pub(super) fn pmay_g() -> Scheme {
    scheme_from(json!({
        "scheme_id": "SCH003",
        "scheme_name": "PMAY-G",
        "eligibility_criteria": {
            "engine_rules": {
                "minimum_score": 15,
                "exclusion_rules": [
                    {
                        "field": "exclusions.owns_motorized_vehicle",
                        "operator": "equals",
                        "value": true,
                        "explanation": "Households owning motorized vehicles are excluded"
                    }
                ],
                "inclusion_rules": [
                    {
                        "field": "location.area_type",
                        "operator": "equals",
                        "value": "Rural",
                        "weight": 10,
                        "explanation": "Must reside in a rural area"
                    },
                    {
                        "field": "is_bpl",
                        "operator": "equals",
                        "value": true,
                        "weight": 5,
                        "explanation": "Priority for BPL households"
                    },
                    {
                        "field": "housing.house_type",
                        "operator": "in",
                        "value": ["Kutcha", "Semi-pucca", "No House"],
                        "weight": 10,
                        "explanation": "Must have kutcha or semi-pucca house"
                    },
                    {
                        "field": "documents.bpl_card",
                        "operator": "equals",
                        "value": true,
                        "weight": 0,
                        "explanation": "BPL card required"
                    }
                ],
                "special_priority_rules": [
                    {
                        "field": "family.is_widow",
                        "operator": "equals",
                        "value": true,
                        "priority_boost": 5,
                        "explanation": "Priority for widows"
                    }
                ]
            }
        }
    }))
}

pub(super) fn pm_sym() -> Scheme {
    scheme_from(json!({
        "scheme_id": "SCH004",
        "scheme_name": "PM-SYM",
        "eligibility_criteria": {
            "engine_rules": {
                "minimum_score": 25,
                "exclusion_rules": [
                    {
                        "field": "financial.is_income_tax_payer",
                        "operator": "equals",
                        "value": true,
                        "explanation": "Income tax payers are excluded"
                    }
                ],
                "inclusion_rules": [
                    {
                        "field": "occupation.employment_type",
                        "operator": "equals",
                        "value": "Unorganised",
                        "weight": 10,
                        "explanation": "Must be an unorganised worker"
                    },
                    {
                        "field": "age",
                        "operator": "between",
                        "value": [18, 40],
                        "weight": 10,
                        "explanation": "Age must be between 18 and 40"
                    },
                    {
                        "field": "occupation.monthly_income",
                        "operator": "less_than",
                        "value": 15000,
                        "weight": 5,
                        "explanation": "Monthly income must be below 15000"
                    }
                ],
                "special_priority_rules": null
            }
        }
    }))
}

pub(super) fn unruled_scheme() -> Scheme {
    scheme_from(json!({
        "scheme_id": "SCH009",
        "scheme_name": "Sukanya Samriddhi Yojana",
        "eligibility_criteria": { "summary": "Girl child savings account" }
    }))
}

/// Scheme built from the given lists with no catalog metadata.
pub(super) fn scheme_with(
    inclusion_rules: Vec<Rule>,
    exclusion_rules: Vec<Rule>,
    special_priority_rules: Vec<Rule>,
    minimum_score: Option<f64>,
) -> Scheme {
    Scheme::new("SCH-T", "Test Scheme").with_rules(RuleSet {
        inclusion_rules,
        exclusion_rules,
        special_priority_rules,
        minimum_score,
        ..RuleSet::default()
    })
}
