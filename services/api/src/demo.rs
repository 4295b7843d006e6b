use chrono::{DateTime, Utc};
use clap::Args;
use scheme_saathi::catalog::{attach_rule_sets, RuleSetRecord};
use scheme_saathi::eligibility::ExplanationContext;
use scheme_saathi::error::AppError;
use scheme_saathi::{BatchResult, EligibilityEngine, Profile, Scheme};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Citizen profile JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// JSON array of schemes to check the profile against
    #[arg(long)]
    pub(crate) schemes: PathBuf,
    /// Optional JSON array of standalone rule-set records to attach by scheme id
    #[arg(long)]
    pub(crate) rule_sets: Option<PathBuf>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

/// Batch result stamped with the time the check ran.
#[derive(Debug, Serialize)]
pub(crate) struct EvaluationReport {
    pub(crate) evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) result: BatchResult,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        profile,
        schemes,
        rule_sets,
        pretty,
    } = args;

    let profile: Profile = read_json(&profile)?;
    let mut schemes: Vec<Scheme> = read_json(&schemes)?;
    if let Some(path) = rule_sets {
        let records: Vec<RuleSetRecord> = read_json(&path)?;
        schemes = attach_rule_sets(schemes, &records);
    }

    let report = EvaluationReport {
        evaluated_at: Utc::now(),
        result: EligibilityEngine::new().evaluate(&profile, &schemes),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let profile: Profile = serde_json::from_value(sample_profile())?;
    let schemes: Vec<Scheme> = serde_json::from_value(sample_schemes())?;

    println!("Scheme eligibility demo");
    let result = EligibilityEngine::new().evaluate(&profile, &schemes);
    render_batch(&result);

    if let Some(evaluation) = result.eligible_schemes.first() {
        if let Some(scheme) = schemes.iter().find(|s| s.scheme_id == evaluation.scheme_id) {
            let context = ExplanationContext::new(&profile, scheme, evaluation);
            println!("\nExplanation context for {}", context.scheme_name);
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn render_batch(result: &BatchResult) {
    println!("{}", result.summary);
    println!(
        "- {} of {} schemes matched",
        result.eligible_count(),
        result.total_evaluated()
    );

    if !result.eligible_schemes.is_empty() {
        println!("Top matches:");
        for brief in result.top_eligible(3) {
            if brief.missing_documents.is_empty() {
                println!("  - {} (score {})", brief.scheme_name, brief.score);
            } else {
                println!(
                    "  - {} (score {}) | still needs: {}",
                    brief.scheme_name,
                    brief.score,
                    brief.missing_documents.join(", ")
                );
            }
        }
    }

    if !result.ineligible_schemes.is_empty() {
        println!("Not eligible:");
        for evaluation in &result.ineligible_schemes {
            let reason = evaluation
                .reasoning
                .last()
                .map(String::as_str)
                .unwrap_or("no reasoning recorded");
            println!("  - {}: {}", evaluation.scheme_name, reason);
        }
    }

    let documents = result.missing_documents();
    if !documents.is_empty() {
        println!("Documents to collect: {}", documents.join(", "));
    }
}

fn sample_profile() -> serde_json::Value {
    json!({
        "citizen_id": "CIT001",
        "full_name": "Ramesh Kumar",
        "age": 45,
        "location": { "state": "Uttar Pradesh", "district": "Barabanki", "area_type": "Rural" },
        "occupation": { "primary_occupation": "Farmer", "monthly_income": 8000, "is_bpl": true },
        "farmer_details": { "land_ownership": true, "land_area_acres": 1.5 },
        "social": { "caste_category": "OBC" },
        "housing": { "house_type": "Semi-pucca" },
        "documents": { "aadhaar_card": true, "bank_passbook": true, "land_records": true },
        "exclusions": { "is_government_employee": false, "is_income_tax_payer": false }
    })
}

fn sample_schemes() -> serde_json::Value {
    json!([
        {
            "scheme_id": "SCH001",
            "scheme_name": "PM-KISAN",
            "scheme_name_hindi": "प्रधानमंत्री किसान सम्मान निधि",
            "application_process": { "online": "https://pmkisan.gov.in", "offline": "Visit the nearest CSC" },
            "eligibility_criteria": {
                "engine_rules": {
                    "minimum_score": 20,
                    "exclusion_rules": [
                        { "field": "exclusions.is_government_employee", "operator": "equals", "value": true, "explanation": "Government employees are excluded" }
                    ],
                    "inclusion_rules": [
                        { "field": "occupation.primary_occupation", "operator": "equals", "value": "Farmer", "weight": 15, "explanation": "Primary occupation must be farming" },
                        { "field": "farmer_details.land_ownership", "operator": "equals", "value": true, "weight": 10, "explanation": "Must own cultivable land" }
                    ],
                    "special_priority_rules": [
                        { "field": "social.caste_category", "operator": "in", "value": ["SC", "ST"], "priority_boost": 5, "explanation": "Priority for SC/ST farmers" }
                    ]
                }
            }
        },
        {
            "scheme_id": "SCH003",
            "scheme_name": "PMAY-G",
            "eligibility_criteria": {
                "engine_rules": {
                    "minimum_score": 15,
                    "inclusion_rules": [
                        { "field": "location.area_type", "operator": "equals", "value": "Rural", "weight": 10, "explanation": "Must reside in a rural area" },
                        { "field": "housing.house_type", "operator": "in", "value": ["Kutcha", "Semi-pucca"], "weight": 10, "explanation": "Must have kutcha or semi-pucca house" },
                        { "field": "documents.bpl_card", "operator": "equals", "value": true, "weight": 0, "explanation": "BPL card required" }
                    ]
                }
            }
        },
        {
            "scheme_id": "SCH004",
            "scheme_name": "PM-SYM",
            "eligibility_criteria": {
                "engine_rules": {
                    "minimum_score": 25,
                    "inclusion_rules": [
                        { "field": "occupation.employment_type", "operator": "equals", "value": "Unorganised", "weight": 10, "explanation": "Must be an unorganised worker" },
                        { "field": "age", "operator": "between", "value": [18, 40], "weight": 10, "explanation": "Age must be between 18 and 40" },
                        { "field": "occupation.monthly_income", "operator": "less_than", "value": 15000, "weight": 5, "explanation": "Monthly income must be below 15000" }
                    ]
                }
            }
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_produces_expected_matches() {
        let profile: Profile = serde_json::from_value(sample_profile()).expect("profile parses");
        let schemes: Vec<Scheme> = serde_json::from_value(sample_schemes()).expect("schemes parse");

        let result = EligibilityEngine::new().evaluate(&profile, &schemes);

        let eligible: Vec<_> = result
            .eligible_schemes
            .iter()
            .map(|evaluation| evaluation.scheme_id.as_str())
            .collect();
        assert_eq!(eligible, vec!["SCH001", "SCH003"]);
        assert_eq!(result.missing_documents(), vec!["BPL card".to_string()]);
        assert_eq!(result.summary, "Ramesh Kumar is eligible for 2 schemes.");
    }

    #[test]
    fn report_flattens_batch_fields() {
        let profile: Profile = serde_json::from_value(sample_profile()).expect("profile parses");
        let report = EvaluationReport {
            evaluated_at: Utc::now(),
            result: EligibilityEngine::new().evaluate(&profile, &[]),
        };

        let value = serde_json::to_value(&report).expect("serializes");
        assert!(value.get("evaluated_at").is_some());
        assert_eq!(value["citizen_id"], "CIT001");
        assert_eq!(value["summary"], "Ramesh Kumar is eligible for 0 schemes.");
    }

    #[test]
    fn missing_profile_file_is_io_error() {
        let result = read_json::<Profile>(Path::new("/nonexistent/profile.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
