//! Risk-factor assessment and care recommendations.

use crate::models::ClinicalInput;

use super::types::RiskFactor;

/// Age above which fall risk and polypharmacy are flagged.
const ELDERLY_ABOVE: u16 = 65;

/// Identify patient risk factors from demographics and assessment text.
pub fn risk_factors(input: &ClinicalInput) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    if input.patient_info.age > ELDERLY_ABOVE {
        risks.push(RiskFactor {
            factor: "Age over 65".to_string(),
            concern: "Fall risk, polypharmacy".to_string(),
        });
    }

    if input.vital_signs.pain_level.map(|p| p > 5).unwrap_or(false) {
        risks.push(RiskFactor {
            factor: "Severe pain".to_string(),
            concern: "Complications, delayed recovery".to_string(),
        });
    }

    if mobility_impaired(input) {
        risks.push(RiskFactor {
            factor: "Impaired mobility".to_string(),
            concern: "Fall risk, DVT risk".to_string(),
        });
    }

    risks
}

/// Build care recommendations from vitals and assessment.
pub fn recommendations(input: &ClinicalInput) -> Vec<String> {
    let mut recs = Vec::new();

    if input.vital_signs.pain_level.map(|p| p > 5).unwrap_or(false) {
        recs.push("Consider pain management consultation".to_string());
        recs.push("Re-assess pain in 1 hour after intervention".to_string());
    }

    if input.vital_signs.heart_rate.map(|hr| hr > 100).unwrap_or(false) {
        recs.push("Monitor for tachycardia - assess underlying causes".to_string());
    }

    if input.assessment.mobility.is_some() {
        recs.push("Implement fall prevention measures".to_string());
        recs.push("Encourage mobility as tolerated".to_string());
    }

    recs
}

fn mobility_impaired(input: &ClinicalInput) -> bool {
    input
        .assessment
        .mobility
        .as_deref()
        .map(|m| m.to_lowercase().contains("impaired"))
        .unwrap_or(false)
}
