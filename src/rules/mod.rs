//! Clinical rules engine.
//!
//! Derives alerts, the early-warning score, nursing diagnoses,
//! recommendations, risk factors, and drug-interaction warnings from one
//! `ClinicalInput`. Every derivation is a pure function of the input; no
//! state carries across requests. The sub-derivations are independent of
//! one another, so `derive_signals` fans them out concurrently.

pub mod alerts;
pub mod diagnoses;
pub mod ews;
pub mod interactions;
pub mod messages;
pub mod recommendations;
pub mod types;

pub use types::*;

use crate::models::ClinicalInput;

/// Run every derivation and assemble the signal set for one request.
pub async fn derive_signals(input: &ClinicalInput) -> DerivedSignals {
    let (alerts, early_warning, diagnoses, recs, risks, interactions) = tokio::join!(
        async { alerts::generate_alerts(input) },
        async { ews::early_warning_score(&input.vital_signs) },
        async { diagnoses::nursing_diagnoses(input) },
        async { recommendations::recommendations(input) },
        async { recommendations::risk_factors(input) },
        async { interactions::check_interactions(&input.interventions.medications) },
    );

    let signals = DerivedSignals {
        alerts,
        early_warning,
        diagnoses,
        recommendations: recs,
        risk_factors: risks,
        interactions,
        compliance: ComplianceCheck::verified(),
    };

    tracing::debug!(
        alerts = signals.alerts.len(),
        ews = signals.early_warning.score,
        risk = signals.early_warning.risk.as_str(),
        diagnoses = signals.diagnoses.len(),
        interactions = signals.interactions.len(),
        "signals derived"
    );

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane_doe() -> ClinicalInput {
        serde_json::from_value(serde_json::json!({
            "patientInfo": {"name": "Jane Doe", "age": 65, "gender": "female"},
            "vitalSigns": {"painLevel": 9},
            "assessment": {"chiefComplaint": "severe abdominal pain"}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn jane_doe_scenario_produces_critical_alert_with_nine() {
        let signals = derive_signals(&jane_doe()).await;
        assert_eq!(signals.alerts[0].severity, AlertSeverity::Critical);
        assert!(signals.alerts[0].message.contains('9'));
        assert_eq!(signals.early_warning.score, 3);
        assert!(signals.compliance.hipaa);
    }

    #[tokio::test]
    async fn derivation_is_deterministic() {
        let input = jane_doe();
        let first = derive_signals(&input).await;
        let second = derive_signals(&input).await;
        assert_eq!(first.alerts, second.alerts);
        assert_eq!(first.early_warning, second.early_warning);
        assert_eq!(first.diagnoses, second.diagnoses);
    }

    #[tokio::test]
    async fn signals_serialize_to_camel_case() {
        let signals = derive_signals(&jane_doe()).await;
        let json = serde_json::to_value(&signals).unwrap();
        assert!(json.get("earlyWarning").is_some());
        assert!(json.get("riskFactors").is_some());
    }
}
