//! Threshold-based alert generation.
//!
//! Every rule that matches contributes an alert; the informational
//! "no alerts" entry appears only when nothing else fired.

use crate::models::ClinicalInput;

use super::messages::MessageTemplates;
use super::types::{Alert, AlertSeverity};

/// Pain score above which an alert is critical.
const PAIN_CRITICAL_ABOVE: u8 = 7;
/// Pain score above which an alert is at least a warning.
const PAIN_WARNING_ABOVE: u8 = 4;
/// Heart-rate band outside of which a rate alert fires.
const HR_LOW: u16 = 50;
const HR_HIGH: u16 = 120;
/// Oxygen-saturation thresholds (percent).
const SPO2_CRITICAL_BELOW: f32 = 90.0;
const SPO2_WARNING_BELOW: f32 = 94.0;
/// Temperature thresholds (degrees Fahrenheit).
const TEMP_LOW: f32 = 96.0;
const TEMP_HIGH: f32 = 101.0;

/// Symptom substrings that escalate to an urgent alert.
const URGENT_SYMPTOMS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "confusion",
    "bleeding",
    "fall",
];

/// Derive the alert list for one assessment.
pub fn generate_alerts(input: &ClinicalInput) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let vitals = &input.vital_signs;

    if let Some(pain) = vitals.pain_level {
        if pain > PAIN_CRITICAL_ABOVE {
            let (message, action) = MessageTemplates::critical_pain(pain);
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                message,
                action,
            });
        } else if pain > PAIN_WARNING_ABOVE {
            let (message, action) = MessageTemplates::warning_pain(pain);
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message,
                action,
            });
        }
    }

    if let Some(rate) = vitals.heart_rate {
        if rate > HR_HIGH {
            let (message, action) = MessageTemplates::tachycardia(rate);
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message,
                action,
            });
        } else if rate < HR_LOW {
            let (message, action) = MessageTemplates::bradycardia(rate);
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message,
                action,
            });
        }
    }

    if let Some(spo2) = vitals.oxygen_saturation {
        if spo2 < SPO2_CRITICAL_BELOW {
            let (message, action) = MessageTemplates::critical_oxygen(spo2);
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                message,
                action,
            });
        } else if spo2 < SPO2_WARNING_BELOW {
            let (message, action) = MessageTemplates::warning_oxygen(spo2);
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message,
                action,
            });
        }
    }

    if let Some(temp) = vitals.temperature {
        if temp > TEMP_HIGH {
            let (message, action) = MessageTemplates::fever(temp);
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message,
                action,
            });
        } else if temp < TEMP_LOW {
            let (message, action) = MessageTemplates::hypothermia(temp);
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message,
                action,
            });
        }
    }

    let matched = urgent_symptom_matches(&input.assessment.symptoms);
    if !matched.is_empty() {
        let (message, action) = MessageTemplates::urgent_symptoms(&matched);
        alerts.push(Alert {
            severity: AlertSeverity::Urgent,
            message,
            action,
        });
    }

    if alerts.is_empty() {
        let (message, action) = MessageTemplates::no_alerts();
        alerts.push(Alert {
            severity: AlertSeverity::Info,
            message,
            action,
        });
    }

    alerts
}

/// Which urgent keywords appear as substrings of any reported symptom.
fn urgent_symptom_matches(symptoms: &[String]) -> Vec<&'static str> {
    URGENT_SYMPTOMS
        .iter()
        .copied()
        .filter(|keyword| {
            symptoms
                .iter()
                .any(|symptom| symptom.to_lowercase().contains(keyword))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClinicalInput;

    fn input_with(vitals: serde_json::Value, symptoms: Vec<&str>) -> ClinicalInput {
        serde_json::from_value(serde_json::json!({
            "patientInfo": {"name": "Jane Doe", "age": 65, "gender": "female"},
            "vitalSigns": vitals,
            "assessment": {"chiefComplaint": "severe abdominal pain", "symptoms": symptoms}
        }))
        .unwrap()
    }

    #[test]
    fn pain_above_seven_is_exactly_one_critical_with_value() {
        for pain in 8..=10u8 {
            let alerts = generate_alerts(&input_with(serde_json::json!({"painLevel": pain}), vec![]));
            let criticals: Vec<_> = alerts
                .iter()
                .filter(|a| a.severity == AlertSeverity::Critical)
                .collect();
            assert_eq!(criticals.len(), 1);
            assert!(criticals[0].message.contains(&format!("{pain}/10")));
        }
    }

    #[test]
    fn pain_five_to_seven_is_exactly_one_warning() {
        for pain in 5..=7u8 {
            let alerts = generate_alerts(&input_with(serde_json::json!({"painLevel": pain}), vec![]));
            let warnings: Vec<_> = alerts
                .iter()
                .filter(|a| a.severity == AlertSeverity::Warning)
                .collect();
            assert_eq!(warnings.len(), 1, "pain level {pain}");
            assert!(alerts.iter().all(|a| a.severity != AlertSeverity::Critical));
        }
    }

    #[test]
    fn low_pain_and_no_urgent_symptoms_yields_single_info_fallback() {
        for pain in 0..=4u8 {
            let alerts = generate_alerts(&input_with(serde_json::json!({"painLevel": pain}), vec![]));
            assert_eq!(alerts.len(), 1, "pain level {pain}");
            assert_eq!(alerts[0].severity, AlertSeverity::Info);
        }
    }

    #[test]
    fn urgent_symptom_substring_fires_urgent_alert() {
        let alerts = generate_alerts(&input_with(
            serde_json::json!({}),
            vec!["intermittent chest pain on exertion"],
        ));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Urgent);
        assert!(alerts[0].message.contains("chest pain"));
    }

    #[test]
    fn multiple_rules_stack_without_fallback() {
        let alerts = generate_alerts(&input_with(
            serde_json::json!({"painLevel": 9, "heartRate": 130}),
            vec!["bleeding from incision site"],
        ));
        assert_eq!(alerts.len(), 3);
        assert!(alerts.iter().all(|a| a.severity != AlertSeverity::Info));
    }

    #[test]
    fn bradycardia_and_tachycardia_thresholds() {
        let slow = generate_alerts(&input_with(serde_json::json!({"heartRate": 45}), vec![]));
        assert!(slow[0].message.contains("Bradycardia"));

        let fast = generate_alerts(&input_with(serde_json::json!({"heartRate": 130}), vec![]));
        assert!(fast[0].message.contains("Tachycardia"));

        let normal = generate_alerts(&input_with(serde_json::json!({"heartRate": 72}), vec![]));
        assert_eq!(normal[0].severity, AlertSeverity::Info);
    }

    #[test]
    fn oxygen_thresholds_grade_severity() {
        let critical = generate_alerts(&input_with(
            serde_json::json!({"oxygenSaturation": 88.0}),
            vec![],
        ));
        assert_eq!(critical[0].severity, AlertSeverity::Critical);

        let warning = generate_alerts(&input_with(
            serde_json::json!({"oxygenSaturation": 92.0}),
            vec![],
        ));
        assert_eq!(warning[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn jane_doe_scenario_first_alert_is_critical_with_nine() {
        let alerts = generate_alerts(&input_with(serde_json::json!({"painLevel": 9}), vec![]));
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert!(alerts[0].message.contains('9'));
    }
}
