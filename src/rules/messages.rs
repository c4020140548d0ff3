//! Wording templates for alerts and diagnoses.
//!
//! Kept in one place so every alert reads consistently and tests can
//! pin the exact phrasing the renderer and prompt embed.

/// Message and action builder for clinical alerts.
pub struct MessageTemplates;

impl MessageTemplates {
    pub fn critical_pain(level: u8) -> (String, String) {
        (
            format!("Severe pain ({level}/10) - immediate intervention required"),
            "Administer prescribed analgesia and reassess within 30 minutes".to_string(),
        )
    }

    pub fn warning_pain(level: u8) -> (String, String) {
        (
            format!("Moderate pain ({level}/10) - monitor and manage"),
            "Continue pain management protocol".to_string(),
        )
    }

    pub fn tachycardia(rate: u16) -> (String, String) {
        (
            format!("Tachycardia (HR {rate}) - assess cause"),
            "Check for fever, pain, anxiety, or cardiac issues".to_string(),
        )
    }

    pub fn bradycardia(rate: u16) -> (String, String) {
        (
            format!("Bradycardia (HR {rate}) - assess patient"),
            "Review medications and assess patient symptoms".to_string(),
        )
    }

    pub fn critical_oxygen(saturation: f32) -> (String, String) {
        (
            format!("Hypoxemia (SpO2 {saturation:.0}%) - immediate intervention required"),
            "Apply supplemental oxygen per protocol and notify physician".to_string(),
        )
    }

    pub fn warning_oxygen(saturation: f32) -> (String, String) {
        (
            format!("Low oxygen saturation (SpO2 {saturation:.0}%) - monitor closely"),
            "Recheck saturation and assess respiratory status".to_string(),
        )
    }

    pub fn fever(temperature: f32) -> (String, String) {
        (
            format!("Elevated temperature ({temperature:.1} F) - monitor for infection"),
            "Follow fever protocol and recheck in 1 hour".to_string(),
        )
    }

    pub fn hypothermia(temperature: f32) -> (String, String) {
        (
            format!("Low temperature ({temperature:.1} F) - assess patient"),
            "Apply warming measures and recheck in 1 hour".to_string(),
        )
    }

    pub fn urgent_symptoms(matched: &[&str]) -> (String, String) {
        (
            format!("Critical symptoms reported: {}", matched.join(", ")),
            "Notify physician immediately if not already aware".to_string(),
        )
    }

    pub fn no_alerts() -> (String, String) {
        (
            "No critical alerts - continue routine monitoring".to_string(),
            "Maintain current care plan".to_string(),
        )
    }

    pub fn interaction(first: &str, second: &str) -> String {
        format!(
            "Potential interaction between {first} and {second}. \
             Monitor closely for adverse effects."
        )
    }
}

/// NANDA-style diagnosis templates.
pub struct DiagnosisTemplates;

impl DiagnosisTemplates {
    pub fn acute_pain(condition: &str, level: u8) -> String {
        format!(
            "Acute Pain related to {condition} as evidenced by pain rating of {level}/10"
        )
    }

    pub fn impaired_mobility(condition: &str) -> String {
        format!("Impaired Physical Mobility related to {condition}")
    }

    pub fn fall_risk(factors: &str) -> String {
        format!("Risk for Falls related to {factors}")
    }

    pub fn knowledge_deficit(topic: &str) -> String {
        format!("Knowledge Deficit related to {topic} and treatment plan")
    }

    pub fn infection_risk() -> String {
        "Risk for Infection related to invasive procedures".to_string()
    }
}
