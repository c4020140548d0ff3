//! Prompt assembly for chart generation.
//!
//! One instruction string per request: role preamble, a tool-specific
//! focus block, the normalized input field by field, the derived
//! signals, and a strict JSON output contract. Absent optional fields
//! render as "Not specified" so the upstream model never sees an empty
//! slot.

use crate::models::{ClinicalInput, ToolType};
use crate::rules::DerivedSignals;

pub const CHART_SYSTEM_PREAMBLE: &str = "You are an expert nursing documentation \
specialist. Generate a comprehensive, compliant nursing chart based on the \
following information. Use clear, objective clinical language suitable for \
legal and regulatory review.";

const NOT_SPECIFIED: &str = "Not specified";

/// Render the full generation prompt for one request.
pub fn build_chart_prompt(
    input: &ClinicalInput,
    signals: &DerivedSignals,
    tool: ToolType,
) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(CHART_SYSTEM_PREAMBLE);
    prompt.push_str("\n\n");

    if let Some(focus) = tool_focus(tool) {
        prompt.push_str(focus);
        prompt.push_str("\n\n");
    }

    push_patient_block(&mut prompt, input);
    push_vitals_block(&mut prompt, input);
    push_assessment_block(&mut prompt, input);
    push_interventions_block(&mut prompt, input);

    prompt.push_str("ADDITIONAL OBSERVATIONS:\n");
    prompt.push_str(input.observations.as_deref().unwrap_or("None provided"));
    prompt.push_str("\n\n");

    push_signals_block(&mut prompt, signals);

    prompt.push_str(&format!("CHART TYPE: {}\n\n", tool.as_str().to_uppercase()));

    prompt.push_str(
        "Generate a professional nursing chart with these sections:\n\
         1. NURSING ASSESSMENT - comprehensive patient assessment following nursing standards\n\
         2. NURSING DIAGNOSIS - evidence-based nursing diagnoses\n\
         3. NURSING INTERVENTIONS - specific, measurable interventions\n\
         4. EVALUATION - expected outcomes and evaluation criteria\n\
         5. DOCUMENTATION - proper nursing documentation format\n\
         6. COMPLIANCE NOTES - regulatory compliance considerations\n\n\
         Respond with a single JSON object and nothing else, using exactly this structure:\n\
         {\n\
           \"nursingAssessment\": \"...\",\n\
           \"nursingDiagnosis\": [\"...\"],\n\
           \"nursingInterventions\": [\"...\"],\n\
           \"evaluation\": \"...\",\n\
           \"documentation\": \"...\",\n\
           \"complianceNotes\": \"...\",\n\
           \"chartSummary\": \"...\"\n\
         }\n",
    );

    prompt
}

/// Focus block for the five automation tools. Documentation chart types
/// carry no extra preamble.
fn tool_focus(tool: ToolType) -> Option<&'static str> {
    match tool {
        ToolType::Medication => Some(
            "FOCUS: medication administration. Verify the six rights (patient, \
             drug, dose, route, time, documentation), address every listed \
             interaction warning, and emphasize patient safety.",
        ),
        ToolType::Monitoring => Some(
            "FOCUS: patient monitoring. Analyze vital sign trends, reference the \
             early warning score, and emphasize early detection of deterioration.",
        ),
        ToolType::Coordination => Some(
            "FOCUS: care coordination. Emphasize team communication, care plan \
             alignment, and pending task management across disciplines.",
        ),
        ToolType::Education => Some(
            "FOCUS: patient education. Write teaching content at a 6th-8th grade \
             reading level, include teach-back confirmation, and cover warning \
             signs that warrant a call.",
        ),
        ToolType::Operational => Some(
            "FOCUS: operational workflow. Emphasize resource use, workflow \
             efficiency, and clear handoffs.",
        ),
        _ => None,
    }
}

fn push_patient_block(prompt: &mut String, input: &ClinicalInput) {
    let p = &input.patient_info;
    prompt.push_str("PATIENT INFORMATION:\n");
    prompt.push_str(&format!("- Name: {}\n", p.name));
    prompt.push_str(&format!("- Age: {}\n", p.age));
    prompt.push_str(&format!("- Gender: {}\n", p.gender.as_str()));
    prompt.push_str(&format!(
        "- Room: {}\n",
        p.room_number.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
    prompt.push_str(&format!(
        "- Admission Date: {}\n",
        p.admission_date.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
    prompt.push_str(&format!(
        "- Primary Diagnosis: {}\n\n",
        p.diagnosis.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
}

fn push_vitals_block(prompt: &mut String, input: &ClinicalInput) {
    let v = &input.vital_signs;
    prompt.push_str("VITAL SIGNS:\n");
    if !v.is_documented() {
        prompt.push_str("Not provided\n\n");
        return;
    }
    if let Some(temp) = v.temperature {
        prompt.push_str(&format!("- Temperature: {temp:.1} F\n"));
    }
    if let Some(bp) = &v.blood_pressure {
        prompt.push_str(&format!("- Blood Pressure: {bp}\n"));
    }
    if let Some(hr) = v.heart_rate {
        prompt.push_str(&format!("- Heart Rate: {hr} bpm\n"));
    }
    if let Some(rr) = v.respiratory_rate {
        prompt.push_str(&format!("- Respiratory Rate: {rr}/min\n"));
    }
    if let Some(spo2) = v.oxygen_saturation {
        prompt.push_str(&format!("- Oxygen Saturation: {spo2:.0}%\n"));
    }
    if let Some(pain) = v.pain_level {
        prompt.push_str(&format!("- Pain Level: {pain}/10\n"));
    }
    prompt.push('\n');
}

fn push_assessment_block(prompt: &mut String, input: &ClinicalInput) {
    let a = &input.assessment;
    prompt.push_str("ASSESSMENT:\n");
    prompt.push_str(&format!("- Chief Complaint: {}\n", a.chief_complaint));
    prompt.push_str(&format!(
        "- Symptoms: {}\n",
        if a.symptoms.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            a.symptoms.join(", ")
        }
    ));
    prompt.push_str(&format!(
        "- Physical Findings: {}\n",
        a.physical_findings.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
    prompt.push_str(&format!(
        "- Mental Status: {}\n",
        a.mental_status.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
    prompt.push_str(&format!(
        "- Mobility: {}\n",
        a.mobility.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
    prompt.push_str(&format!(
        "- Skin Condition: {}\n\n",
        a.skin_condition.as_deref().unwrap_or(NOT_SPECIFIED)
    ));
}

fn push_interventions_block(prompt: &mut String, input: &ClinicalInput) {
    let i = &input.interventions;
    prompt.push_str("INTERVENTIONS:\n");
    if i.is_empty() {
        prompt.push_str("Not specified\n\n");
        return;
    }
    push_list_line(prompt, "Medications", &i.medications);
    push_list_line(prompt, "Treatments", &i.treatments);
    push_list_line(prompt, "Procedures", &i.procedures);
    push_list_line(prompt, "Education", &i.education);
    prompt.push('\n');
}

fn push_list_line(prompt: &mut String, label: &str, items: &[String]) {
    if !items.is_empty() {
        prompt.push_str(&format!("- {label}: {}\n", items.join(", ")));
    }
}

fn push_signals_block(prompt: &mut String, signals: &DerivedSignals) {
    prompt.push_str("DERIVED CLINICAL SIGNALS:\n");
    for alert in &signals.alerts {
        prompt.push_str(&format!(
            "- Alert ({}): {}\n",
            alert.severity.as_str(),
            alert.message
        ));
    }
    prompt.push_str(&format!(
        "- Early Warning Score: {}/{} ({} risk)\n",
        signals.early_warning.score,
        signals.early_warning.max_score,
        signals.early_warning.risk.as_str()
    ));
    for warning in &signals.interactions {
        prompt.push_str(&format!("- Drug Interaction: {}\n", warning.recommendation));
    }
    for risk in &signals.risk_factors {
        prompt.push_str(&format!("- Risk Factor: {} ({})\n", risk.factor, risk.concern));
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    fn input(pain: Option<u8>) -> ClinicalInput {
        serde_json::from_value(serde_json::json!({
            "patientInfo": {"name": "Jane Doe", "age": 65, "gender": "female"},
            "vitalSigns": {"painLevel": pain},
            "assessment": {"chiefComplaint": "severe abdominal pain"}
        }))
        .unwrap()
    }

    async fn prompt_for(pain: Option<u8>, tool: ToolType) -> String {
        let input = input(pain);
        let signals = rules::derive_signals(&input).await;
        build_chart_prompt(&input, &signals, tool)
    }

    #[tokio::test]
    async fn prompt_embeds_patient_fields_and_fallbacks() {
        let prompt = prompt_for(Some(9), ToolType::Assessment).await;
        assert!(prompt.contains("- Name: Jane Doe"));
        assert!(prompt.contains("- Age: 65"));
        assert!(prompt.contains("- Room: Not specified"));
        assert!(prompt.contains("- Pain Level: 9/10"));
    }

    #[tokio::test]
    async fn prompt_embeds_derived_signals() {
        let prompt = prompt_for(Some(9), ToolType::Assessment).await;
        assert!(prompt.contains("Alert (critical)"));
        assert!(prompt.contains("Early Warning Score: 3/20"));
    }

    #[tokio::test]
    async fn prompt_demands_json_object() {
        let prompt = prompt_for(None, ToolType::Assessment).await;
        assert!(prompt.contains("single JSON object"));
        assert!(prompt.contains("\"nursingAssessment\""));
        assert!(prompt.contains("\"chartSummary\""));
    }

    #[tokio::test]
    async fn medication_tool_gets_six_rights_focus() {
        let prompt = prompt_for(None, ToolType::Medication).await;
        assert!(prompt.contains("six rights"));
        assert!(prompt.contains("CHART TYPE: MEDICATION"));
    }

    #[tokio::test]
    async fn documentation_tools_get_no_focus_block() {
        let prompt = prompt_for(None, ToolType::Admission).await;
        assert!(!prompt.contains("FOCUS:"));
    }

    #[tokio::test]
    async fn missing_vitals_render_not_provided() {
        let prompt = prompt_for(None, ToolType::Assessment).await;
        assert!(prompt.contains("VITAL SIGNS:\nNot provided"));
    }
}
