//! Outbound chart types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ToolType;

/// The named text sections of a generated chart.
///
/// Field names mirror the JSON object the generation prompt asks for, so
/// a structured upstream response deserializes directly into this.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSections {
    #[serde(default)]
    pub nursing_assessment: String,
    #[serde(default)]
    pub nursing_diagnosis: Vec<String>,
    #[serde(default)]
    pub nursing_interventions: Vec<String>,
    #[serde(default)]
    pub evaluation: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub compliance_notes: String,
    #[serde(default)]
    pub chart_summary: String,
}

/// How much structure survived response parsing.
///
/// `Structured` means the upstream emitted the requested JSON object.
/// `Markers` means we fell back to section-header splitting. `Unstructured`
/// means neither worked and the raw text was carried as the assessment.
/// Degradation is surfaced here rather than silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseConfidence {
    Structured,
    Markers,
    Unstructured,
}

impl ParseConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Markers => "markers",
            Self::Unstructured => "unstructured",
        }
    }
}

/// Compact echo of what the chart was generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSummary {
    pub patient_name: String,
    pub chart_type: ToolType,
    pub chief_complaint: String,
    pub timestamp: DateTime<Utc>,
}

/// One generated chart. Produced once per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub chart_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub tool_type: ToolType,
    pub input_summary: InputSummary,
    pub sections: ChartSections,
    pub parse_confidence: ParseConfidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_deserialize_from_camel_case() {
        let sections: ChartSections = serde_json::from_value(serde_json::json!({
            "nursingAssessment": "Alert and oriented",
            "nursingDiagnosis": ["Acute Pain"],
            "nursingInterventions": ["Reassess in 1 hour"],
            "evaluation": "Improving",
            "documentation": "Charted at 0800",
            "complianceNotes": "Standards met",
            "chartSummary": "Stable"
        }))
        .unwrap();
        assert_eq!(sections.nursing_diagnosis, vec!["Acute Pain"]);
        assert_eq!(sections.chart_summary, "Stable");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let sections: ChartSections = serde_json::from_value(serde_json::json!({
            "nursingAssessment": "Only this"
        }))
        .unwrap();
        assert!(sections.nursing_diagnosis.is_empty());
        assert_eq!(sections.evaluation, "");
    }

    #[test]
    fn parse_confidence_serializes_snake_case() {
        let json = serde_json::to_string(&ParseConfidence::Unstructured).unwrap();
        assert_eq!(json, "\"unstructured\"");
    }
}
