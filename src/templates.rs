//! Chart template catalog and required-field enforcement.
//!
//! A static mapping from tool type to display metadata and the sections
//! a submission must carry. Missing required sections are a hard
//! rejection, checked before any enrichment or generation work.

use serde::Serialize;

use crate::models::{ClinicalInput, ToolType, ValidationError};

/// Input sections a template can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldRequirement {
    PatientInfo,
    Assessment,
    VitalSigns,
    Medications,
}

impl FieldRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PatientInfo => "patientInfo",
            Self::Assessment => "assessment",
            Self::VitalSigns => "vitalSigns",
            Self::Medications => "interventions.medications",
        }
    }

    /// Whether the submission satisfies this requirement.
    fn satisfied_by(&self, input: &ClinicalInput) -> bool {
        match self {
            Self::PatientInfo => !input.patient_info.name.trim().is_empty(),
            Self::Assessment => !input.assessment.chief_complaint.trim().is_empty(),
            Self::VitalSigns => input.vital_signs.is_documented(),
            Self::Medications => !input.interventions.medications.is_empty(),
        }
    }
}

/// Catalog entry for one tool type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTemplate {
    pub tool: ToolType,
    pub name: &'static str,
    pub description: &'static str,
    pub required_fields: &'static [FieldRequirement],
    pub optional_fields: &'static [&'static str],
}

use self::FieldRequirement as F;

/// The full template catalog, one entry per tool type.
const CATALOG: &[ChartTemplate] = &[
    ChartTemplate {
        tool: ToolType::Admission,
        name: "Admission Assessment",
        description: "Comprehensive admission assessment and initial care plan",
        required_fields: &[F::PatientInfo, F::Assessment, F::VitalSigns],
        optional_fields: &["interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Shift,
        name: "Shift Assessment",
        description: "Ongoing patient assessment and care documentation",
        required_fields: &[F::PatientInfo, F::Assessment],
        optional_fields: &["vitalSigns", "interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Incident,
        name: "Incident Report",
        description: "Documentation of patient incidents or unusual events",
        required_fields: &[F::PatientInfo, F::Assessment],
        optional_fields: &["vitalSigns", "interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Discharge,
        name: "Discharge Planning",
        description: "Patient discharge assessment and care instructions",
        required_fields: &[F::PatientInfo, F::Assessment],
        optional_fields: &["interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Assessment,
        name: "General Assessment",
        description: "General patient assessment and care documentation",
        required_fields: &[F::Assessment],
        optional_fields: &["vitalSigns", "interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Medication,
        name: "Medication Management",
        description: "Medication administration with safety verification",
        required_fields: &[F::PatientInfo, F::Medications],
        optional_fields: &["vitalSigns", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Monitoring,
        name: "Patient Monitoring",
        description: "Vital signs analysis with early-warning scoring",
        required_fields: &[F::PatientInfo, F::VitalSigns],
        optional_fields: &["interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Coordination,
        name: "Care Coordination",
        description: "Multi-disciplinary team communication and task tracking",
        required_fields: &[F::PatientInfo],
        optional_fields: &["assessment", "interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Education,
        name: "Patient Education",
        description: "Personalized patient teaching documentation",
        required_fields: &[F::PatientInfo],
        optional_fields: &["assessment", "interventions", "observations"],
    },
    ChartTemplate {
        tool: ToolType::Operational,
        name: "Operational Workflows",
        description: "Unit resource and workflow documentation",
        required_fields: &[],
        optional_fields: &["patientInfo", "assessment", "observations"],
    },
];

/// The whole catalog.
pub fn catalog() -> &'static [ChartTemplate] {
    CATALOG
}

/// Catalog entry for one tool.
pub fn template_for(tool: ToolType) -> &'static ChartTemplate {
    CATALOG
        .iter()
        .find(|t| t.tool == tool)
        .expect("catalog covers every tool type")
}

/// Enforce the template's required sections. The first missing section
/// is reported; the request never reaches enrichment or generation.
pub fn validate_required(input: &ClinicalInput, tool: ToolType) -> Result<(), ValidationError> {
    for requirement in template_for(tool).required_fields {
        if !requirement.satisfied_by(input) {
            return Err(ValidationError::MissingField {
                tool,
                field: requirement.as_str(),
            });
        }
    }
    Ok(())
}

/// Documentation guidelines, grouped by topic.
#[derive(Debug, Clone, Serialize)]
pub struct Guidelines {
    pub general: &'static [&'static str],
    pub assessment: &'static [&'static str],
    pub interventions: &'static [&'static str],
    pub compliance: &'static [&'static str],
}

/// The static charting guidelines served by the API.
pub fn guidelines() -> Guidelines {
    Guidelines {
        general: &[
            "Use clear, concise, and objective language",
            "Document all observations, interventions, and patient responses",
            "Include timestamps for all entries",
            "Use standard medical terminology",
            "Avoid abbreviations that are not universally recognized",
        ],
        assessment: &[
            "Document comprehensive physical assessment findings",
            "Include patient's chief complaint and history",
            "Note any changes in condition since last assessment",
            "Document patient's response to previous interventions",
            "Include family/caregiver input when relevant",
        ],
        interventions: &[
            "Document all nursing interventions performed",
            "Include rationale for interventions",
            "Note patient's response to interventions",
            "Document any modifications to care plan",
            "Include patient education provided",
        ],
        compliance: &[
            "Ensure documentation meets regulatory requirements",
            "Follow facility-specific documentation standards",
            "Maintain patient confidentiality",
            "Use proper charting format and structure",
            "Include all required elements for legal protection",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ClinicalInput {
        serde_json::from_value(serde_json::json!({
            "patientInfo": {"name": "Jane Doe", "age": 65, "gender": "female"},
            "assessment": {"chiefComplaint": "severe abdominal pain"}
        }))
        .unwrap()
    }

    #[test]
    fn catalog_covers_every_tool_type() {
        for tool in ToolType::all() {
            assert_eq!(template_for(*tool).tool, *tool);
        }
        assert_eq!(catalog().len(), ToolType::all().len());
    }

    #[test]
    fn documentation_chart_types_all_present() {
        let docs: Vec<_> = catalog().iter().filter(|t| t.tool.is_documentation()).collect();
        assert_eq!(docs.len(), 5);
    }

    #[test]
    fn admission_without_vitals_is_rejected() {
        let err = validate_required(&minimal(), ToolType::Admission).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                tool: ToolType::Admission,
                field: "vitalSigns",
            }
        );
    }

    #[test]
    fn admission_with_vitals_passes() {
        let mut input = minimal();
        input.vital_signs.pain_level = Some(2);
        assert!(validate_required(&input, ToolType::Admission).is_ok());
    }

    #[test]
    fn medication_without_medications_is_rejected() {
        let err = validate_required(&minimal(), ToolType::Medication).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField { field, .. } if field == "interventions.medications"
        ));
    }

    #[test]
    fn operational_requires_nothing() {
        assert!(validate_required(&minimal(), ToolType::Operational).is_ok());
    }

    #[test]
    fn shift_passes_on_minimal_input() {
        assert!(validate_required(&minimal(), ToolType::Shift).is_ok());
    }

    #[test]
    fn guidelines_have_all_four_groups() {
        let g = guidelines();
        assert_eq!(g.general.len(), 5);
        assert_eq!(g.assessment.len(), 5);
        assert_eq!(g.interventions.len(), 5);
        assert_eq!(g.compliance.len(), 5);
    }

    #[test]
    fn templates_serialize_with_camel_case_requirements() {
        let json = serde_json::to_value(template_for(ToolType::Admission)).unwrap();
        assert_eq!(json["requiredFields"][0], "patientInfo");
        assert_eq!(json["name"], "Admission Assessment");
    }
}
