//! Typed clinical intake record and its normalization.
//!
//! Every optional field is an explicit `Option` or defaulted list; the
//! wire format is the camelCase form the intake client submits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enums::{Gender, ToolType};

/// One nursing-assessment form submission. Built per request, normalized
/// once, then read-only for the rest of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalInput {
    pub patient_info: PatientInfo,
    #[serde(default)]
    pub vital_signs: VitalSigns,
    pub assessment: Assessment,
    #[serde(default)]
    pub interventions: Interventions,
    #[serde(default)]
    pub observations: Option<String>,
    /// Explicit tool selection. `None` means the router classifies by
    /// keyword analysis.
    #[serde(default)]
    pub chart_type: Option<ToolType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    pub name: String,
    pub age: u16,
    pub gender: Gender,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub admission_date: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    /// Degrees Fahrenheit.
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Systolic/diastolic as charted, e.g. "120/80".
    #[serde(default)]
    pub blood_pressure: Option<String>,
    /// Beats per minute.
    #[serde(default)]
    pub heart_rate: Option<u16>,
    /// Breaths per minute.
    #[serde(default)]
    pub respiratory_rate: Option<u16>,
    /// Percent saturation.
    #[serde(default)]
    pub oxygen_saturation: Option<f32>,
    /// Self-reported 0-10 scale.
    #[serde(default)]
    pub pain_level: Option<u8>,
}

impl VitalSigns {
    /// True when at least one vital has been charted.
    pub fn is_documented(&self) -> bool {
        self.temperature.is_some()
            || self.blood_pressure.is_some()
            || self.heart_rate.is_some()
            || self.respiratory_rate.is_some()
            || self.oxygen_saturation.is_some()
            || self.pain_level.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub chief_complaint: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub physical_findings: Option<String>,
    #[serde(default)]
    pub mental_status: Option<String>,
    #[serde(default)]
    pub mobility: Option<String>,
    #[serde(default)]
    pub skin_condition: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interventions {
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub treatments: Vec<String>,
    #[serde(default)]
    pub procedures: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
}

impl Interventions {
    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
            && self.treatments.is_empty()
            && self.procedures.is_empty()
            && self.education.is_empty()
    }
}

/// Rejected before any downstream processing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field missing for {tool} chart: {field}")]
    MissingField {
        tool: ToolType,
        field: &'static str,
    },
    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("patient name is required")]
    EmptyName,
    #[error("chief complaint is required")]
    EmptyChiefComplaint,
}

impl ClinicalInput {
    /// Standardize the record: title-case the name, trim free text,
    /// collapse blank optionals to `None`, and drop empty list entries.
    pub fn normalize(mut self) -> Self {
        self.patient_info.name = title_case(&self.patient_info.name);
        self.patient_info.room_number = clean_opt(self.patient_info.room_number);
        self.patient_info.admission_date = clean_opt(self.patient_info.admission_date);
        self.patient_info.diagnosis = clean_opt(self.patient_info.diagnosis);

        self.vital_signs.blood_pressure = clean_opt(self.vital_signs.blood_pressure);

        self.assessment.chief_complaint = self.assessment.chief_complaint.trim().to_string();
        self.assessment.symptoms = clean_list(self.assessment.symptoms);
        self.assessment.physical_findings = clean_opt(self.assessment.physical_findings);
        self.assessment.mental_status = clean_opt(self.assessment.mental_status);
        self.assessment.mobility = clean_opt(self.assessment.mobility);
        self.assessment.skin_condition = clean_opt(self.assessment.skin_condition);

        self.interventions.medications = clean_list(self.interventions.medications);
        self.interventions.treatments = clean_list(self.interventions.treatments);
        self.interventions.procedures = clean_list(self.interventions.procedures);
        self.interventions.education = clean_list(self.interventions.education);

        self.observations = clean_opt(self.observations);
        self
    }

    /// Range and presence checks that apply to every chart type.
    /// Template-specific required fields are checked separately once the
    /// tool type is known.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.patient_info.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.assessment.chief_complaint.trim().is_empty() {
            return Err(ValidationError::EmptyChiefComplaint);
        }
        if self.patient_info.age > 150 {
            return Err(ValidationError::OutOfRange {
                field: "patientInfo.age",
                value: self.patient_info.age.to_string(),
                expected: "0-150",
            });
        }
        if let Some(pain) = self.vital_signs.pain_level {
            if pain > 10 {
                return Err(ValidationError::OutOfRange {
                    field: "vitalSigns.painLevel",
                    value: pain.to_string(),
                    expected: "0-10",
                });
            }
        }
        if let Some(spo2) = self.vital_signs.oxygen_saturation {
            if !(0.0..=100.0).contains(&spo2) {
                return Err(ValidationError::OutOfRange {
                    field: "vitalSigns.oxygenSaturation",
                    value: spo2.to_string(),
                    expected: "0-100",
                });
            }
        }
        Ok(())
    }
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
