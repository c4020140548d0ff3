//! Closed sets used across the service.

use serde::{Deserialize, Serialize};

/// The ten tool categories a request can resolve to.
///
/// The first five are documentation chart types; the rest are automation
/// tools with their own enrichment focus. An explicit tag outside this
/// set fails deserialization and is rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Admission,
    Shift,
    Incident,
    Discharge,
    Assessment,
    Medication,
    Monitoring,
    Coordination,
    Education,
    Operational,
}

impl ToolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admission => "admission",
            Self::Shift => "shift",
            Self::Incident => "incident",
            Self::Discharge => "discharge",
            Self::Assessment => "assessment",
            Self::Medication => "medication",
            Self::Monitoring => "monitoring",
            Self::Coordination => "coordination",
            Self::Education => "education",
            Self::Operational => "operational",
        }
    }

    /// Human-readable tool name for report headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admission => "Admission Assessment",
            Self::Shift => "Shift Assessment",
            Self::Incident => "Incident Report",
            Self::Discharge => "Discharge Planning",
            Self::Assessment => "General Assessment",
            Self::Medication => "Medication Management",
            Self::Monitoring => "Patient Monitoring",
            Self::Coordination => "Care Coordination",
            Self::Education => "Patient Education",
            Self::Operational => "Operational Workflows",
        }
    }

    /// Whether this tool produces one of the five documentation charts
    /// (as opposed to an automation report).
    pub fn is_documentation(&self) -> bool {
        matches!(
            self,
            Self::Admission | Self::Shift | Self::Incident | Self::Discharge | Self::Assessment
        )
    }

    /// All tool types: the documentation chart types, then the
    /// automation tools.
    pub fn all() -> &'static [ToolType] {
        &[
            Self::Admission,
            Self::Shift,
            Self::Incident,
            Self::Discharge,
            Self::Assessment,
            Self::Medication,
            Self::Monitoring,
            Self::Coordination,
            Self::Education,
            Self::Operational,
        ]
    }
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient gender as collected on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer not to say",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_type_round_trips_lowercase() {
        let json = serde_json::to_string(&ToolType::Medication).unwrap();
        assert_eq!(json, "\"medication\"");
        let back: ToolType = serde_json::from_str("\"admission\"").unwrap();
        assert_eq!(back, ToolType::Admission);
    }

    #[test]
    fn unknown_tool_tag_is_rejected() {
        let result: Result<ToolType, _> = serde_json::from_str("\"telepathy\"");
        assert!(result.is_err());
    }

    #[test]
    fn documentation_tools_are_the_five_chart_types() {
        let docs: Vec<_> = ToolType::all()
            .iter()
            .filter(|t| t.is_documentation())
            .collect();
        assert_eq!(docs.len(), 5);
        assert!(!ToolType::Medication.is_documentation());
    }

    #[test]
    fn gender_accepts_spaced_variant() {
        let g: Gender = serde_json::from_str("\"prefer not to say\"").unwrap();
        assert_eq!(g, Gender::PreferNotToSay);
    }
}
