//! Signal types produced by the rules engine.

use serde::{Deserialize, Serialize};

/// Severity determines how an alert is surfaced and rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Informational: routine monitoring is sufficient.
    Info,
    /// Warning: monitor and manage, no immediate escalation.
    Warning,
    /// Urgent: symptom pattern that needs physician awareness.
    Urgent,
    /// Critical: immediate intervention required.
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Urgent => "urgent",
            Self::Critical => "critical",
        }
    }

    /// Bracketed tag used by the plain-text renderer.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Info => "[INFO]",
            Self::Warning => "[WARNING]",
            Self::Urgent => "[URGENT]",
            Self::Critical => "[CRITICAL]",
        }
    }
}

/// A clinical alert with its recommended nursing action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
    pub action: String,
}

/// Risk label derived from the early-warning score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Early-warning score with its documented ceiling and risk label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EwsScore {
    pub score: u8,
    pub max_score: u8,
    pub risk: RiskLevel,
}

/// A matched entry from the drug-interaction reference table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionWarning {
    /// The medication as charted that matched the reference drug.
    pub first: String,
    /// The medication as charted that matched a known interactant.
    pub second: String,
    pub severity: AlertSeverity,
    pub recommendation: String,
}

/// An identified patient risk factor and its clinical concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskFactor {
    pub factor: String,
    pub concern: String,
}

/// Static regulatory verification block attached to every chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheck {
    pub hipaa: bool,
    pub joint_commission: bool,
    pub cms: bool,
}

impl ComplianceCheck {
    pub fn verified() -> Self {
        Self {
            hipaa: true,
            joint_commission: true,
            cms: true,
        }
    }
}

/// Everything the rules engine derives from one `ClinicalInput`.
/// A pure function of the input; discarded after the response is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSignals {
    pub alerts: Vec<Alert>,
    pub early_warning: EwsScore,
    pub diagnoses: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<RiskFactor>,
    pub interactions: Vec<InteractionWarning>,
    pub compliance: ComplianceCheck,
}
