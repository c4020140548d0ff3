//! Request pipeline: validate, route, enrich, generate, parse, render.
//!
//! One `ChartWorkflow` is built at process start around the generation
//! client handle and shared by reference across requests. Each run is
//! self-contained; failures are scoped to the request that triggered
//! them and nothing is retried.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::generation::{parser, prompt, ChartGenerator, GenerationError};
use crate::models::{
    ClinicalInput, GeneratedReport, InputSummary, ToolType, ValidationError,
};
use crate::rules::{self, DerivedSignals};
use crate::{render, routing, templates};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("chart generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Everything one request produces.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub report: GeneratedReport,
    pub signals: DerivedSignals,
    pub rendered: String,
    /// Handoff note, attached to shift charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbar: Option<String>,
}

/// The chart generation pipeline.
pub struct ChartWorkflow {
    generator: Arc<dyn ChartGenerator>,
    timeout: Duration,
}

impl ChartWorkflow {
    pub fn new(generator: Arc<dyn ChartGenerator>, timeout_secs: u64) -> Self {
        Self {
            generator,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Validate a submission without generating anything.
    /// Returns the tool the request would route to.
    pub fn validate(&self, raw: ClinicalInput) -> Result<ToolType, ValidationError> {
        let input = raw.normalize();
        input.validate()?;
        let tool = routing::route(&input);
        templates::validate_required(&input, tool)?;
        Ok(tool)
    }

    /// Run the full pipeline for one submission.
    pub async fn run(&self, raw: ClinicalInput) -> Result<ChartBundle, WorkflowError> {
        let started = Instant::now();

        let input = raw.normalize();
        input.validate()?;

        let tool = routing::route(&input);
        templates::validate_required(&input, tool)?;

        let signals = rules::derive_signals(&input).await;

        let prompt = prompt::build_chart_prompt(&input, &signals, tool);
        let text = self.generate_with_deadline(&prompt).await?;
        let (sections, parse_confidence) = parser::parse_chart_response(&text);

        let generated_at = Utc::now();
        let report = GeneratedReport {
            chart_id: Uuid::new_v4(),
            generated_at,
            tool_type: tool,
            input_summary: InputSummary {
                patient_name: input.patient_info.name.clone(),
                chart_type: tool,
                chief_complaint: input.assessment.chief_complaint.clone(),
                timestamp: generated_at,
            },
            sections,
            parse_confidence,
        };

        let rendered = render::render_report(&report, &signals);
        let sbar = (tool == ToolType::Shift).then(|| render::sbar_handoff(&input, &signals));

        tracing::info!(
            chart_id = %report.chart_id,
            tool = %tool,
            confidence = parse_confidence.as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "chart generated"
        );

        Ok(ChartBundle {
            report,
            signals,
            rendered,
            sbar,
        })
    }

    /// Probe upstream connectivity with the configured client.
    pub async fn probe(&self) -> Result<(), GenerationError> {
        self.generator.probe().await
    }

    /// Whether the underlying client has credentials.
    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    /// Issue the generation call under the request deadline. The client
    /// carries its own transport timeout; this guard bounds the whole
    /// call so a request can never hang past the deadline.
    async fn generate_with_deadline(&self, prompt: &str) -> Result<String, GenerationError> {
        match tokio::time::timeout(self.timeout, self.generator.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(self.timeout.as_secs())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::MockGenerator;
    use crate::models::ParseConfidence;
    use crate::rules::AlertSeverity;

    fn workflow_with(generator: MockGenerator) -> ChartWorkflow {
        ChartWorkflow::new(Arc::new(generator), 5)
    }

    fn jane_doe() -> ClinicalInput {
        serde_json::from_value(serde_json::json!({
            "patientInfo": {"name": "jane doe", "age": 65, "gender": "female"},
            "vitalSigns": {"painLevel": 9},
            "assessment": {"chiefComplaint": "severe abdominal pain"}
        }))
        .unwrap()
    }

    fn structured_chart() -> &'static str {
        r#"{
            "nursingAssessment": "Alert, guarding abdomen",
            "nursingDiagnosis": ["Acute Pain"],
            "nursingInterventions": ["Administer analgesia"],
            "evaluation": "Reassess in 1 hour",
            "documentation": "Charted 0800",
            "complianceNotes": "Standards met",
            "chartSummary": "65F, severe abdominal pain"
        }"#
    }

    #[tokio::test]
    async fn full_pipeline_produces_structured_bundle() {
        let workflow = workflow_with(MockGenerator::new(structured_chart()));
        let bundle = workflow.run(jane_doe()).await.unwrap();

        assert_eq!(bundle.report.tool_type, ToolType::Assessment);
        assert_eq!(bundle.report.parse_confidence, ParseConfidence::Structured);
        assert_eq!(bundle.report.input_summary.patient_name, "Jane Doe");
        assert_eq!(bundle.signals.alerts[0].severity, AlertSeverity::Critical);
        assert!(bundle.rendered.contains("CHARTWRIGHT NURSING CHART"));
        assert!(bundle.sbar.is_none());
    }

    #[tokio::test]
    async fn shift_chart_carries_sbar_note() {
        let mut input = jane_doe();
        input.chart_type = Some(ToolType::Shift);
        let workflow = workflow_with(MockGenerator::new(structured_chart()));
        let bundle = workflow.run(input).await.unwrap();
        let sbar = bundle.sbar.unwrap();
        assert!(sbar.contains("S: Jane Doe"));
    }

    #[tokio::test]
    async fn missing_required_section_is_rejected_before_generation() {
        let mut input = jane_doe();
        input.chart_type = Some(ToolType::Medication);
        // Failing generator proves the upstream call never happens.
        let workflow = workflow_with(MockGenerator::failing("should not be called"));
        let err = workflow.run(input).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Validation(ValidationError::MissingField { .. })
        ));
    }

    #[tokio::test]
    async fn generation_failure_surfaces_upstream_message() {
        let workflow = workflow_with(MockGenerator::failing("model overloaded"));
        let err = workflow.run(jane_doe()).await.unwrap_err();
        assert!(err.to_string().contains("model overloaded"));
    }

    #[tokio::test]
    async fn explicit_tag_routes_verbatim_despite_keywords() {
        let mut input = jane_doe();
        input.assessment.symptoms = vec!["needs medication review".into()];
        input.chart_type = Some(ToolType::Monitoring);
        input.vital_signs.heart_rate = Some(72);
        let workflow = workflow_with(MockGenerator::new(structured_chart()));
        let bundle = workflow.run(input).await.unwrap();
        assert_eq!(bundle.report.tool_type, ToolType::Monitoring);
    }

    #[tokio::test]
    async fn unstructured_response_degrades_with_visible_confidence() {
        let workflow = workflow_with(MockGenerator::new("Patient resting comfortably."));
        let bundle = workflow.run(jane_doe()).await.unwrap();
        assert_eq!(
            bundle.report.parse_confidence,
            ParseConfidence::Unstructured
        );
        assert_eq!(
            bundle.report.sections.nursing_assessment,
            "Patient resting comfortably."
        );
    }

    #[test]
    fn validate_reports_routed_tool() {
        let workflow = workflow_with(MockGenerator::new(""));
        let tool = workflow.validate(jane_doe()).unwrap();
        assert_eq!(tool, ToolType::Assessment);
    }

    #[tokio::test]
    async fn minimal_round_trip_does_not_panic_and_renders_fallbacks() {
        let minimal: ClinicalInput = serde_json::from_value(serde_json::json!({
            "patientInfo": {"name": "a b", "age": 30, "gender": "other"},
            "assessment": {"chiefComplaint": "headache"}
        }))
        .unwrap();
        let workflow = workflow_with(MockGenerator::new("NURSING ASSESSMENT:\nStable."));
        let bundle = workflow.run(minimal).await.unwrap();
        assert_eq!(bundle.report.parse_confidence, ParseConfidence::Markers);
        assert!(bundle.rendered.contains("Patient: A B"));
    }
}
