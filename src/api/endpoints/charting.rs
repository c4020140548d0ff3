//! Charting endpoints.
//!
//! - `POST /api/charting/generate`: run the full pipeline
//! - `POST /api/charting/validate`: validation-only dry run
//! - `GET  /api/charting/templates`: chart template catalog
//! - `GET  /api/charting/guidelines`: documentation guidelines
//! - `GET  /api/charting/test-connection`: upstream probe

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ClinicalInput, ToolType};
use crate::templates::{self, ChartTemplate, Guidelines};
use crate::workflow::ChartBundle;

/// Request envelope: `{"nurseInput": {...}}`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub nurse_input: ClinicalInput,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: ChartBundle,
}

/// `POST /api/charting/generate`: generate one chart.
pub async fn generate(
    State(ctx): State<ApiContext>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    // Patient initial only; full identifiers stay out of the audit trail.
    let patient_initial = request
        .nurse_input
        .patient_info
        .name
        .chars()
        .next()
        .unwrap_or('?');

    let bundle = ctx.workflow.run(request.nurse_input).await?;

    tracing::info!(
        target: "audit",
        event = "chart_generated",
        chart_id = %bundle.report.chart_id,
        chart_type = %bundle.report.tool_type,
        patient_initial = %patient_initial,
        "chart generated"
    );

    Ok(Json(GenerateResponse {
        success: true,
        data: bundle,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub success: bool,
    pub message: &'static str,
    pub tool_type: ToolType,
}

/// `POST /api/charting/validate`: dry-run validation.
pub async fn validate(
    State(ctx): State<ApiContext>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let tool = ctx.workflow.validate(request.nurse_input)?;
    Ok(Json(ValidateResponse {
        success: true,
        message: "Input validation passed",
        tool_type: tool,
    }))
}

#[derive(Serialize)]
pub struct TemplatesResponse {
    pub success: bool,
    pub data: &'static [ChartTemplate],
}

/// `GET /api/charting/templates`: the static template catalog.
pub async fn list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        success: true,
        data: templates::catalog(),
    })
}

#[derive(Serialize)]
pub struct GuidelinesResponse {
    pub success: bool,
    pub data: Guidelines,
}

/// `GET /api/charting/guidelines`: static documentation guidelines.
pub async fn list_guidelines() -> Json<GuidelinesResponse> {
    Json(GuidelinesResponse {
        success: true,
        data: templates::guidelines(),
    })
}

#[derive(Serialize)]
pub struct ConnectionResponse {
    pub success: bool,
    pub message: &'static str,
}

/// `GET /api/charting/test-connection`: probe the generation service.
pub async fn test_connection(
    State(ctx): State<ApiContext>,
) -> Result<Json<ConnectionResponse>, ApiError> {
    ctx.workflow.probe().await.map_err(ApiError::Generation)?;
    Ok(Json(ConnectionResponse {
        success: true,
        message: "Generation service connection successful",
    }))
}
