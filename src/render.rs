//! Plain-text report rendering.
//!
//! Purely presentational: fixed banner, metadata block, the derived
//! signal summary, then the chart sections in fixed order. Sections with
//! no content are omitted entirely, header included. Also builds the
//! SBAR handoff note attached to shift charts.

use crate::models::{ClinicalInput, GeneratedReport};
use crate::rules::DerivedSignals;

const LINE_WIDTH: usize = 60;

/// Render the final plain-text document for one generated chart.
pub fn render_report(report: &GeneratedReport, signals: &DerivedSignals) -> String {
    let mut out = String::with_capacity(2048);
    let sections = &report.sections;

    push_banner(&mut out);
    out.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("Chart ID: {}\n", report.chart_id));
    out.push_str(&format!(
        "Chart Type: {}\n",
        report.tool_type.as_str().to_uppercase()
    ));
    out.push_str(&format!("Patient: {}\n", report.input_summary.patient_name));
    out.push_str(&format!("{}\n", "=".repeat(LINE_WIDTH)));

    push_signals(&mut out, signals);

    push_prose_section(&mut out, "NURSING ASSESSMENT", &sections.nursing_assessment);
    push_list_section(&mut out, "NURSING DIAGNOSIS", &sections.nursing_diagnosis);
    push_list_section(
        &mut out,
        "NURSING INTERVENTIONS",
        &sections.nursing_interventions,
    );
    push_prose_section(&mut out, "EVALUATION", &sections.evaluation);
    push_prose_section(&mut out, "DOCUMENTATION", &sections.documentation);
    push_prose_section(&mut out, "COMPLIANCE NOTES", &sections.compliance_notes);
    push_prose_section(&mut out, "CHART SUMMARY", &sections.chart_summary);

    out
}

fn push_banner(out: &mut String) {
    out.push_str(&format!("{}\n", "\u{2550}".repeat(LINE_WIDTH)));
    out.push_str(" CHARTWRIGHT NURSING CHART\n");
    out.push_str(&format!("{}\n", "\u{2550}".repeat(LINE_WIDTH)));
}

/// Box-drawing section header.
fn section_header(title: &str) -> String {
    let fill = LINE_WIDTH.saturating_sub(title.len() + 4);
    format!("\u{250c}\u{2500} {title} {}\n", "\u{2500}".repeat(fill))
}

fn push_prose_section(out: &mut String, title: &str, content: &str) {
    if content.trim().is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(&section_header(title));
    out.push_str(content.trim());
    out.push('\n');
}

fn push_list_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(&section_header(title));
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {item}\n", index + 1));
    }
}

/// Alert and score block between the metadata and the chart body.
/// Plain lines, not a titled section: a chart with no generated
/// sections still shows its alerts without any section header.
fn push_signals(out: &mut String, signals: &DerivedSignals) {
    out.push_str("Alerts:\n");
    for alert in &signals.alerts {
        out.push_str(&format!("{} {}\n", alert.severity.tag(), alert.message));
        out.push_str(&format!("  Action: {}\n", alert.action));
    }
    out.push_str(&format!(
        "Early Warning Score: {}/{} ({} risk)\n",
        signals.early_warning.score,
        signals.early_warning.max_score,
        signals.early_warning.risk.as_str()
    ));
    for warning in &signals.interactions {
        out.push_str(&format!("[INTERACTION] {}\n", warning.recommendation));
    }
}

/// Build an SBAR handoff note from the input and derived signals.
pub fn sbar_handoff(input: &ClinicalInput, signals: &DerivedSignals) -> String {
    let patient = &input.patient_info;
    let mut out = String::new();

    out.push_str(&section_header("SBAR HANDOFF"));

    out.push_str(&format!(
        "S: {} ({}, {}) presents with {}.\n",
        patient.name,
        patient.age,
        patient.gender.as_str(),
        input.assessment.chief_complaint
    ));

    out.push_str(&format!(
        "B: Primary diagnosis: {}. Admitted: {}.\n",
        patient.diagnosis.as_deref().unwrap_or("Not documented"),
        patient.admission_date.as_deref().unwrap_or("Not documented")
    ));

    let assessment_line = signals
        .alerts
        .first()
        .map(|alert| format!("{} {}", alert.severity.tag(), alert.message))
        .unwrap_or_else(|| "No alerts on file".to_string());
    out.push_str(&format!(
        "A: {}. Early warning score {}/{} ({} risk).\n",
        assessment_line,
        signals.early_warning.score,
        signals.early_warning.max_score,
        signals.early_warning.risk.as_str()
    ));

    let recommendation = signals
        .recommendations
        .first()
        .map(String::as_str)
        .unwrap_or("Continue current care plan");
    out.push_str(&format!("R: {recommendation}.\n"));

    out
}
