//! Chart response parsing.
//!
//! Best case the upstream honored the JSON contract and the first
//! object-shaped substring deserializes directly. Failing that, the raw
//! text is split on the fixed section-header markers the prompt asked
//! for. Either fallback is reported through `ParseConfidence` so a
//! degraded parse is visible to the caller instead of silently absorbed.

use serde::Deserialize;

use crate::models::{ChartSections, ParseConfidence};

/// Prose section reported when its marker is absent.
const NOT_FOUND: &str = "Not found";

/// Maximum summary length when synthesized from raw text.
const SUMMARY_LIMIT: usize = 500;

/// Section markers in document order.
const MARKERS: &[&str] = &[
    "NURSING ASSESSMENT",
    "NURSING DIAGNOSIS",
    "NURSING INTERVENTIONS",
    "EVALUATION",
    "DOCUMENTATION",
    "COMPLIANCE",
];

/// Parse one upstream response into chart sections.
pub fn parse_chart_response(text: &str) -> (ChartSections, ParseConfidence) {
    if let Some(sections) = parse_json_sections(text) {
        return (sections, ParseConfidence::Structured);
    }

    if MARKERS.iter().any(|m| text.contains(m)) {
        return (parse_marker_sections(text), ParseConfidence::Markers);
    }

    (unstructured_sections(text), ParseConfidence::Unstructured)
}

/// Try the first JSON-object-shaped substring.
fn parse_json_sections(text: &str) -> Option<ChartSections> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    let candidate = &text[start..=end];

    // Lenient shape: every field optional, list items that are not
    // strings are skipped rather than failing the whole parse.
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawSections {
        nursing_assessment: Option<String>,
        nursing_diagnosis: Option<Vec<serde_json::Value>>,
        nursing_interventions: Option<Vec<serde_json::Value>>,
        evaluation: Option<String>,
        documentation: Option<String>,
        compliance_notes: Option<String>,
        chart_summary: Option<String>,
    }

    let raw: RawSections = serde_json::from_str(candidate).ok()?;

    // An object with none of the expected fields is not a chart.
    let recognized = raw.nursing_assessment.is_some()
        || raw.nursing_diagnosis.is_some()
        || raw.nursing_interventions.is_some()
        || raw.evaluation.is_some()
        || raw.documentation.is_some()
        || raw.compliance_notes.is_some()
        || raw.chart_summary.is_some();
    if !recognized {
        return None;
    }

    Some(ChartSections {
        nursing_assessment: raw.nursing_assessment.unwrap_or_default(),
        nursing_diagnosis: string_items(raw.nursing_diagnosis),
        nursing_interventions: string_items(raw.nursing_interventions),
        evaluation: raw.evaluation.unwrap_or_default(),
        documentation: raw.documentation.unwrap_or_default(),
        compliance_notes: raw.compliance_notes.unwrap_or_default(),
        chart_summary: raw.chart_summary.unwrap_or_default(),
    })
}

fn string_items(items: Option<Vec<serde_json::Value>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Split the raw text on the fixed section-header markers.
fn parse_marker_sections(text: &str) -> ChartSections {
    ChartSections {
        nursing_assessment: extract_section(text, "NURSING ASSESSMENT", Some("NURSING DIAGNOSIS")),
        nursing_diagnosis: extract_list(text, "NURSING DIAGNOSIS", Some("NURSING INTERVENTIONS")),
        nursing_interventions: extract_list(text, "NURSING INTERVENTIONS", Some("EVALUATION")),
        evaluation: extract_section(text, "EVALUATION", Some("DOCUMENTATION")),
        documentation: extract_section(text, "DOCUMENTATION", Some("COMPLIANCE")),
        compliance_notes: extract_section(text, "COMPLIANCE", None),
        chart_summary: truncate_summary(text),
    }
}

/// Raw text carried as the assessment when no structure is recognizable.
fn unstructured_sections(text: &str) -> ChartSections {
    ChartSections {
        nursing_assessment: text.trim().to_string(),
        nursing_diagnosis: Vec::new(),
        nursing_interventions: Vec::new(),
        evaluation: NOT_FOUND.to_string(),
        documentation: NOT_FOUND.to_string(),
        compliance_notes: NOT_FOUND.to_string(),
        chart_summary: truncate_summary(text),
    }
}

/// Text between a start marker and the next marker (or end of text).
fn extract_section(text: &str, start_marker: &str, end_marker: Option<&str>) -> String {
    let Some(start) = text.find(start_marker) else {
        return NOT_FOUND.to_string();
    };
    let content_start = start + start_marker.len();

    let content_end = end_marker
        .and_then(|m| text[content_start..].find(m))
        .map(|offset| content_start + offset)
        .unwrap_or(text.len());

    text[content_start..content_end]
        .trim_matches(|c: char| c == ':' || c.is_whitespace())
        .to_string()
}

/// Section content split into list items: bullets stripped, separator
/// rules dropped.
fn extract_list(text: &str, start_marker: &str, end_marker: Option<&str>) -> Vec<String> {
    let section = extract_section(text, start_marker, end_marker);
    if section == NOT_FOUND {
        return Vec::new();
    }
    section
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.chars().all(|c| c == '-' || c == '='))
        .map(strip_list_prefix)
        .collect()
}

/// Remove a leading bullet or "1." style enumerator.
fn strip_list_prefix(line: &str) -> String {
    let trimmed = line.trim_start_matches(['-', '*']).trim_start();
    let trimmed = match trimmed.split_once('.') {
        Some((number, rest)) if number.chars().all(|c| c.is_ascii_digit()) && !number.is_empty() => {
            rest.trim_start()
        }
        _ => trimmed,
    };
    trimmed.to_string()
}

/// Char-boundary-safe truncation with ellipsis for long raw text.
fn truncate_summary(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= SUMMARY_LIMIT {
        return trimmed.to_string();
    }
    let truncated: String = trimmed.chars().take(SUMMARY_LIMIT).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured_response() -> String {
        r#"Here is the chart you requested:

{
  "nursingAssessment": "Alert and oriented x3, guarding abdomen",
  "nursingDiagnosis": ["Acute Pain related to appendicitis"],
  "nursingInterventions": ["Administer analgesia as ordered", "Reassess pain in 30 minutes"],
  "evaluation": "Pain reduced to 4/10 within 1 hour",
  "documentation": "Charted per protocol at 0815",
  "complianceNotes": "Meets Joint Commission standards",
  "chartSummary": "65F with acute abdominal pain, high pain score"
}

Let me know if you need anything else."#
            .to_string()
    }

    fn marker_response() -> String {
        "NURSING ASSESSMENT:\nAlert and oriented, abdomen tender.\n\n\
         NURSING DIAGNOSIS:\n- Acute Pain\n- Risk for Infection\n\n\
         NURSING INTERVENTIONS:\n1. Administer analgesia\n2. Monitor vitals q2h\n\n\
         EVALUATION:\nPain decreasing.\n\n\
         DOCUMENTATION:\nCharted at 0800.\n\n\
         COMPLIANCE:\nStandards met."
            .to_string()
    }

    #[test]
    fn json_response_parses_structured() {
        let (sections, confidence) = parse_chart_response(&structured_response());
        assert_eq!(confidence, ParseConfidence::Structured);
        assert!(sections.nursing_assessment.contains("Alert and oriented"));
        assert_eq!(sections.nursing_interventions.len(), 2);
        assert_eq!(sections.chart_summary, "65F with acute abdominal pain, high pain score");
    }

    #[test]
    fn marker_response_parses_with_fallback_confidence() {
        let (sections, confidence) = parse_chart_response(&marker_response());
        assert_eq!(confidence, ParseConfidence::Markers);
        assert_eq!(sections.nursing_assessment, "Alert and oriented, abdomen tender.");
        assert_eq!(
            sections.nursing_diagnosis,
            vec!["Acute Pain", "Risk for Infection"]
        );
        assert_eq!(
            sections.nursing_interventions,
            vec!["Administer analgesia", "Monitor vitals q2h"]
        );
        assert_eq!(sections.compliance_notes, "Standards met.");
    }

    #[test]
    fn missing_marker_reports_not_found_and_empty_lists() {
        let text = "NURSING ASSESSMENT:\nStable.\n\nEVALUATION:\nImproving.";
        let (sections, confidence) = parse_chart_response(text);
        assert_eq!(confidence, ParseConfidence::Markers);
        assert!(sections.nursing_diagnosis.is_empty());
        assert_eq!(sections.documentation, NOT_FOUND);
    }

    #[test]
    fn freeform_text_degrades_to_unstructured() {
        let text = "The patient is resting comfortably with no acute distress.";
        let (sections, confidence) = parse_chart_response(text);
        assert_eq!(confidence, ParseConfidence::Unstructured);
        assert_eq!(sections.nursing_assessment, text);
        assert_eq!(sections.evaluation, NOT_FOUND);
        assert!(sections.nursing_diagnosis.is_empty());
    }

    #[test]
    fn malformed_json_falls_back_to_markers() {
        let text = "{not json at all} NURSING ASSESSMENT: Stable.";
        let (sections, confidence) = parse_chart_response(text);
        assert_eq!(confidence, ParseConfidence::Markers);
        assert_eq!(sections.nursing_assessment, "Stable.");
    }

    #[test]
    fn non_string_list_items_are_skipped() {
        let text = r#"{"nursingDiagnosis": ["Acute Pain", 42, {"nested": true}]}"#;
        let (sections, confidence) = parse_chart_response(text);
        assert_eq!(confidence, ParseConfidence::Structured);
        assert_eq!(sections.nursing_diagnosis, vec!["Acute Pain"]);
    }

    #[test]
    fn long_raw_text_summary_is_truncated_with_ellipsis() {
        let text = "word ".repeat(200);
        let (sections, _) = parse_chart_response(&text);
        assert!(sections.chart_summary.ends_with("..."));
        assert_eq!(sections.chart_summary.chars().count(), SUMMARY_LIMIT + 3);
    }

    #[test]
    fn separator_rules_are_dropped_from_lists() {
        let text = "NURSING DIAGNOSIS:\n----\n- Acute Pain\n====\n\nEVALUATION:\nFine.";
        let (sections, _) = parse_chart_response(text);
        assert_eq!(sections.nursing_diagnosis, vec!["Acute Pain"]);
    }
}
