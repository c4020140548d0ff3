//! Intent/tool routing.
//!
//! An explicit `chartType` tag wins outright (the tag has already been
//! validated against the closed set at deserialization). Otherwise the
//! whole record is serialized, lowercased, and tested against an ordered
//! list of keyword groups; the first group that matches decides, with
//! `assessment` as the terminal default. Routing never fails.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ClinicalInput, ToolType};

/// Keyword groups in match-priority order. Declaration order is the
/// tie-break: the first matching group wins, so broader groups earlier in
/// the list shadow later ones by design.
const INTENT_PATTERNS: &[(ToolType, &str)] = &[
    (ToolType::Medication, r"medic|drug|pill|dose|admin|rx"),
    (ToolType::Monitoring, r"vital|monitor|trend|track|alert|warning"),
    (ToolType::Coordination, r"team|coordin|physician|therapy|social|consult"),
    (ToolType::Education, r"teach|educat|explain|instruct|learn|underst"),
    (ToolType::Operational, r"bed|transfer|admit|discharge|resource|staff"),
    (ToolType::Incident, r"incident|fall|error|event|accident"),
    (ToolType::Admission, r"admit|new patient|initial|intake"),
    (ToolType::Discharge, r"discharge|leaving|home|release"),
];

fn compiled_patterns() -> &'static Vec<(ToolType, Regex)> {
    static PATTERNS: OnceLock<Vec<(ToolType, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        INTENT_PATTERNS
            .iter()
            .map(|(tool, pattern)| {
                let regex = Regex::new(pattern).expect("intent pattern is valid");
                (*tool, regex)
            })
            .collect()
    })
}

/// Resolve the tool for one request.
pub fn route(input: &ClinicalInput) -> ToolType {
    if let Some(tag) = input.chart_type {
        return tag;
    }
    classify_text(&flatten(input))
}

/// Flatten the record to lowercase text for keyword analysis.
///
/// Only string values are collected. Field names are excluded so that
/// structural keys like `medications` or `education` cannot satisfy a
/// keyword group on every request.
fn flatten(input: &ClinicalInput) -> String {
    let value = serde_json::to_value(input).unwrap_or_default();
    let mut text = String::new();
    collect_strings(&value, &mut text);
    text.make_ascii_lowercase();
    text
}

fn collect_strings(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::String(s) => {
            out.push_str(s);
            out.push(' ');
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        serde_json::Value::Object(map) => {
            for item in map.values() {
                collect_strings(item, out);
            }
        }
        _ => {}
    }
}

/// First-match classification over the ordered keyword groups.
pub fn classify_text(text: &str) -> ToolType {
    for (tool, regex) in compiled_patterns() {
        if regex.is_match(text) {
            return *tool;
        }
    }
    ToolType::Assessment
}
