//! Drug-interaction reference data and pairwise checking.
//!
//! A fixed table of known interaction pairs, matched by case-insensitive
//! substring so "Warfarin 5mg PO daily" still hits "warfarin". Not a
//! pharmacology database; the table covers the interactions the charting
//! workflow warns about.

use super::messages::MessageTemplates;
use super::types::{AlertSeverity, InteractionWarning};

/// Reference drug paired with its known interactants.
const INTERACTION_TABLE: &[(&str, &[&str])] = &[
    ("warfarin", &["aspirin", "ibuprofen", "naproxen"]),
    ("lisinopril", &["potassium", "spironolactone"]),
    ("metformin", &["alcohol", "contrast dye"]),
];

/// Check every pair of charted medications against the reference table.
/// Each matching pair yields one moderate-severity warning.
pub fn check_interactions(medications: &[String]) -> Vec<InteractionWarning> {
    let mut warnings = Vec::new();

    for (i, first) in medications.iter().enumerate() {
        for second in &medications[i + 1..] {
            if let Some(warning) = find_interaction(first, second) {
                warnings.push(warning);
            }
        }
    }

    warnings
}

/// Match one medication pair against the table, in either order.
fn find_interaction(first: &str, second: &str) -> Option<InteractionWarning> {
    let a = first.to_lowercase();
    let b = second.to_lowercase();

    for (drug, interactants) in INTERACTION_TABLE {
        let pair = if a.contains(drug) && interactants.iter().any(|i| b.contains(i)) {
            Some((first, second))
        } else if b.contains(drug) && interactants.iter().any(|i| a.contains(i)) {
            Some((second, first))
        } else {
            None
        };

        if let Some((trigger, interactant)) = pair {
            return Some(InteractionWarning {
                first: trigger.to_string(),
                second: interactant.to_string(),
                severity: AlertSeverity::Warning,
                recommendation: MessageTemplates::interaction(trigger, interactant),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meds(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_and_single_lists_have_no_warnings() {
        assert!(check_interactions(&[]).is_empty());
        assert!(check_interactions(&meds(&["Warfarin 5mg"])).is_empty());
    }

    #[test]
    fn warfarin_aspirin_pair_is_flagged() {
        let warnings = check_interactions(&meds(&["Warfarin 5mg PO daily", "Aspirin 81mg"]));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, AlertSeverity::Warning);
        assert!(warnings[0].recommendation.contains("Monitor closely"));
    }

    #[test]
    fn match_is_order_independent() {
        let warnings = check_interactions(&meds(&["Aspirin 81mg", "Warfarin 5mg"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].first.contains("Warfarin"));
    }

    #[test]
    fn unrelated_medications_pass() {
        let warnings = check_interactions(&meds(&["Acetaminophen 500mg", "Omeprazole 20mg"]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn multiple_pairs_all_reported() {
        let warnings = check_interactions(&meds(&[
            "Warfarin",
            "Ibuprofen 400mg",
            "Lisinopril 10mg",
            "Spironolactone 25mg",
        ]));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn lisinopril_potassium_is_flagged() {
        let warnings = check_interactions(&meds(&["Lisinopril", "Potassium chloride"]));
        assert_eq!(warnings.len(), 1);
    }
}
