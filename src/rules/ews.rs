//! Early-warning score.
//!
//! Simplified composite: pain and heart-rate deviations accumulate
//! independently, so both can contribute at once. The score is clamped
//! to the documented ceiling of 20.

use crate::models::VitalSigns;

use super::types::{EwsScore, RiskLevel};

/// Documented maximum score.
pub const MAX_SCORE: u8 = 20;

/// Score at or above which risk is High.
const HIGH_RISK_AT: u8 = 7;
/// Score at or above which risk is Medium.
const MEDIUM_RISK_AT: u8 = 5;

/// Compute the early-warning score from charted vitals.
/// Missing vitals contribute nothing.
pub fn early_warning_score(vitals: &VitalSigns) -> EwsScore {
    let mut score: u8 = 0;

    if let Some(pain) = vitals.pain_level {
        if pain > 7 {
            score += 3;
        } else if pain > 4 {
            score += 1;
        }
    }

    if let Some(rate) = vitals.heart_rate {
        if !(50..=110).contains(&rate) {
            score += 2;
        } else if !(60..=100).contains(&rate) {
            score += 1;
        }
    }

    let score = score.min(MAX_SCORE);

    EwsScore {
        score,
        max_score: MAX_SCORE,
        risk: risk_level(score),
    }
}

fn risk_level(score: u8) -> RiskLevel {
    if score >= HIGH_RISK_AT {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_AT {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
