use serde::{Deserialize, Serialize};

use crate::analysis::signals::ExtractedSignals;

/// Years of experience at which the experience sub-score saturates.
const FULL_EXPERIENCE_YEARS: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub contact: f64,
    pub experience: f64,
    pub job_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            contact: 0.1,
            experience: 0.2,
            job_match: 0.2,
        }
    }
}

/// Composite 0–100 score: 0.5*skills + 0.1*contact + 0.2*experience + 0.2*job_match.
/// Each sub-score is clamped to [0, 1] before weighting.
pub fn compute_composite_score(
    signals: &ExtractedSignals,
    vocabulary_len: usize,
    job_match_score: f64,
    weights: &ScoringWeights,
) -> u32 {
    let skills = signals.skills_found.len() as f64 / vocabulary_len.max(1) as f64;
    let contact = if signals.has_contact() { 1.0 } else { 0.0 };
    let experience = f64::from(signals.experience_years) / FULL_EXPERIENCE_YEARS;

    let total = weights.skills * skills.clamp(0.0, 1.0)
        + weights.contact * contact
        + weights.experience * experience.clamp(0.0, 1.0)
        + weights.job_match * job_match_score.clamp(0.0, 1.0);

    (total * 100.0).round_ties_even().clamp(0.0, 100.0) as u32
}
