//! Job match — share of a target job's keywords that the resume mentions.

use crate::analysis::signals::{contains_whole_word, normalize_text};
use crate::analysis::vocabulary::JobKeywordProfile;

/// Fraction of profile keywords present (whole-word, case-insensitive),
/// rounded to 2 decimal places. An empty profile scores 0.
pub fn score_job_match(text: &str, profile: &JobKeywordProfile) -> f64 {
    let normalized = normalize_text(text);
    let matched = profile
        .keywords()
        .iter()
        .filter(|kw| contains_whole_word(&normalized, kw))
        .count();
    let total = profile.len().max(1);
    round_to_hundredths(matched as f64 / total as f64)
}

/// Rounds half-to-even at the second decimal place.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
