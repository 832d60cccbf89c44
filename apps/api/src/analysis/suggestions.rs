//! Local, rule-based suggestions. Deterministic and infallible; used as-is
//! when augmentation is unavailable.

use crate::analysis::signals::{normalize_text, ExtractedSignals};
use crate::analysis::vocabulary::PRIORITY_SKILLS;

/// Job match below this asks the candidate to tailor the resume.
const TAILORING_THRESHOLD: f64 = 0.4;

const METRIC_MARKERS: &[&str] = &["improv", "improve"];

/// Applies the rules in fixed order; each contributes at most one suggestion.
pub fn local_suggestions(
    resume_text: &str,
    signals: &ExtractedSignals,
    job_match_score: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !signals.has_contact() {
        suggestions.push("Add contact information (email and/or phone) near the top.".to_string());
    }

    if signals.experience_years == 0 {
        suggestions.push(
            "Clarify your work dates or total years of experience (e.g., '3 years experience')."
                .to_string(),
        );
    }

    let found: Vec<String> = signals
        .skills_found
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let missing: Vec<&str> = PRIORITY_SKILLS
        .iter()
        .copied()
        .filter(|s| !found.iter().any(|f| f == s))
        .collect();
    if !missing.is_empty() {
        suggestions.push(format!(
            "Consider explicitly listing key skills: {} (if you have them).",
            missing.join(", ")
        ));
    }

    let normalized = normalize_text(resume_text);
    if !METRIC_MARKERS.iter().any(|m| normalized.contains(m)) {
        suggestions.push("Use metrics in bullet points (e.g., 'Reduced load time by 30%').".to_string());
    }

    if job_match_score < TAILORING_THRESHOLD {
        suggestions.push(
            "Tailor the resume to the job: include keywords from the job description and highlight relevant projects."
                .to_string(),
        );
    }

    suggestions
}
