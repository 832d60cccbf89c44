// Prompt constants for resume augmentation.

use crate::augmentation::AugmentationRequest;

/// Characters of resume text included in the prompt.
pub const RESUME_EXCERPT_CHARS: usize = 3000;

pub const AUGMENT_SYSTEM: &str = "You are a helpful assistant that provides concise, \
    actionable resume suggestions and rewrites in JSON.";

/// Augmentation prompt template. Placeholders are replaced by `build_prompt`.
pub const AUGMENT_PROMPT_TEMPLATE: &str = r#"You will return a JSON object only. Do not add extra commentary.

Context:
Resume excerpt (first 3000 chars): """{resume_excerpt}"""
Detected emails: {emails}
Detected phones: {phones}
Detected skills: {skills}
Estimated years of experience: {experience}
Job match percentage (approx): {job_match}%

Task:
1) Provide an array `suggestions` with up to 6 short, actionable items to improve the resume (one sentence each).
2) Provide an array `rewrites` containing up to 5 improved bullet points based on the resume excerpt. Each rewrite should be a single short sentence demonstrating strong impact, including numbers/metrics if possible. If the resume excerpt lacks metrics, produce suggested metrics in brackets like [e.g., reduced X by 20%] so the user can replace them with real numbers.
3) Provide a short `summary` sentence (one line) that captures the main strengths and one weakness to fix.
Return strictly valid JSON, for example:
{"suggestions": ["...","..."], "rewrites": ["..."], "summary": "..." }
"#;

/// Fills the template from the analysis signals.
pub fn build_prompt(request: &AugmentationRequest<'_>) -> String {
    let excerpt: String = request.resume_text.chars().take(RESUME_EXCERPT_CHARS).collect();
    let signals = request.signals;

    AUGMENT_PROMPT_TEMPLATE
        .replace("{emails}", &join_or(signals.emails.iter(), "None"))
        .replace("{phones}", &join_or(signals.phones.iter(), "None"))
        .replace("{skills}", &join_or(signals.skills_found.iter(), "None detected"))
        .replace("{experience}", &signals.experience_years.to_string())
        .replace("{job_match}", &job_match_percent(request.job_match_score).to_string())
        // Last, so placeholder-like text inside the resume is left alone.
        .replace("{resume_excerpt}", &excerpt)
}

fn join_or<'a>(items: impl Iterator<Item = &'a String>, empty: &str) -> String {
    let joined = items.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}

fn job_match_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::signals::ExtractedSignals;

    fn request<'a>(text: &'a str, signals: &'a ExtractedSignals, score: f64) -> AugmentationRequest<'a> {
        AugmentationRequest {
            resume_text: text,
            signals,
            job_match_score: score,
        }
    }

    #[test]
    fn test_prompt_lists_signals() {
        let mut signals = ExtractedSignals {
            skills_found: vec!["postgresql".to_string(), "python".to_string()],
            experience_years: 4,
            ..Default::default()
        };
        signals.emails.insert("jane@example.com".to_string());

        let prompt = build_prompt(&request("Backend engineer", &signals, 0.63));
        assert!(prompt.contains("Detected emails: jane@example.com"));
        assert!(prompt.contains("Detected phones: None"));
        assert!(prompt.contains("Detected skills: postgresql, python"));
        assert!(prompt.contains("Estimated years of experience: 4"));
        assert!(prompt.contains("Job match percentage (approx): 63%"));
        assert!(prompt.contains(r#""""Backend engineer""""#));
    }

    #[test]
    fn test_prompt_marks_missing_skills() {
        let signals = ExtractedSignals::default();
        let prompt = build_prompt(&request("text", &signals, 0.0));
        assert!(prompt.contains("Detected skills: None detected"));
        assert!(prompt.contains("Detected emails: None"));
    }

    #[test]
    fn test_excerpt_truncated_by_characters() {
        let text = "é".repeat(RESUME_EXCERPT_CHARS + 50);
        let signals = ExtractedSignals::default();
        let prompt = build_prompt(&request(&text, &signals, 0.0));
        assert!(prompt.contains(&"é".repeat(RESUME_EXCERPT_CHARS)));
        assert!(!prompt.contains(&"é".repeat(RESUME_EXCERPT_CHARS + 1)));
    }

    #[test]
    fn test_resume_placeholders_not_expanded() {
        let signals = ExtractedSignals::default();
        let prompt = build_prompt(&request("my {skills} are great", &signals, 0.0));
        assert!(prompt.contains("my {skills} are great"));
    }

    #[test]
    fn test_prompt_requests_json_fields() {
        let signals = ExtractedSignals::default();
        let prompt = build_prompt(&request("x", &signals, 0.0));
        assert!(prompt.contains("JSON object only"));
        assert!(prompt.contains("`suggestions`"));
        assert!(prompt.contains("`rewrites`"));
        assert!(prompt.contains("`summary`"));
        assert!(prompt.contains("[e.g., reduced X by 20%]"));
    }
}
