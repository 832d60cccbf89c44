//! Report assembly — runs the local pipeline, attempts augmentation, merges.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::analysis::completeness::missing_sections;
use crate::analysis::job_match::score_job_match;
use crate::analysis::scoring::{compute_composite_score, ScoringWeights};
use crate::analysis::signals::ExtractedSignals;
use crate::analysis::suggestions::local_suggestions;
use crate::analysis::vocabulary::{JobKeywordProfile, SKILL_VOCABULARY};
use crate::augmentation::{Augmentation, AugmentationProvider, AugmentationRequest};

/// Skills shown in the headline list.
pub const TOP_SKILLS_LIMIT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Empty resume text provided.")]
    EmptyInput,
}

/// Full assessment of one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub resume_text: String,
    #[serde(flatten)]
    pub signals: ExtractedSignals,
    pub job_match_score: f64,
    pub missing_sections: Vec<String>,
    pub suggestions: Vec<String>,
    pub rewrites: Vec<String>,
    pub summary: String,
    pub score: u32,
    pub top_skills: Vec<String>,
}

/// Analyzes `text` against `profile`, enriching through `augmenter` when it can.
pub async fn analyze(
    text: &str,
    profile: &JobKeywordProfile,
    augmenter: &dyn AugmentationProvider,
) -> Result<Report, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let analysis_id = Uuid::new_v4();
    let signals = ExtractedSignals::from_text(text, SKILL_VOCABULARY);
    let job_match_score = score_job_match(text, profile);
    let missing_sections = missing_sections(text);
    let local = local_suggestions(text, &signals, job_match_score);

    info!(
        %analysis_id,
        emails = signals.emails.len(),
        phones = signals.phones.len(),
        skills = signals.skills_found.len(),
        experience_years = signals.experience_years,
        job_match_score,
        "Extracted resume signals"
    );

    let augmentation = augmenter
        .augment(AugmentationRequest {
            resume_text: text,
            signals: &signals,
            job_match_score,
        })
        .await;

    let (suggestions, rewrites, summary) = match augmentation {
        Augmentation::Enriched(result) => (
            result.suggestions.unwrap_or(local),
            result.rewrites.unwrap_or_default(),
            result.summary.unwrap_or_default(),
        ),
        Augmentation::Unavailable => (local, Vec::new(), String::new()),
    };

    let score = compute_composite_score(
        &signals,
        SKILL_VOCABULARY.len(),
        job_match_score,
        &ScoringWeights::default(),
    );
    let top_skills = signals
        .skills_found
        .iter()
        .take(TOP_SKILLS_LIMIT)
        .cloned()
        .collect();

    info!(%analysis_id, score, backend = augmenter.backend(), "Resume analysis complete");

    Ok(Report {
        resume_text: text.to_string(),
        signals,
        job_match_score,
        missing_sections,
        suggestions,
        rewrites,
        summary,
        score,
        top_skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augmentation::{AugmentationResult, DisabledAugmenter};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE_RESUME: &str = "\
Jane Doe | jane.doe@example.com | +1 555-123-4567
Experience: Backend Engineer, Acme (2017 - 2023)
- Improved API latency by 35% with Redis caching
Skills: Python, Flask, Docker, REST API, PostgreSQL, SQLAlchemy, AWS, Git, Linux
Education: B.Sc. Computer Science
Projects: open-source task queue built on Celery";

    /// Returns a fixed outcome and counts calls.
    struct StubAugmenter {
        outcome: Augmentation,
        calls: AtomicUsize,
    }

    impl StubAugmenter {
        fn new(outcome: Augmentation) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AugmentationProvider for StubAugmenter {
        async fn augment(&self, _request: AugmentationRequest<'_>) -> Augmentation {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }

        fn backend(&self) -> &'static str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_empty_input_rejected_without_augmenting() {
        let stub = StubAugmenter::new(Augmentation::Unavailable);
        for text in ["", "   \n\t "] {
            let err = analyze(text, &JobKeywordProfile::default(), &stub)
                .await
                .unwrap_err();
            assert_eq!(err, AnalysisError::EmptyInput);
            assert_eq!(err.to_string(), "Empty resume text provided.");
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_augmentation_uses_local_suggestions() {
        let text = "Just a name and nothing else";
        let report = analyze(text, &JobKeywordProfile::default(), &DisabledAugmenter)
            .await
            .unwrap();

        let signals = ExtractedSignals::from_text(text, SKILL_VOCABULARY);
        assert_eq!(report.suggestions, local_suggestions(text, &signals, 0.0));
        assert!(report.rewrites.is_empty());
        assert!(report.summary.is_empty());
    }

    #[tokio::test]
    async fn test_sample_resume_report() {
        let report = analyze(SAMPLE_RESUME, &JobKeywordProfile::default(), &DisabledAugmenter)
            .await
            .unwrap();

        assert_eq!(report.job_match_score, 1.0);
        assert!(report.signals.emails.contains("jane.doe@example.com"));
        assert!(report.signals.phones.contains("+15551234567"));
        assert_eq!(report.signals.experience_years, 6);
        assert!(report.missing_sections.is_empty());
        assert!(report.suggestions.is_empty());
        for skill in ["python", "flask", "docker", "postgresql", "sqlalchemy", "aws", "git"] {
            assert!(report.signals.skills_found.contains(&skill.to_string()), "{skill}");
        }
        assert_eq!(report.top_skills.len(), TOP_SKILLS_LIMIT);
        assert_eq!(report.top_skills[..], report.signals.skills_found[..TOP_SKILLS_LIMIT]);
        assert!(report.score <= 100);
    }

    #[tokio::test]
    async fn test_default_profile_keywords_only() {
        let text = "python, flask, docker, rest api, postgresql, sqlalchemy, aws, git";
        let report = analyze(text, &JobKeywordProfile::default(), &DisabledAugmenter)
            .await
            .unwrap();
        assert_eq!(report.job_match_score, 1.0);
        for skill in ["python", "flask", "docker", "postgresql", "sqlalchemy", "aws", "git"] {
            assert!(report.signals.skills_found.contains(&skill.to_string()));
        }
    }

    #[tokio::test]
    async fn test_enriched_fields_replace_local() {
        let stub = StubAugmenter::new(Augmentation::Enriched(AugmentationResult {
            suggestions: Some(vec!["Lead with your strongest project".to_string()]),
            rewrites: Some(vec!["Cut deploy time by [e.g., 40%]".to_string()]),
            summary: Some("Broad stack; few metrics.".to_string()),
        }));
        let report = analyze("some resume", &JobKeywordProfile::default(), &stub)
            .await
            .unwrap();

        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.suggestions, vec!["Lead with your strongest project".to_string()]);
        assert_eq!(report.rewrites, vec!["Cut deploy time by [e.g., 40%]".to_string()]);
        assert_eq!(report.summary, "Broad stack; few metrics.");
    }

    #[tokio::test]
    async fn test_enriched_missing_suggestions_fall_back_to_local() {
        let stub = StubAugmenter::new(Augmentation::Enriched(AugmentationResult {
            summary: Some("Needs work.".to_string()),
            ..Default::default()
        }));
        let text = "some resume";
        let report = analyze(text, &JobKeywordProfile::default(), &stub)
            .await
            .unwrap();

        let signals = ExtractedSignals::from_text(text, SKILL_VOCABULARY);
        assert_eq!(report.suggestions, local_suggestions(text, &signals, 0.0));
        assert!(report.rewrites.is_empty());
        assert_eq!(report.summary, "Needs work.");
    }

    #[tokio::test]
    async fn test_custom_profile_changes_job_match() {
        let profile = JobKeywordProfile::from_keywords(["rust", "kubernetes"]);
        let report = analyze("Rust developer", &profile, &DisabledAugmenter)
            .await
            .unwrap();
        assert_eq!(report.job_match_score, 0.5);
    }

    #[tokio::test]
    async fn test_report_serializes_flat_field_names() {
        let report = analyze(SAMPLE_RESUME, &JobKeywordProfile::default(), &DisabledAugmenter)
            .await
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();
        for field in [
            "resume_text",
            "emails",
            "phones",
            "skills_found",
            "experience_years",
            "job_match_score",
            "missing_sections",
            "suggestions",
            "rewrites",
            "summary",
            "score",
            "top_skills",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert!(value.get("signals").is_none());
    }
}
