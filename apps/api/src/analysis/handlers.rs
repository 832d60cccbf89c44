//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::intake::{combine_resume_text, parse_keyword_list, IntakeError, UploadedFile};
use crate::analysis::report::{analyze, Report};
use crate::analysis::vocabulary::JobKeywordProfile;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    /// Replaces the default job profile for this analysis.
    pub job_keywords: Option<Vec<String>>,
}

/// Fields collected from the multipart upload form.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume_text: String,
    resume_file: Option<UploadedFile>,
    job_keywords: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Analyzes resume text sent as JSON.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Report>, AppError> {
    let profile = resolve_profile(request.job_keywords);
    let report = analyze(&request.resume_text, &profile, state.augmenter.as_ref()).await?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `resume_text`, optional `resume_file` (.txt only), optional
/// comma-separated `job_keywords`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Report>, AppError> {
    let form = read_form(multipart).await?;
    let text = combine_resume_text(&form.resume_text, form.resume_file.as_ref())?;
    let profile = resolve_profile(form.job_keywords);
    let report = analyze(&text, &profile, state.augmenter.as_ref()).await?;
    Ok(Json(report))
}

/// Missing, empty, or all-blank keyword lists keep the default profile.
fn resolve_profile(job_keywords: Option<Vec<String>>) -> JobKeywordProfile {
    job_keywords
        .map(JobKeywordProfile::from_keywords)
        .filter(|profile| !profile.is_empty())
        .unwrap_or_default()
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, IntakeError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| IntakeError::Multipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume_text" => {
                form.resume_text = field
                    .text()
                    .await
                    .map_err(|e| IntakeError::Multipart(e.to_string()))?;
            }
            "resume_file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| IntakeError::Multipart(e.to_string()))?;
                form.resume_file = Some(UploadedFile { file_name, content });
            }
            "job_keywords" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| IntakeError::Multipart(e.to_string()))?;
                form.job_keywords = Some(parse_keyword_list(&raw));
            }
            _ => {}
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_keywords_keep_default_profile() {
        assert_eq!(resolve_profile(None), JobKeywordProfile::default());
        assert_eq!(resolve_profile(Some(vec![])), JobKeywordProfile::default());
        assert_eq!(
            resolve_profile(Some(vec!["  ".to_string()])),
            JobKeywordProfile::default()
        );
    }

    #[test]
    fn test_supplied_keywords_replace_default_profile() {
        let profile = resolve_profile(Some(vec!["rust".to_string()]));
        assert_eq!(profile.keywords(), &["rust".to_string()]);
    }
}
