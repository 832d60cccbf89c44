//! Resume intake — turns a form field and an optional uploaded file into the
//! single text string the analyzer consumes. Upload policy lives here.

use bytes::Bytes;
use thiserror::Error;

/// Only plain-text uploads are accepted.
const ACCEPTED_EXTENSION: &str = ".txt";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Only plain .txt files are accepted for upload (got '{0}').")]
    UnsupportedUpload(String),

    #[error("Malformed multipart form: {0}")]
    Multipart(String),
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content: Bytes,
}

/// Rejects anything whose name does not end in `.txt` (case-insensitive).
pub fn validate_upload(file_name: &str) -> Result<(), IntakeError> {
    if file_name.to_lowercase().ends_with(ACCEPTED_EXTENSION) {
        Ok(())
    } else {
        Err(IntakeError::UnsupportedUpload(file_name.to_string()))
    }
}

/// Joins the trimmed form text and the upload with a blank line.
///
/// Invalid UTF-8 in the upload is replaced, never fatal. An upload without a
/// file name is treated as no upload. The result may be empty; the analyzer
/// reports that case.
pub fn combine_resume_text(
    form_text: &str,
    upload: Option<&UploadedFile>,
) -> Result<String, IntakeError> {
    let form_text = form_text.trim();

    let upload = match upload {
        Some(file) if !file.file_name.is_empty() => file,
        _ => return Ok(form_text.to_string()),
    };
    validate_upload(&upload.file_name)?;

    let content = String::from_utf8_lossy(&upload.content);
    if form_text.is_empty() {
        Ok(content.into_owned())
    } else {
        Ok(format!("{form_text}\n\n{content}").trim().to_string())
    }
}

/// Splits a comma-separated keyword field into a list.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
