use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::intake::IntakeError;
use crate::analysis::report::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Intake(#[from] IntakeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Analysis failures keep the flat `{"error": "..."}` shape of a report.
            AppError::Analysis(e) => {
                let body = Json(json!({ "error": e.to_string() }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::Intake(e @ IntakeError::UnsupportedUpload(_)) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_UPLOAD",
                e.to_string(),
            ),
            AppError::Intake(e) => {
                tracing::warn!("Rejected resume intake: {e}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_input_maps_to_flat_error_body() {
        let response = AppError::from(AnalysisError::EmptyInput).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Empty resume text provided." })
        );
    }

    #[tokio::test]
    async fn test_unsupported_upload_maps_to_bad_request() {
        let err = IntakeError::UnsupportedUpload("resume.pdf".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_UPLOAD");
    }
}
