use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// An external collaborator (scraper, document reader, generator) failed.
    /// The pipeline stops at `stage`.
    #[error("{stage} stage failed: {message}")]
    StageFailed {
        stage: &'static str,
        message: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn stage_failed(stage: &'static str, message: impl Into<String>) -> Self {
        AppError::StageFailed {
            stage,
            message: message.into(),
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::TextTooShort { .. }
            | ExtractionError::MissingField(_)
            | ExtractionError::InvalidListingUrl(_)
            | ExtractionError::UnsupportedDocument(_) => AppError::Validation(err.to_string()),
            ExtractionError::IncompleteScrape(message) => AppError::stage_failed("scrape", message),
            ExtractionError::DocumentRead(message) => AppError::stage_failed("document", message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "code": "VALIDATION_ERROR", "message": msg }),
            ),
            AppError::StageFailed { stage, message } => {
                tracing::warn!("Stage '{stage}' failed: {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "code": "STAGE_FAILED", "stage": stage, "message": message }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "code": "INTERNAL_ERROR",
                        "message": "An internal server error occurred"
                    }),
                )
            }
        };

        (status, Json(json!({ "error": body }))).into_response()
    }
}
