//! HTTP surface of the extraction core: resume parsing and upload, manual and
//! scraped job profiles. Handlers only unpack requests; all logic lives in the
//! sibling modules.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::document::extract_document_text;
use crate::extraction::job::{
    build_manual_job_profile, build_scraped_job_profile, ManualJobInput, ScrapedJobFields,
};
use crate::extraction::resume::{parse_resume, validate_resume, ResumeValidation};
use crate::models::job::JobProfile;
use crate::models::resume::ResumeProfile;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ResumeTextRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ResumeResponse {
    pub profile: ResumeProfile,
    pub validation: ResumeValidation,
    /// Human-readable form of `validation.warnings`.
    pub warning_messages: Vec<String>,
}

#[derive(Serialize)]
pub struct JobResponse {
    pub job: JobProfile,
}

fn resume_response(text: &str) -> Result<ResumeResponse, AppError> {
    let profile = parse_resume(text)?;
    let validation = validate_resume(&profile);
    let warning_messages = validation.warnings.iter().map(ToString::to_string).collect();
    info!(
        "Parsed resume for {} ({} chars, {} warnings)",
        profile.name,
        profile.text_length,
        validation.warnings.len()
    );
    Ok(ResumeResponse {
        profile,
        validation,
        warning_messages,
    })
}

/// POST /api/v1/resume/parse
pub async fn handle_parse_resume(
    Json(req): Json<ResumeTextRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    Ok(Json(resume_response(&req.text)?))
}

/// POST /api/v1/resume/upload
///
/// Multipart form with a single `file` field holding a PDF or plain-text resume.
pub async fn handle_upload_resume(
    mut multipart: Multipart,
) -> Result<Json<ResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read uploaded file: {e}")))?;

        info!(
            "Received resume upload {} ({} bytes)",
            file_name.as_deref().unwrap_or("<unnamed>"),
            bytes.len()
        );
        let text = run_blocking(move || {
            extract_document_text(file_name.as_deref(), content_type.as_deref(), &bytes)
        })
        .await??;
        return Ok(Json(resume_response(&text)?));
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// Runs CPU-bound decoding off the async workers. A panic inside the task
/// (pdf-extract can panic on malformed files) becomes an internal error.
async fn run_blocking<T, F>(task: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let result = tokio::task::spawn_blocking(task)
        .await
        .context("document extraction task failed")?;
    Ok(result)
}

/// POST /api/v1/jobs/manual
pub async fn handle_manual_job(
    State(state): State<AppState>,
    Json(input): Json<ManualJobInput>,
) -> Result<Json<JobResponse>, AppError> {
    let job = build_manual_job_profile(&input, &state.resolver).await?;
    Ok(Json(JobResponse { job }))
}

/// POST /api/v1/jobs/scraped
///
/// Accepts the per-field output of an external page scraper.
pub async fn handle_scraped_job(
    State(state): State<AppState>,
    Json(fields): Json<ScrapedJobFields>,
) -> Result<Json<JobResponse>, AppError> {
    let job = build_scraped_job_profile(&fields, &state.resolver).await?;
    Ok(Json(JobResponse { job }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn test_run_blocking_returns_value() {
        let value = run_blocking(|| 40 + 2).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_panicking_task_is_internal_error() {
        let err = run_blocking(|| -> usize { panic!("malformed xref table") })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
