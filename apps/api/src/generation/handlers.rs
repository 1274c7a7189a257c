//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{
    generate_application_materials, GenerationRequest, GenerationResult,
};
use crate::state::AppState;

/// POST /api/v1/applications/generate
///
/// Writes the cover letter and outreach email for an already-extracted resume
/// and job profile.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    if request.job.job_title.trim().is_empty() || request.job.company.trim().is_empty() {
        return Err(AppError::Validation(
            "job.job_title and job.company cannot be empty".to_string(),
        ));
    }

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::stage_failed(
            "generation",
            "no LLM API key configured; set ANTHROPIC_API_KEY to enable generation",
        )
    })?;

    let result = generate_application_materials(llm, &request, &state.config.generation).await?;
    Ok(Json(result))
}
