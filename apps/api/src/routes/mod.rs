pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume extraction
        .route("/api/v1/resume/parse", post(extraction::handle_parse_resume))
        .route(
            "/api/v1/resume/upload",
            post(extraction::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Job extraction
        .route("/api/v1/jobs/manual", post(extraction::handle_manual_job))
        .route("/api/v1/jobs/scraped", post(extraction::handle_scraped_job))
        // Generation
        .route(
            "/api/v1/applications/generate",
            post(generation::handle_generate),
        )
        .with_state(state)
}
