pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::jd::handlers as jd;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_jd_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // JD parser
        .route("/api/v1/jd/parse", post(jd::handle_parse_jd))
        .route("/api/v1/jd/sections", post(jd::handle_description_to_sections))
        .route(
            "/api/v1/jd/description",
            post(jd::handle_sections_to_description),
        )
        .route("/api/v1/jd/salary", post(jd::handle_extract_salary))
        // Job draft editor
        .route("/api/v1/jobs/draft", post(jobs::handle_load_draft))
        .route("/api/v1/jobs/draft/merge", post(jobs::handle_merge_draft))
        .route(
            "/api/v1/jobs/draft/finalize",
            post(jobs::handle_finalize_draft),
        )
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
}
