//! Axum route handlers for the JD parser API.

use anyhow::Context;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jd::metadata::{extract_salary_range, SalaryRange};
use crate::jd::{
    description_to_sections, parse_full_jd, parse_full_jd_with, sections_to_description,
    ParseOptions, ParsedJD, Sections,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseJdRequest {
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SectionsPayload {
    pub sections: Sections,
}

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SalaryRequest {
    pub text: String,
}

/// Runs the parser on the blocking pool so large pastes never stall the runtime.
pub(crate) async fn parse_off_runtime(
    raw_text: String,
    options: ParseOptions,
) -> Result<ParsedJD, AppError> {
    let parsed = tokio::task::spawn_blocking(move || {
        if options == ParseOptions::default() {
            parse_full_jd(&raw_text)
        } else {
            parse_full_jd_with(&raw_text, options)
        }
    })
    .await
    .context("JD parser task failed")?;
    Ok(parsed)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jd/parse
///
/// Parses a pasted job description. Empty text yields an empty result, not an error.
pub async fn handle_parse_jd(
    State(state): State<AppState>,
    Json(request): Json<ParseJdRequest>,
) -> Result<Json<ParsedJD>, AppError> {
    let parsed = parse_off_runtime(request.raw_text, state.parse_options()).await?;

    info!(
        "JD parsed: {} sections, {} questions",
        parsed.sections.filled_count(),
        parsed.questions.len()
    );
    Ok(Json(parsed))
}

/// POST /api/v1/jd/sections
pub async fn handle_description_to_sections(
    Json(request): Json<DescriptionRequest>,
) -> Json<SectionsPayload> {
    Json(SectionsPayload {
        sections: description_to_sections(&request.description),
    })
}

/// POST /api/v1/jd/description
pub async fn handle_sections_to_description(
    Json(request): Json<SectionsPayload>,
) -> Json<DescriptionResponse> {
    Json(DescriptionResponse {
        description: sections_to_description(&request.sections),
    })
}

/// POST /api/v1/jd/salary
///
/// Previews how a salary string will be read.
pub async fn handle_extract_salary(Json(request): Json<SalaryRequest>) -> Json<SalaryRange> {
    Json(extract_salary_range(&request.text))
}
