//! Axum route handlers for the job draft editor.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::errors::AppError;
use crate::jd::handlers::parse_off_runtime;
use crate::jobs::draft::JobDraft;
use crate::jobs::validation::JobSubmission;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoadDraftRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MergeDraftRequest {
    #[serde(default)]
    pub draft: JobDraft,
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct FinalizeDraftRequest {
    pub draft: JobDraft,
}

/// POST /api/v1/jobs/draft
///
/// Opens a stored job for editing.
pub async fn handle_load_draft(Json(request): Json<LoadDraftRequest>) -> Json<JobDraft> {
    Json(JobDraft::from_description(
        &request.title,
        &request.description,
    ))
}

/// POST /api/v1/jobs/draft/merge
///
/// Parses a pasted JD and merges it into the supplied draft.
pub async fn handle_merge_draft(
    State(state): State<AppState>,
    Json(request): Json<MergeDraftRequest>,
) -> Result<Json<JobDraft>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    let parsed = parse_off_runtime(request.raw_text, state.parse_options()).await?;
    let mut draft = request.draft;
    draft.merge_parsed(parsed);

    info!(
        "Merged paste into draft: {} sections, {} questions",
        draft.sections.filled_count(),
        draft.questions.len()
    );
    Ok(Json(draft))
}

/// POST /api/v1/jobs/draft/finalize
///
/// Validates the draft and returns the save payload with the canonical description.
pub async fn handle_finalize_draft(
    Json(request): Json<FinalizeDraftRequest>,
) -> Result<Json<JobSubmission>, AppError> {
    let submission = request.draft.finalize().map_err(|issues| {
        info!("Draft rejected with {} issues", issues.len());
        AppError::UnprocessableEntity {
            message: "Job draft is not ready to save".to_string(),
            details: json!(issues),
        }
    })?;
    Ok(Json(submission))
}
