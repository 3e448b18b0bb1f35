//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_section, GenerationRequest, GenerationResult};
use crate::generation::sections::{outline, ChapterOutline};
use crate::state::AppState;

/// POST /generate
///
/// Drafts one section from the user's references. A body that does not
/// deserialize is treated as an unexpected failure, not a client error.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(request) = payload.map_err(|e| {
        AppError::Internal(anyhow::anyhow!("unreadable generation request: {e}"))
    })?;

    let references = request
        .references
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Validation("references required".to_string()))?;

    let result = generate_section(
        state.generator.as_ref(),
        request.chapter.as_deref().unwrap_or_default(),
        request.section.as_deref(),
        references,
    )
    .await?;

    Ok(Json(result))
}

/// GET /outline
///
/// Returns the chapter / section / sub-section tree the form offers.
pub async fn handle_outline() -> Json<Vec<ChapterOutline>> {
    Json(outline())
}
