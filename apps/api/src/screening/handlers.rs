//! Axum route handlers for the Screening API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::documents::{extract_document_text, ExtractionError};
use crate::errors::AppError;
use crate::screening::analytics::{compute_analytics, ScreeningAnalytics};
use crate::screening::comparison::{compare_candidates, Comparison};
use crate::screening::models::{CandidateInput, Screening};
use crate::screening::ranking::screen_candidates;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateScreeningRequest {
    pub job_description: String,
    pub candidates: Vec<CandidateInput>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub candidate_ids: Vec<Uuid>,
}

/// Multipart field names accepted by the upload endpoint.
const FIELD_JOB_TEXT: &str = "job_description";
const FIELD_JOB_FILE: &str = "job_file";
const FIELD_RESUME: &str = "resumes";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screenings
///
/// Scores plain-text resumes against a plain-text job description.
pub async fn handle_create_screening(
    State(state): State<AppState>,
    Json(request): Json<CreateScreeningRequest>,
) -> Result<Json<Arc<Screening>>, AppError> {
    let screening = run_screening(&state, request.job_description, request.candidates).await?;
    Ok(Json(screening))
}

/// POST /api/v1/screenings/upload
///
/// Multipart form: `job_description` (text) or `job_file` (document), plus one
/// or more `resumes` files. Candidate names come from the file names.
pub async fn handle_upload_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Arc<Screening>>, AppError> {
    let mut job_description: Option<String> = None;
    let mut candidates = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{field_name}': {e}")))?;

        match field_name.as_str() {
            FIELD_JOB_TEXT => {
                let text = std::str::from_utf8(&data).map_err(|_| ExtractionError::InvalidEncoding)?;
                job_description = Some(text.to_string());
            }
            FIELD_JOB_FILE => {
                job_description = Some(extract_upload(data, file_name, content_type).await?);
            }
            FIELD_RESUME => {
                let name = candidate_name(&file_name);
                let resume_text = extract_upload(data, file_name, content_type).await?;
                candidates.push(CandidateInput { name, resume_text });
            }
            other => {
                tracing::debug!("Ignoring unexpected upload field '{other}'");
            }
        }
    }

    let job_description = job_description.ok_or_else(|| {
        AppError::Validation(format!("either '{FIELD_JOB_TEXT}' or '{FIELD_JOB_FILE}' is required"))
    })?;

    let screening = run_screening(&state, job_description, candidates).await?;
    Ok(Json(screening))
}

/// GET /api/v1/screenings/:id
pub async fn handle_get_screening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Arc<Screening>>, AppError> {
    Ok(Json(load_screening(&state, id).await?))
}

/// GET /api/v1/screenings/:id/analytics
pub async fn handle_screening_analytics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningAnalytics>, AppError> {
    let screening = load_screening(&state, id).await?;
    Ok(Json(compute_analytics(&screening)))
}

/// POST /api/v1/screenings/:id/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<Comparison>, AppError> {
    let screening = load_screening(&state, id).await?;
    Ok(Json(compare_candidates(&screening, &request.candidate_ids)?))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn run_screening(
    state: &AppState,
    job_description: String,
    candidates: Vec<CandidateInput>,
) -> Result<Arc<Screening>, AppError> {
    let extractor = Arc::clone(&state.extractor);
    let scoring = state.config.scoring.clone();

    // Extraction and scoring are CPU-bound and fan out on rayon.
    let screening = tokio::task::spawn_blocking(move || {
        screen_candidates(extractor.as_ref(), &scoring, &job_description, candidates)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e)))??;

    info!(
        "Screening {} created: {} job skills, {} candidates",
        screening.id,
        screening.job_skills.len(),
        screening.candidates.len()
    );

    Ok(state.screenings.insert(screening).await)
}

async fn load_screening(state: &AppState, id: Uuid) -> Result<Arc<Screening>, AppError> {
    state
        .screenings
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Screening {id} not found")))
}

/// Runs document extraction off the async runtime. A panicking parser is
/// reported as a failed extraction, not a crashed request.
async fn extract_upload(
    data: Bytes,
    file_name: String,
    content_type: Option<String>,
) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || {
        extract_document_text(&data, &file_name, content_type.as_deref())
    })
    .await
    .map_err(|e| ExtractionError::Aborted(e.to_string()))??;
    Ok(text)
}

/// "jane_doe-resume.pdf" -> "jane_doe-resume"
fn candidate_name(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    stem.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_name_strips_extension() {
        assert_eq!(candidate_name("jane_doe.pdf"), "jane_doe");
        assert_eq!(candidate_name("archive.tar.gz"), "archive.tar");
        assert_eq!(candidate_name("noext"), "noext");
        assert_eq!(candidate_name(".hidden"), ".hidden");
    }
}
