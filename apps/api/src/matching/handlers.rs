//! Axum route handlers for the matching core.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::{score_with, MatchResult, SkillCategory, SkillSet, SkillVocabulary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: SkillCategory,
    pub label: &'static str,
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub total: usize,
    pub categories: Vec<CategoryGroup>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: SkillSet,
    pub count: usize,
    pub extractor_backend: String,
}

/// Either side may be given as skill names or as free text to extract from.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub candidate: Vec<String>,
    pub required_text: Option<String>,
    pub candidate_text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills/vocabulary
pub async fn handle_vocabulary() -> Json<VocabularyResponse> {
    let vocabulary = SkillVocabulary::builtin();
    let categories = vocabulary
        .by_category()
        .into_iter()
        .map(|(category, terms)| CategoryGroup {
            category,
            label: category.label(),
            skills: terms.iter().map(|t| t.name()).collect(),
        })
        .collect();

    Json(VocabularyResponse {
        total: vocabulary.len(),
        categories,
    })
}

/// POST /api/v1/skills/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let skills = state.extractor.extract(&request.text);
    Json(ExtractResponse {
        count: skills.len(),
        skills,
        extractor_backend: state.extractor.backend().to_string(),
    })
}

/// POST /api/v1/match/score
///
/// Scores a candidate skill set against a required skill set using the
/// configured weighting.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let required = resolve_side(&state, &request.required, request.required_text.as_deref())?;
    let candidate = resolve_side(&state, &request.candidate, request.candidate_text.as_deref())?;

    Ok(Json(score_with(&state.config.scoring, &required, &candidate)))
}

/// Named skills plus anything extracted from the accompanying text.
fn resolve_side(state: &AppState, names: &[String], text: Option<&str>) -> Result<SkillSet, AppError> {
    let named = SkillSet::from_names(SkillVocabulary::builtin(), names)?;
    let Some(text) = text else {
        return Ok(named);
    };
    let extracted = state.extractor.extract(text);
    Ok(named.iter().chain(extracted.iter()).collect())
}
