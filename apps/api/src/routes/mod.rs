pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Matching core
        .route(
            "/api/v1/skills/vocabulary",
            get(matching::handle_vocabulary),
        )
        .route("/api/v1/skills/extract", post(matching::handle_extract))
        .route("/api/v1/match/score", post(matching::handle_score))
        // Screenings
        .route(
            "/api/v1/screenings",
            post(screening::handle_create_screening),
        )
        .route(
            "/api/v1/screenings/upload",
            post(screening::handle_upload_screening),
        )
        .route(
            "/api/v1/screenings/:id",
            get(screening::handle_get_screening),
        )
        .route(
            "/api/v1/screenings/:id/analytics",
            get(screening::handle_screening_analytics),
        )
        .route(
            "/api/v1/screenings/:id/compare",
            post(screening::handle_compare),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
