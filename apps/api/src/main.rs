use std::net::SocketAddr;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillmatch::config::Config;
use skillmatch::{build_router, AppState, SkillVocabulary};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the vocabulary matcher up front rather than on the first request
    let state = AppState::new(config.clone());
    info!(
        "Skill vocabulary loaded: {} terms (extractor: {})",
        SkillVocabulary::builtin().len(),
        state.extractor.backend()
    );
    info!(
        "Scoring: bonus {} per critical skill ({} critical), penalty {} above {:.0}% missing",
        config.scoring.critical_bonus,
        config.scoring.critical_skills.len(),
        config.scoring.missing_penalty,
        config.scoring.missing_ratio_threshold * 100.0
    );

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
