use std::sync::Arc;

use crate::config::Config;
use crate::matching::{RegexSetExtractor, SkillExtractor};
use crate::screening::store::ScreeningStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill extractor. Default: the builtin RegexSetExtractor,
    /// compiled once per process.
    pub extractor: Arc<dyn SkillExtractor>,
    pub screenings: ScreeningStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let screenings = ScreeningStore::new(config.screening_capacity);
        Self {
            config,
            extractor: Arc::new(RegexSetExtractor::builtin()),
            screenings,
        }
    }
}
