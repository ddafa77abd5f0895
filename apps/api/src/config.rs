use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::{ScoringConfig, SkillSet, SkillVocabulary};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for document uploads.
    pub max_upload_bytes: usize,
    /// Screenings kept in memory before the oldest is evicted.
    pub screening_capacity: usize,
    pub scoring: ScoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            screening_capacity: 256,
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let mut scoring = defaults.scoring;

        if let Ok(raw) = std::env::var("SCORING_CRITICAL_SKILLS") {
            let names = raw.split(',').map(str::trim).filter(|s| !s.is_empty());
            scoring.critical_skills = SkillSet::from_names(SkillVocabulary::builtin(), names)
                .context("SCORING_CRITICAL_SKILLS must list known skills")?;
        }
        scoring.critical_bonus = parse_env("SCORING_CRITICAL_BONUS", scoring.critical_bonus)?;
        scoring.missing_ratio_threshold =
            parse_env("SCORING_MISSING_RATIO_THRESHOLD", scoring.missing_ratio_threshold)?;
        scoring.missing_penalty = parse_env("SCORING_MISSING_PENALTY", scoring.missing_penalty)?;
        scoring
            .validate()
            .context("Invalid scoring configuration")?;

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            screening_capacity: parse_env("SCREENING_CAPACITY", defaults.screening_capacity)?,
            scoring,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
