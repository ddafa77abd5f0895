// Skill matching core: vocabulary, extraction and scoring.
// Everything in here is pure and synchronous. The HTTP layer lives in `handlers`.

pub mod extractor;
pub mod handlers;
pub mod scorer;
pub mod skill_set;
pub mod vocabulary;

use thiserror::Error;

pub use extractor::{extract_skills, RegexSetExtractor, SkillExtractor};
pub use scorer::{score, score_with, MatchResult, ScoringConfig};
pub use skill_set::SkillSet;
pub use vocabulary::{SkillCategory, SkillTerm, SkillVocabulary};

/// Errors raised while building matching values from caller-supplied input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("Failed to compile skill matcher: {0}")]
    Matcher(String),
}

/// Case/whitespace normalized form of a skill name, used for equality checks.
pub fn normalize_skill_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
