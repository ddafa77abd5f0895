//! Resume / job-description skill matching.
//!
//! The core is two pure functions over a fixed vocabulary:
//! [`extract_skills`] finds known skills in plain text, and [`score`] turns a
//! required and a candidate skill set into a bounded [`MatchResult`]. The rest of
//! the crate is the HTTP service around them.

pub mod config;
pub mod documents;
pub mod errors;
pub mod matching;
pub mod routes;
pub mod screening;
pub mod state;

pub use matching::{
    extract_skills, score, score_with, MatchResult, ScoringConfig, SkillSet, SkillTerm,
    SkillVocabulary,
};
pub use routes::build_router;
pub use state::AppState;
