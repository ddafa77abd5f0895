// Candidate screening: rank a batch of resumes against one job description,
// then compare and summarize the results.

pub mod analytics;
pub mod comparison;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod store;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("job description cannot be empty")]
    EmptyJobDescription,

    #[error("at least one candidate is required")]
    NoCandidates,

    #[error("candidate at position {0} has an empty name")]
    EmptyCandidateName(usize),

    #[error("candidate {0} is not part of this screening")]
    UnknownCandidate(Uuid),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}
