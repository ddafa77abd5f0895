use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::{MatchResult, SkillSet};
use crate::screening::ranking::MatchTier;

/// One resume to screen, already reduced to plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInput {
    pub name: String,
    pub resume_text: String,
}

/// A scored candidate within a screening.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateMatch {
    pub candidate_id: Uuid,
    pub name: String,
    /// 1-based position after ranking.
    pub rank: usize,
    pub tier: MatchTier,
    /// Every vocabulary skill found in the resume, required or not.
    pub skills: SkillSet,
    pub result: MatchResult,
}

/// One job description scored against a batch of candidates.
#[derive(Debug, Clone, Serialize)]
pub struct Screening {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub job_skills: SkillSet,
    /// Ranked, best first.
    pub candidates: Vec<CandidateMatch>,
    pub extractor_backend: String,
}

impl Screening {
    pub fn candidate(&self, candidate_id: Uuid) -> Option<&CandidateMatch> {
        self.candidates
            .iter()
            .find(|c| c.candidate_id == candidate_id)
    }
}
