//! Screening: extract the job's skills once, score every candidate against them,
//! and rank the results.

use std::cmp::Ordering;

use chrono::Utc;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::{score_with, ScoringConfig, SkillExtractor};
use crate::screening::models::{CandidateInput, CandidateMatch, Screening};
use crate::screening::ScreeningError;

/// Coarse label for a weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Strong,
    Good,
    Fair,
    Weak,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => MatchTier::Excellent,
            s if s >= 80 => MatchTier::Strong,
            s if s >= 70 => MatchTier::Good,
            s if s >= 60 => MatchTier::Fair,
            _ => MatchTier::Weak,
        }
    }
}

/// Scores `candidates` against `job_text` and returns a ranked screening.
pub fn screen_candidates(
    extractor: &dyn SkillExtractor,
    config: &ScoringConfig,
    job_text: &str,
    candidates: Vec<CandidateInput>,
) -> Result<Screening, ScreeningError> {
    if job_text.trim().is_empty() {
        return Err(ScreeningError::EmptyJobDescription);
    }
    if candidates.is_empty() {
        return Err(ScreeningError::NoCandidates);
    }
    if let Some(idx) = candidates.iter().position(|c| c.name.trim().is_empty()) {
        return Err(ScreeningError::EmptyCandidateName(idx));
    }

    let job_skills = extractor.extract(job_text);

    let mut scored: Vec<CandidateMatch> = candidates
        .into_par_iter()
        .map(|candidate| {
            let skills = extractor.extract(&candidate.resume_text);
            let result = score_with(config, &job_skills, &skills);
            CandidateMatch {
                candidate_id: Uuid::new_v4(),
                name: candidate.name.trim().to_string(),
                rank: 0,
                tier: MatchTier::from_score(result.weighted_score),
                skills,
                result,
            }
        })
        .collect();

    rank_candidates(&mut scored);

    Ok(Screening {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        job_skills,
        candidates: scored,
        extractor_backend: extractor.backend().to_string(),
    })
}

/// Sorts best first (weighted score, then score, then name) and assigns ranks.
pub fn rank_candidates(candidates: &mut [CandidateMatch]) {
    candidates.sort_by(compare_matches);
    for (idx, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = idx + 1;
    }
}

fn compare_matches(a: &CandidateMatch, b: &CandidateMatch) -> Ordering {
    b.result
        .weighted_score
        .cmp(&a.result.weighted_score)
        .then_with(|| b.result.score.cmp(&a.result.score))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}
