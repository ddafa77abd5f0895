//! Side-by-side comparison of a few candidates from one screening.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use crate::matching::SkillSet;
use crate::screening::models::Screening;
use crate::screening::ranking::MatchTier;
use crate::screening::ScreeningError;

pub const MIN_COMPARED: usize = 2;
pub const MAX_COMPARED: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub candidate_id: Uuid,
    pub name: String,
    pub rank: usize,
    pub tier: MatchTier,
    pub score: u32,
    pub weighted_score: u32,
    pub matching_skills: SkillSet,
    pub missing_skills: SkillSet,
    /// Required skills only this candidate covers within the selection.
    pub unique_skills: SkillSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub screening_id: Uuid,
    pub job_skills: SkillSet,
    /// Rows in the order the ids were requested.
    pub candidates: Vec<ComparisonRow>,
    /// Required skills every selected candidate covers.
    pub shared_skills: SkillSet,
}

pub fn compare_candidates(
    screening: &Screening,
    candidate_ids: &[Uuid],
) -> Result<Comparison, ScreeningError> {
    let distinct: HashSet<&Uuid> = candidate_ids.iter().collect();
    if distinct.len() != candidate_ids.len() {
        return Err(ScreeningError::InvalidSelection(
            "candidate ids must be distinct".to_string(),
        ));
    }
    if !(MIN_COMPARED..=MAX_COMPARED).contains(&candidate_ids.len()) {
        return Err(ScreeningError::InvalidSelection(format!(
            "select between {MIN_COMPARED} and {MAX_COMPARED} candidates, got {}",
            candidate_ids.len()
        )));
    }

    let selected = candidate_ids
        .iter()
        .map(|id| {
            screening
                .candidate(*id)
                .ok_or(ScreeningError::UnknownCandidate(*id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let shared_skills = selected
        .iter()
        .skip(1)
        .fold(selected[0].result.matching_skills.clone(), |acc, c| {
            acc.intersection(&c.result.matching_skills)
        });

    let candidates = selected
        .iter()
        .map(|c| {
            let covered_by_others: SkillSet = selected
                .iter()
                .filter(|other| other.candidate_id != c.candidate_id)
                .flat_map(|other| other.result.matching_skills.iter())
                .collect();
            ComparisonRow {
                candidate_id: c.candidate_id,
                name: c.name.clone(),
                rank: c.rank,
                tier: c.tier,
                score: c.result.score,
                weighted_score: c.result.weighted_score,
                matching_skills: c.result.matching_skills.clone(),
                missing_skills: c.result.missing_skills.clone(),
                unique_skills: c.result.matching_skills.difference(&covered_by_others),
            }
        })
        .collect();

    Ok(Comparison {
        screening_id: screening.id,
        job_skills: screening.job_skills.clone(),
        candidates,
        shared_skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{RegexSetExtractor, ScoringConfig};
    use crate::screening::models::CandidateInput;
    use crate::screening::ranking::screen_candidates;

    fn screening() -> Screening {
        let candidates = [
            ("Ana", "React, Node.js, AWS"),
            ("Bea", "React, Python"),
            ("Cy", "React, AWS, Docker"),
        ]
        .into_iter()
        .map(|(name, resume)| CandidateInput {
            name: name.to_string(),
            resume_text: resume.to_string(),
        })
        .collect();
        screen_candidates(
            RegexSetExtractor::builtin(),
            &ScoringConfig::default(),
            "React, Node.js, AWS, Python, Docker",
            candidates,
        )
        .unwrap()
    }

    fn id_of(screening: &Screening, name: &str) -> Uuid {
        screening
            .candidates
            .iter()
            .find(|c| c.name == name)
            .unwrap()
            .candidate_id
    }

    #[test]
    fn test_shared_and_unique_skills() {
        let s = screening();
        let ids = [id_of(&s, "Ana"), id_of(&s, "Bea")];
        let cmp = compare_candidates(&s, &ids).unwrap();

        assert_eq!(cmp.shared_skills.names(), vec!["React"]);
        assert_eq!(cmp.candidates[0].name, "Ana");
        assert_eq!(cmp.candidates[0].unique_skills.names(), vec!["Node.js", "AWS"]);
        assert_eq!(cmp.candidates[1].unique_skills.names(), vec!["Python"]);
    }

    #[test]
    fn test_three_way_comparison() {
        let s = screening();
        let ids = [id_of(&s, "Ana"), id_of(&s, "Bea"), id_of(&s, "Cy")];
        let cmp = compare_candidates(&s, &ids).unwrap();

        assert_eq!(cmp.shared_skills.names(), vec!["React"]);
        // AWS is covered by both Ana and Cy, so it is unique to neither.
        assert_eq!(cmp.candidates[0].unique_skills.names(), vec!["Node.js"]);
        assert_eq!(cmp.candidates[2].unique_skills.names(), vec!["Docker"]);
    }

    #[test]
    fn test_selection_size_enforced() {
        let s = screening();
        let one = [id_of(&s, "Ana")];
        assert!(matches!(
            compare_candidates(&s, &one),
            Err(ScreeningError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let s = screening();
        let ana = id_of(&s, "Ana");
        assert!(matches!(
            compare_candidates(&s, &[ana, ana]),
            Err(ScreeningError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_unknown_candidate() {
        let s = screening();
        let stranger = Uuid::new_v4();
        assert!(matches!(
            compare_candidates(&s, &[id_of(&s, "Ana"), stranger]),
            Err(ScreeningError::UnknownCandidate(id)) if id == stranger
        ));
    }
}
