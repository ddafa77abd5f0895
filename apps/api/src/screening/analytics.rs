use serde::Serialize;

use crate::matching::{SkillSet, SkillTerm};
use crate::screening::models::Screening;

/// Weighted-score buckets, highest first: (label, inclusive lower bound).
const SCORE_BUCKETS: &[(&str, u32)] = &[
    ("90-100", 90),
    ("80-89", 80),
    ("70-79", 70),
    ("60-69", 60),
    ("0-59", 0),
];

#[derive(Debug, Clone, Serialize)]
pub struct SkillFrequency {
    pub skill: SkillTerm,
    pub count: usize,
    /// Share of candidates holding the skill, 0 – 100.
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBucket {
    pub range: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGap {
    pub skill: SkillTerm,
    pub missing_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCoverage {
    pub skill: SkillTerm,
    /// Fraction of candidates covering this required skill, 0.0 – 1.0.
    pub coverage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopCandidate {
    pub name: String,
    pub weighted_score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningAnalytics {
    pub total_candidates: usize,
    pub average_score: f64,
    pub average_weighted_score: f64,
    pub top_candidate: Option<TopCandidate>,
    pub skill_frequency: Vec<SkillFrequency>,
    pub score_distribution: Vec<ScoreBucket>,
    pub skill_gaps: Vec<SkillGap>,
    pub coverage: Vec<SkillCoverage>,
}

pub fn compute_analytics(screening: &Screening) -> ScreeningAnalytics {
    let candidates = &screening.candidates;
    let total = candidates.len();

    let average_score = average(candidates.iter().map(|c| c.result.score), total);
    let average_weighted_score =
        average(candidates.iter().map(|c| c.result.weighted_score), total);

    let top_candidate = candidates
        .iter()
        .min_by_key(|c| c.rank)
        .map(|c| TopCandidate {
            name: c.name.clone(),
            weighted_score: c.result.weighted_score,
        });

    let held: SkillSet = candidates.iter().flat_map(|c| c.skills.iter()).collect();
    let mut skill_frequency: Vec<SkillFrequency> = held
        .iter()
        .map(|skill| {
            let count = candidates.iter().filter(|c| c.skills.contains(&skill)).count();
            SkillFrequency {
                skill,
                count,
                percentage: percent_of(count, total),
            }
        })
        .collect();
    // Stable sort keeps vocabulary order among equal counts.
    skill_frequency.sort_by(|a, b| b.count.cmp(&a.count));

    let score_distribution = SCORE_BUCKETS
        .iter()
        .enumerate()
        .map(|(idx, &(range, lower))| {
            let upper = if idx == 0 { u32::MAX } else { SCORE_BUCKETS[idx - 1].1 };
            let count = candidates
                .iter()
                .filter(|c| (lower..upper).contains(&c.result.weighted_score))
                .count();
            ScoreBucket { range, count }
        })
        .collect();

    let mut skill_gaps: Vec<SkillGap> = screening
        .job_skills
        .iter()
        .map(|skill| SkillGap {
            skill,
            missing_count: candidates
                .iter()
                .filter(|c| c.result.missing_skills.contains(&skill))
                .count(),
        })
        .filter(|gap| gap.missing_count > 0)
        .collect();
    skill_gaps.sort_by(|a, b| b.missing_count.cmp(&a.missing_count));

    let coverage = screening
        .job_skills
        .iter()
        .map(|skill| {
            let covered = candidates
                .iter()
                .filter(|c| c.result.matching_skills.contains(&skill))
                .count();
            SkillCoverage {
                skill,
                coverage: if total == 0 {
                    0.0
                } else {
                    covered as f64 / total as f64
                },
            }
        })
        .collect();

    ScreeningAnalytics {
        total_candidates: total,
        average_score,
        average_weighted_score,
        top_candidate,
        skill_frequency,
        score_distribution,
        skill_gaps,
        coverage,
    }
}

/// Mean rounded to one decimal place.
fn average(values: impl Iterator<Item = u32>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = values.map(u64::from).sum();
    ((sum as f64 / count as f64) * 10.0).round() / 10.0
}

fn percent_of(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
