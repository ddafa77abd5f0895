//! Match Scorer: turns a required skill set and a candidate skill set into a
//! bounded, explainable `MatchResult`.
//!
//! Algorithm:
//! 1. matching = candidate skills equal (normalized) to some required skill
//! 2. missing  = required skills with no equal candidate skill
//! 3. score    = round(100 × |matching| / |required|)
//! 4. weighted = min(cap, score + bonus × |critical matches|)
//! 5. if |missing| / |required| > threshold: weighted = max(floor, weighted − penalty)

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::{normalize_skill_name, MatchError, SkillSet, SkillVocabulary};

pub const DEFAULT_CRITICAL_SKILLS: &[&str] =
    &["React", "JavaScript", "Python", "Java", "Node.js", "AWS"];
pub const DEFAULT_CRITICAL_BONUS: u32 = 3;
pub const DEFAULT_MISSING_RATIO_THRESHOLD: f64 = 0.8;
pub const DEFAULT_MISSING_PENALTY: u32 = 5;
pub const SCORE_CAP: u32 = 100;
pub const SCORE_FLOOR: u32 = 0;

/// Tunable constants for the weighted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub critical_skills: SkillSet,
    /// Added to the weighted score for every matched critical skill.
    pub critical_bonus: u32,
    /// Penalty applies when missing / required is strictly above this.
    pub missing_ratio_threshold: f64,
    pub missing_penalty: u32,
    pub score_cap: u32,
    pub score_floor: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            // Every default critical skill is a builtin vocabulary term.
            critical_skills: DEFAULT_CRITICAL_SKILLS
                .iter()
                .filter_map(|name| SkillVocabulary::builtin().get(name))
                .collect(),
            critical_bonus: DEFAULT_CRITICAL_BONUS,
            missing_ratio_threshold: DEFAULT_MISSING_RATIO_THRESHOLD,
            missing_penalty: DEFAULT_MISSING_PENALTY,
            score_cap: SCORE_CAP,
            score_floor: SCORE_FLOOR,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.missing_ratio_threshold) {
            return Err(MatchError::InvalidConfig(format!(
                "missing_ratio_threshold must be within [0, 1], got {}",
                self.missing_ratio_threshold
            )));
        }
        if self.score_cap > SCORE_CAP {
            return Err(MatchError::InvalidConfig(format!(
                "score_cap must not exceed {SCORE_CAP}, got {}",
                self.score_cap
            )));
        }
        if self.score_floor > self.score_cap {
            return Err(MatchError::InvalidConfig(format!(
                "score_floor ({}) must not exceed score_cap ({})",
                self.score_floor, self.score_cap
            )));
        }
        Ok(())
    }

    fn is_critical(&self, name: &str) -> bool {
        let key = normalize_skill_name(name);
        self.critical_skills
            .iter()
            .any(|c| normalize_skill_name(c.name()) == key)
    }
}

/// Scored outcome of one required-vs-candidate comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Plain overlap percentage, 0 – 100.
    pub score: u32,
    /// Score after critical-skill bonus and missing-skill penalty, 0 – 100.
    pub weighted_score: u32,
    pub matching_skills: SkillSet,
    pub missing_skills: SkillSet,
    /// Matched skills that earned the critical bonus.
    pub critical_matches: SkillSet,
    /// Bonus actually added after capping.
    pub bonus_applied: u32,
    /// Penalty actually subtracted after flooring.
    pub penalty_applied: u32,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            score: 0,
            weighted_score: 0,
            matching_skills: SkillSet::new(),
            missing_skills: SkillSet::new(),
            critical_matches: SkillSet::new(),
            bonus_applied: 0,
            penalty_applied: 0,
        }
    }
}

static DEFAULT_CONFIG: LazyLock<ScoringConfig> = LazyLock::new(ScoringConfig::default);

/// Scores with the default configuration.
pub fn score(required: &SkillSet, candidate: &SkillSet) -> MatchResult {
    score_with(&DEFAULT_CONFIG, required, candidate)
}

pub fn score_with(config: &ScoringConfig, required: &SkillSet, candidate: &SkillSet) -> MatchResult {
    if required.is_empty() {
        return MatchResult::empty();
    }

    let required_keys: HashSet<String> = required
        .iter()
        .map(|t| normalize_skill_name(t.name()))
        .collect();
    let candidate_keys: HashSet<String> = candidate
        .iter()
        .map(|t| normalize_skill_name(t.name()))
        .collect();

    let matching_skills: SkillSet = candidate
        .iter()
        .filter(|t| required_keys.contains(&normalize_skill_name(t.name())))
        .collect();
    let missing_skills: SkillSet = required
        .iter()
        .filter(|t| !candidate_keys.contains(&normalize_skill_name(t.name())))
        .collect();

    let score = percentage(matching_skills.len(), required.len());

    let critical_matches: SkillSet = matching_skills
        .iter()
        .filter(|t| config.is_critical(t.name()))
        .collect();
    // Fields are public, so an unvalidated config can still reach here.
    let cap = config.score_cap.min(SCORE_CAP);
    let floor = config.score_floor.min(cap);

    let raw_bonus = config
        .critical_bonus
        .saturating_mul(critical_matches.len() as u32);
    let boosted = score.saturating_add(raw_bonus).min(cap);
    let bonus_applied = boosted.saturating_sub(score);

    let missing_ratio = missing_skills.len() as f64 / required.len() as f64;
    let weighted = if missing_ratio > config.missing_ratio_threshold {
        boosted.saturating_sub(config.missing_penalty).max(floor)
    } else {
        boosted
    };
    let penalty_applied = boosted.saturating_sub(weighted);
    let weighted_score = weighted.max(floor).min(cap);

    MatchResult {
        score,
        weighted_score,
        matching_skills,
        missing_skills,
        critical_matches,
        bonus_applied,
        penalty_applied,
    }
}

/// round(100 × part / whole) with halves rounded up, in integer arithmetic.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u32
}
