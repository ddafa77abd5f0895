use serde::{Deserialize, Deserializer, Serialize};

use super::{MatchError, SkillTerm, SkillVocabulary};

/// A deduplicated set of skill terms, always iterated in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SkillSet {
    terms: Vec<SkillTerm>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves names against `vocabulary`. Any unknown name fails the whole set.
    pub fn from_names<I, S>(vocabulary: &SkillVocabulary, names: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                vocabulary
                    .get(name)
                    .ok_or_else(|| MatchError::UnknownSkill(name.to_string()))
            })
            .collect()
    }

    /// Inserts `term`, keeping vocabulary order. Returns false if already present.
    pub fn insert(&mut self, term: SkillTerm) -> bool {
        match self.terms.binary_search(&term) {
            Ok(_) => false,
            Err(pos) => {
                self.terms.insert(pos, term);
                true
            }
        }
    }

    pub fn contains(&self, term: &SkillTerm) -> bool {
        self.terms.binary_search(term).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = SkillTerm> + '_ {
        self.terms.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.terms.iter().map(|t| t.name()).collect()
    }

    pub fn as_slice(&self) -> &[SkillTerm] {
        &self.terms
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        self.iter().filter(|t| other.contains(t)).collect()
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        self.iter().filter(|t| !other.contains(t)).collect()
    }
}

impl FromIterator<SkillTerm> for SkillSet {
    fn from_iter<I: IntoIterator<Item = SkillTerm>>(iter: I) -> Self {
        let mut terms: Vec<SkillTerm> = iter.into_iter().collect();
        terms.sort_unstable();
        terms.dedup();
        Self { terms }
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = SkillTerm;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, SkillTerm>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter().copied()
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<SkillTerm>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
