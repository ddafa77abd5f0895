//! Skill Vocabulary: the fixed, ordered list of skill terms the extractor recognizes.
//!
//! The builtin vocabulary is built once on first use and never mutated. Adding a
//! term is a code change, not a runtime operation.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{normalize_skill_name, MatchError};

/// Grouping used when displaying the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Frontend,
    Backend,
    Database,
    CloudDevops,
    Mobile,
    DataAnalytics,
    Testing,
    ToolsMethodology,
    SoftSkill,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Language => "Programming Languages",
            SkillCategory::Frontend => "Frontend Technologies",
            SkillCategory::Backend => "Backend Technologies",
            SkillCategory::Database => "Databases",
            SkillCategory::CloudDevops => "Cloud & DevOps",
            SkillCategory::Mobile => "Mobile Development",
            SkillCategory::DataAnalytics => "Data & Analytics",
            SkillCategory::Testing => "Testing & Quality",
            SkillCategory::ToolsMethodology => "Tools & Methodologies",
            SkillCategory::SoftSkill => "Soft Skills",
        }
    }
}

/// A canonical skill name plus its position in the vocabulary.
///
/// Ordering follows the vocabulary, which is what keeps `SkillSet`s stable.
/// Serializes as the bare canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillTerm {
    ordinal: usize,
    name: &'static str,
    category: SkillCategory,
}

impl SkillTerm {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }
}

impl fmt::Display for SkillTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for SkillTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for SkillTerm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        SkillVocabulary::builtin()
            .get(&name)
            .ok_or_else(|| serde::de::Error::custom(MatchError::UnknownSkill(name)))
    }
}

/// Ordered, immutable list of recognized skill terms.
#[derive(Debug)]
pub struct SkillVocabulary {
    terms: Vec<SkillTerm>,
    by_name: HashMap<String, usize>,
}

impl SkillVocabulary {
    /// Builds a vocabulary, rejecting empty names and duplicates under
    /// case/whitespace normalization.
    pub fn from_entries(entries: &'static [(&'static str, SkillCategory)]) -> Result<Self, MatchError> {
        let mut terms = Vec::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for (ordinal, (name, category)) in entries.iter().enumerate() {
            let key = normalize_skill_name(name);
            if key.is_empty() {
                return Err(MatchError::InvalidVocabulary(format!(
                    "empty skill term at position {ordinal}"
                )));
            }
            if by_name.insert(key, ordinal).is_some() {
                return Err(MatchError::InvalidVocabulary(format!(
                    "duplicate skill term '{name}'"
                )));
            }
            terms.push(SkillTerm {
                ordinal,
                name,
                category: *category,
            });
        }

        Ok(Self { terms, by_name })
    }

    /// The process-wide builtin vocabulary.
    pub fn builtin() -> &'static SkillVocabulary {
        &BUILTIN
    }

    /// Looks up a term by name, ignoring case and extra whitespace.
    pub fn get(&self, name: &str) -> Option<SkillTerm> {
        self.by_name
            .get(&normalize_skill_name(name))
            .map(|&idx| self.terms[idx])
    }

    pub fn terms(&self) -> &[SkillTerm] {
        &self.terms
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

    /// Terms grouped by category, categories in first-appearance order.
    pub fn by_category(&self) -> Vec<(SkillCategory, Vec<SkillTerm>)> {
        let mut groups: Vec<(SkillCategory, Vec<SkillTerm>)> = Vec::new();
        for term in &self.terms {
            match groups.iter_mut().find(|(c, _)| *c == term.category) {
                Some((_, members)) => members.push(*term),
                None => groups.push((term.category, vec![*term])),
            }
        }
        groups
    }
}

static BUILTIN: LazyLock<SkillVocabulary> = LazyLock::new(|| {
    SkillVocabulary::from_entries(BUILTIN_TERMS).expect("builtin skill vocabulary is valid")
});

use SkillCategory::*;

const BUILTIN_TERMS: &[(&str, SkillCategory)] = &[
    ("JavaScript", Language),
    ("TypeScript", Language),
    ("Python", Language),
    ("Java", Language),
    ("C#", Language),
    ("C++", Language),
    ("PHP", Language),
    ("Ruby", Language),
    ("Go", Language),
    ("Rust", Language),
    ("Swift", Language),
    ("Kotlin", Language),
    ("Scala", Language),
    ("R", Language),
    ("MATLAB", Language),
    ("Perl", Language),
    ("Shell", Language),
    ("PowerShell", Language),
    ("React", Frontend),
    ("Angular", Frontend),
    ("Vue.js", Frontend),
    ("Svelte", Frontend),
    ("jQuery", Frontend),
    ("HTML", Frontend),
    ("CSS", Frontend),
    ("SASS", Frontend),
    ("LESS", Frontend),
    ("Bootstrap", Frontend),
    ("Tailwind CSS", Frontend),
    ("Material UI", Frontend),
    ("Ant Design", Frontend),
    ("Chakra UI", Frontend),
    ("Node.js", Backend),
    ("Express", Backend),
    ("Django", Backend),
    ("Flask", Backend),
    ("FastAPI", Backend),
    ("Spring Boot", Backend),
    ("ASP.NET", Backend),
    ("Laravel", Backend),
    ("CodeIgniter", Backend),
    ("Ruby on Rails", Backend),
    ("Gin", Backend),
    ("Echo", Backend),
    ("MySQL", Database),
    ("PostgreSQL", Database),
    ("MongoDB", Database),
    ("Redis", Database),
    ("SQLite", Database),
    ("Oracle", Database),
    ("SQL Server", Database),
    ("Cassandra", Database),
    ("DynamoDB", Database),
    ("Firebase", Database),
    ("Supabase", Database),
    ("AWS", CloudDevops),
    ("Azure", CloudDevops),
    ("Google Cloud", CloudDevops),
    ("Docker", CloudDevops),
    ("Kubernetes", CloudDevops),
    ("Jenkins", CloudDevops),
    ("GitLab CI", CloudDevops),
    ("GitHub Actions", CloudDevops),
    ("Terraform", CloudDevops),
    ("Ansible", CloudDevops),
    ("Chef", CloudDevops),
    ("Puppet", CloudDevops),
    ("React Native", Mobile),
    ("Flutter", Mobile),
    ("iOS Development", Mobile),
    ("Android Development", Mobile),
    ("Xamarin", Mobile),
    ("Ionic", Mobile),
    ("Cordova", Mobile),
    ("Unity", Mobile),
    ("Machine Learning", DataAnalytics),
    ("Deep Learning", DataAnalytics),
    ("Data Science", DataAnalytics),
    ("TensorFlow", DataAnalytics),
    ("PyTorch", DataAnalytics),
    ("Pandas", DataAnalytics),
    ("NumPy", DataAnalytics),
    ("Scikit-learn", DataAnalytics),
    ("Tableau", DataAnalytics),
    ("Power BI", DataAnalytics),
    ("Apache Spark", DataAnalytics),
    ("Jest", Testing),
    ("Cypress", Testing),
    ("Selenium", Testing),
    ("Playwright", Testing),
    ("Unit Testing", Testing),
    ("Integration Testing", Testing),
    ("End-to-End Testing", Testing),
    ("Test Automation", Testing),
    ("Git", ToolsMethodology),
    ("GitHub", ToolsMethodology),
    ("GitLab", ToolsMethodology),
    ("Jira", ToolsMethodology),
    ("Confluence", ToolsMethodology),
    ("Slack", ToolsMethodology),
    ("Agile", ToolsMethodology),
    ("Scrum", ToolsMethodology),
    ("Kanban", ToolsMethodology),
    ("DevOps", ToolsMethodology),
    ("CI/CD", ToolsMethodology),
    ("Microservices", ToolsMethodology),
    ("RESTful APIs", ToolsMethodology),
    ("GraphQL", ToolsMethodology),
    ("Leadership", SoftSkill),
    ("Team Management", SoftSkill),
    ("Project Management", SoftSkill),
    ("Communication", SoftSkill),
    ("Problem Solving", SoftSkill),
    ("Critical Thinking", SoftSkill),
    ("Mentoring", SoftSkill),
];
