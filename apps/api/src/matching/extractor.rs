//! Skill Extractor: finds vocabulary terms present in free text.
//!
//! Default: `RegexSetExtractor`, a single-pass matcher compiled once from the
//! whole vocabulary. `AppState` holds an `Arc<dyn SkillExtractor>` so a different
//! matcher can be swapped in at startup.
//!
//! A term is present when the term itself, or one of its formatting variants,
//! occurs as a whole word or phrase, ignoring case. Variants:
//!   - periods removed       ("Node.js"      -> "nodejs")
//!   - whitespace removed    ("Power BI"     -> "powerbi")
//!   - hyphens to spaces     ("Scikit-learn" -> "scikit learn")
//!   - hyphens removed       ("Scikit-learn" -> "scikitlearn")
//!
//! Word boundaries are ASCII alphanumerics: "Java" is never found inside
//! "JavaScript", while "C++" and "CI/CD" still match next to punctuation.
//! Digits count as word characters, so "C++17" does not yield "C++".

use std::sync::LazyLock;

use regex::{RegexSet, RegexSetBuilder};

use super::{MatchError, SkillSet, SkillTerm, SkillVocabulary};

/// Characters that may not touch either end of a match.
const BOUNDARY_CLASS: &str = "[^0-9A-Za-z]";

const MATCHER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Pluggable skill extraction backend.
pub trait SkillExtractor: Send + Sync {
    /// Returns the vocabulary terms present in `text`. Must be deterministic.
    fn extract(&self, text: &str) -> SkillSet;

    /// Short label reported alongside results, e.g. "regex-set".
    fn backend(&self) -> &'static str;
}

/// Compiles every vocabulary term into one `RegexSet` and scans text once.
#[derive(Debug)]
pub struct RegexSetExtractor {
    matcher: RegexSet,
    terms: Vec<SkillTerm>,
}

impl RegexSetExtractor {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self, MatchError> {
        let patterns: Vec<String> = vocabulary.iter().map(|t| term_pattern(t.name())).collect();

        let matcher = RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .size_limit(MATCHER_SIZE_LIMIT)
            .build()
            .map_err(|e| MatchError::Matcher(e.to_string()))?;

        Ok(Self {
            matcher,
            terms: vocabulary.terms().to_vec(),
        })
    }

    /// Extractor over the builtin vocabulary, compiled on first use.
    pub fn builtin() -> &'static RegexSetExtractor {
        &BUILTIN_EXTRACTOR
    }
}

impl SkillExtractor for RegexSetExtractor {
    fn extract(&self, text: &str) -> SkillSet {
        if text.trim().is_empty() {
            return SkillSet::new();
        }
        self.matcher
            .matches(text)
            .into_iter()
            .map(|idx| self.terms[idx])
            .collect()
    }

    fn backend(&self) -> &'static str {
        "regex-set"
    }
}

impl<T: SkillExtractor + ?Sized> SkillExtractor for &T {
    fn extract(&self, text: &str) -> SkillSet {
        (**self).extract(text)
    }

    fn backend(&self) -> &'static str {
        (**self).backend()
    }
}

static BUILTIN_EXTRACTOR: LazyLock<RegexSetExtractor> = LazyLock::new(|| {
    RegexSetExtractor::new(SkillVocabulary::builtin())
        .expect("builtin skill vocabulary compiles to a valid matcher")
});

/// Extracts builtin vocabulary terms from `text`.
pub fn extract_skills(text: &str) -> SkillSet {
    RegexSetExtractor::builtin().extract(text)
}

/// Lowercased term plus its formatting variants, deduplicated, term first.
pub fn term_variants(term: &str) -> Vec<String> {
    let base = term.to_lowercase();
    let candidates = [
        base.clone(),
        base.replace('.', ""),
        base.split_whitespace().collect::<String>(),
        base.replace('-', " "),
        base.replace('-', ""),
    ];

    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for variant in candidates {
        if !variant.trim().is_empty() && !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}

/// Boundary-guarded alternation of every variant of `term`.
/// Internal whitespace in a variant matches any run of whitespace.
fn term_pattern(term: &str) -> String {
    let alternation = term_variants(term)
        .iter()
        .map(|variant| {
            variant
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");

    format!("(?:^|{BOUNDARY_CLASS})(?:{alternation})(?:{BOUNDARY_CLASS}|$)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<&'static str> {
        extract_skills(text).names()
    }

    #[test]
    fn test_empty_and_whitespace_text_yield_nothing() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("   \n\t ").is_empty());
    }

    #[test]
    fn test_java_not_found_inside_javascript() {
        let found = names("Senior JavaScript engineer");
        assert!(found.contains(&"JavaScript"));
        assert!(!found.contains(&"Java"));
    }

    #[test]
    fn test_java_found_as_whole_word() {
        assert!(names("Java developer").contains(&"Java"));
        assert!(names("Experience: Java.").contains(&"Java"));
    }

    #[test]
    fn test_every_term_finds_itself() {
        let vocab = SkillVocabulary::builtin();
        for term in vocab.iter() {
            let found = extract_skills(term.name());
            assert!(found.contains(&term), "'{}' was not extracted from itself", term.name());
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(names("we use KUBERNETES and postgresql").contains(&"Kubernetes"));
        assert!(names("we use KUBERNETES and postgresql").contains(&"PostgreSQL"));
    }

    #[test]
    fn test_period_variant() {
        assert!(names("Built APIs with NodeJS").contains(&"Node.js"));
        assert!(names("vuejs and aspnet").contains(&"Vue.js"));
        assert!(names("vuejs and aspnet").contains(&"ASP.NET"));
    }

    #[test]
    fn test_whitespace_variant_and_flexible_spacing() {
        assert!(names("Dashboards in PowerBI").contains(&"Power BI"));
        assert!(names("machine\n  learning pipelines").contains(&"Machine Learning"));
    }

    #[test]
    fn test_hyphen_variants() {
        assert!(names("scikit learn models").contains(&"Scikit-learn"));
        assert!(names("scikitlearn models").contains(&"Scikit-learn"));
        assert!(names("end to end testing with cypress").contains(&"End-to-End Testing"));
    }

    #[test]
    fn test_punctuated_terms() {
        let found = names("Languages: C++, C#; pipelines via CI/CD");
        assert!(found.contains(&"C++"));
        assert!(found.contains(&"C#"));
        assert!(found.contains(&"CI/CD"));
    }

    #[test]
    fn test_digits_count_as_word_characters() {
        assert!(!names("Modern C++17 and Python3").contains(&"C++"));
        assert!(!names("Modern C++17 and Python3").contains(&"Python"));
        assert!(names("Modern C++ (17) and Python 3").contains(&"C++"));
        assert!(names("Modern C++ (17) and Python 3").contains(&"Python"));
    }

    #[test]
    fn test_no_partial_word_matches() {
        let found = names("Rustic gopher ranger");
        assert!(!found.contains(&"Rust"));
        assert!(!found.contains(&"Go"));
        assert!(!found.contains(&"R"));
    }

    #[test]
    fn test_output_in_vocabulary_order_without_duplicates() {
        let skills = extract_skills("AWS, React, react, Python and AWS again");
        assert_eq!(skills.names(), vec!["Python", "React", "AWS"]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let text = "Docker, Kubernetes, Terraform on AWS";
        let first = extract_skills(text);
        let _ = extract_skills("Python only");
        assert_eq!(extract_skills(text), first);
    }

    #[test]
    fn test_term_variants_dedup() {
        assert_eq!(term_variants("React"), vec!["react"]);
        assert_eq!(
            term_variants("Scikit-learn"),
            vec!["scikit-learn", "scikit learn", "scikitlearn"]
        );
        assert_eq!(term_variants("Power BI"), vec!["power bi", "powerbi"]);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(RegexSetExtractor::builtin().backend(), "regex-set");
    }
}
