//! Skill vocabulary and keyword matching.
//!
//! Matching is deliberately naive: lowercase the text once, then test
//! plain substring containment per vocabulary term. There is no word
//! boundary awareness, so a short term can match inside a longer word
//! (a vocabulary entry "r" matches inside "career"). That imprecision is
//! part of the contract downstream scoring was tuned against; callers who
//! need precision should supply a curated vocabulary instead.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Bundled multi-domain term list (technology, finance, healthcare,
/// legal, soft skills, ...). One term per line; `#` starts a comment.
static DEFAULT_TERMS: &str = include_str!("data/skills.txt");

static DEFAULT_VOCABULARY: Lazy<Arc<SkillVocabulary>> =
    Lazy::new(|| Arc::new(SkillVocabulary::from_lines(DEFAULT_TERMS)));

/// An ordered, case-insensitive list of recognized skill terms.
///
/// Fixed at construction and shared read-only across parses. Duplicate
/// terms in the source list are tolerated; deduplication happens at match
/// time so extraction output is always duplicate-free.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    /// Build a vocabulary from newline-separated terms. Blank lines and
    /// `#` comment lines are skipped; terms are lowercased.
    pub fn from_lines(data: &str) -> Self {
        let terms = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { terms }
    }

    /// Build a vocabulary from an iterator of terms, preserving order.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(|t| t.into().to_lowercase()).collect(),
        }
    }

    /// The vocabulary terms, in order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms (including any duplicates in the source list).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Extract the vocabulary terms present in the text.
    ///
    /// Pure function: lowercases the text once, then collects each term
    /// contained in it, exactly once, in vocabulary order (not text
    /// order).
    pub fn extract(&self, raw_text: &str) -> Vec<String> {
        let text_lower = raw_text.to_lowercase();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut found = Vec::new();
        for term in &self.terms {
            if text_lower.contains(term.as_str()) && seen.insert(term.as_str()) {
                found.push(term.clone());
            }
        }
        found
    }
}

/// Shared handle to the bundled default vocabulary.
pub fn default_vocabulary() -> Arc<SkillVocabulary> {
    Arc::clone(&DEFAULT_VOCABULARY)
}

/// Extract skills from raw text using the default vocabulary.
pub fn extract_skills(raw_text: &str) -> Vec<String> {
    DEFAULT_VOCABULARY.extract(raw_text)
}
