//! Capitalization filter implementation.
//!
//! Corpora spell proper nouns with a single leading capital ("Jackson",
//! "Paris"). Lowercasing destroys that signal, so this filter reads the
//! candidate's original spelling rather than its working text. It gives the
//! same answer before or after [`LowercaseFilter`](super::lowercase::LowercaseFilter).
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::candidate::Candidate;
//! use wordbank::analysis::filter::capitalization::CapitalizationFilter;
//!
//! let filter = CapitalizationFilter::new();
//! let paris = Candidate::new("Paris", 0).with_text("paris");
//! assert!(!filter.accepts(&paris));
//! assert!(filter.accepts(&Candidate::new("bingo", 1)));
//! assert!(filter.accepts(&Candidate::new("NASA", 2)));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::candidate::{Candidate, CandidateStream};
use crate::analysis::filter::Filter;
use crate::error::Result;

/// One uppercase letter followed by one or more lowercase letters.
static PROPER_NOUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Lu}\p{Ll}+$").expect("valid proper noun pattern"));

/// A filter that drops candidates capitalized like proper nouns in the corpus.
#[derive(Clone, Debug, Default)]
pub struct CapitalizationFilter;

impl CapitalizationFilter {
    /// Create a new capitalization filter.
    pub fn new() -> Self {
        CapitalizationFilter
    }

    /// Check whether a raw token looks like a capitalized proper noun.
    pub fn is_capitalized(token: &str) -> bool {
        PROPER_NOUN.is_match(token)
    }

    /// Check a single candidate.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        !Self::is_capitalized(&candidate.original)
    }
}

impl Filter for CapitalizationFilter {
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream> {
        let kept: Vec<Candidate> = candidates.filter(|c| self.accepts(c)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "capitalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter::lowercase::LowercaseFilter;

    #[test]
    fn test_capitalization_filter() {
        let filter = CapitalizationFilter::new();
        let candidates = vec![
            Candidate::new("Jackson", 0),
            Candidate::new("apple", 1),
            Candidate::new("USA", 2),
            Candidate::new("Émile", 3),
            Candidate::new("McDonald", 4),
        ];

        let result: Vec<Candidate> = filter
            .filter(Box::new(candidates.into_iter()))
            .unwrap()
            .collect();

        let texts: Vec<&str> = result.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["apple", "USA", "McDonald"]);
    }

    #[test]
    fn test_runs_after_lowercase() {
        let lowered: Vec<Candidate> = LowercaseFilter::new()
            .filter(Box::new(
                vec![Candidate::new("Paris", 0), Candidate::new("pears", 1)].into_iter(),
            ))
            .unwrap()
            .collect();

        let result: Vec<Candidate> = CapitalizationFilter::new()
            .filter(Box::new(lowered.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "pears");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(CapitalizationFilter::new().name(), "capitalization");
    }
}
