//! Name-shape filter implementation.
//!
//! Given names in English word lists cluster around a few shapes: short
//! vowel-initial words ending in `a` ("anna", "emma", "olga") and words built
//! with a name-forming suffix ("larsen", "nielson", "annette"). This filter
//! rejects both shapes on the normalized text. It is a heuristic and will
//! also drop some common words, which is why it is opt-in.
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::candidate::Candidate;
//! use wordbank::analysis::filter::name_pattern::NamePatternFilter;
//!
//! let filter = NamePatternFilter::new().unwrap();
//! assert!(!filter.accepts(&Candidate::new("emma", 0)));
//! assert!(!filter.accepts(&Candidate::new("larsen", 0)));
//! assert!(filter.accepts(&Candidate::new("bingo", 0)));
//! ```

use regex::Regex;

use crate::analysis::candidate::{Candidate, CandidateStream};
use crate::analysis::filter::Filter;
use crate::error::Result;

/// Vowel-initial short words ending in `a`.
pub const DEFAULT_NAME_PATTERN: &str = "^[aeiou][a-z]{1,3}a$";

/// Suffixes that commonly form surnames and given names.
pub const DEFAULT_NAME_SUFFIXES: &[&str] = &["son", "sen", "ette", "elle", "etta"];

/// A filter that drops candidates shaped like personal names.
#[derive(Clone, Debug)]
pub struct NamePatternFilter {
    pattern: Regex,
    suffixes: Vec<String>,
}

impl NamePatternFilter {
    /// Create a filter with the default pattern and suffixes.
    pub fn new() -> Result<Self> {
        Self::with_rules(DEFAULT_NAME_PATTERN, DEFAULT_NAME_SUFFIXES.iter().copied())
    }

    /// Create a filter with a custom pattern and suffix list.
    pub fn with_rules<I, S>(pattern: &str, suffixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(NamePatternFilter {
            pattern: Regex::new(pattern)?,
            suffixes: suffixes
                .into_iter()
                .map(|s| s.into().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    /// Get the pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Get the suffix list.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether a normalized word has a name-forming suffix.
    ///
    /// The suffix alone ("son") is not a match.
    pub fn has_name_suffix(&self, word: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| word.len() > suffix.len() && word.ends_with(suffix.as_str()))
    }

    /// Check a single candidate.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        !self.pattern.is_match(&candidate.text) && !self.has_name_suffix(&candidate.text)
    }
}

impl Filter for NamePatternFilter {
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream> {
        let kept: Vec<Candidate> = candidates.filter(|c| self.accepts(c)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "name_pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pattern_filter() {
        let filter = NamePatternFilter::new().unwrap();
        let candidates = vec![
            Candidate::new("anna", 0),
            Candidate::new("olga", 1),
            Candidate::new("apple", 2),
            Candidate::new("hansen", 3),
            Candidate::new("son", 4),
            Candidate::new("sphinx", 5),
            Candidate::new("colette", 6),
        ];

        let result: Vec<Candidate> = filter
            .filter(Box::new(candidates.into_iter()))
            .unwrap()
            .collect();

        let texts: Vec<&str> = result.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["apple", "son", "sphinx"]);
    }

    #[test]
    fn test_custom_rules() {
        let filter = NamePatternFilter::with_rules("^zz", vec!["INA"]).unwrap();
        assert!(!filter.accepts(&Candidate::new("zzap", 0)));
        assert!(!filter.accepts(&Candidate::new("regina", 0)));
        assert!(filter.accepts(&Candidate::new("anna", 0)));
        assert_eq!(filter.suffixes(), &["ina".to_string()]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(NamePatternFilter::with_rules("([a-z", Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(NamePatternFilter::new().unwrap().name(), "name_pattern");
    }
}
