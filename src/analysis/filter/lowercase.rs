//! Lowercase filter implementation.
//!
//! This is the normalization stage: it lowercases the working text of every
//! candidate and does nothing else.
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::candidate::Candidate;
//! use wordbank::analysis::filter::Filter;
//! use wordbank::analysis::filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let candidates = vec![Candidate::new("Apple", 0), Candidate::new("BINGO", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(candidates.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "apple");
//! assert_eq!(filtered[1].text, "bingo");
//! ```

use crate::analysis::candidate::CandidateStream;
use crate::analysis::filter::Filter;
use crate::analysis::normalize;
use crate::error::Result;

/// A filter that converts working text to lowercase.
///
/// The original spelling stays on `Candidate::original`.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream> {
        let filtered = candidates
            .map(|candidate| {
                if candidate.text.chars().any(char::is_uppercase) {
                    candidate.with_text(normalize(&candidate.text))
                } else {
                    candidate
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::candidate::Candidate;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let candidates = vec![
            Candidate::new("Hello", 0),
            Candidate::new("WORLD", 1),
            Candidate::new("sphinx", 2),
        ];

        let result: Vec<Candidate> = filter
            .filter(Box::new(candidates.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].original, "Hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "sphinx");
    }

    #[test]
    fn test_lowercase_keeps_punctuation() {
        let filter = LowercaseFilter::new();
        let result: Vec<Candidate> = filter
            .filter(Box::new(vec![Candidate::new("O'Brien", 0)].into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "o'brien");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
