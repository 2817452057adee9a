//! Length filter implementation.

use crate::analysis::candidate::{Candidate, CandidateStream};
use crate::analysis::filter::Filter;
use crate::error::Result;

/// A filter that keeps candidates whose length lies in `[min_len, max_len]`.
///
/// Length is counted in characters.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_len: usize,
    max_len: usize,
}

impl LengthFilter {
    /// Create a new length filter with inclusive bounds.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        LengthFilter { min_len, max_len }
    }

    /// Get the lower bound.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Get the upper bound.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Check a single candidate.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        let len = candidate.len();
        self.min_len <= len && len <= self.max_len
    }
}

impl Filter for LengthFilter {
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream> {
        let kept: Vec<Candidate> = candidates.filter(|c| self.accepts(c)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new(4, 6);
        let candidates = vec![
            Candidate::new("it", 0),
            Candidate::new("ab", 1),
            Candidate::new("apple", 2),
            Candidate::new("sphinx", 3),
            Candidate::new("jackson", 4),
            Candidate::new("able", 5),
        ];

        let result: Vec<Candidate> = filter
            .filter(Box::new(candidates.into_iter()))
            .unwrap()
            .collect();

        let texts: Vec<&str> = result.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["apple", "sphinx", "able"]);
    }

    #[test]
    fn test_exact_length() {
        let filter = LengthFilter::new(5, 5);
        assert!(filter.accepts(&Candidate::new("crane", 0)));
        assert!(!filter.accepts(&Candidate::new("cranes", 0)));
        assert!(!filter.accepts(&Candidate::new("ran", 0)));
    }

    #[test]
    fn test_counts_characters() {
        let filter = LengthFilter::new(5, 5);
        assert!(filter.accepts(&Candidate::new("éclat", 0)));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new(4, 6).name(), "length");
    }
}
