//! Alphabetic filter implementation.
//!
//! Drops anything that is not purely letters: digits, apostrophes, hyphens,
//! whitespace and empty lines all fail.

use crate::analysis::candidate::{Candidate, CandidateStream};
use crate::analysis::filter::Filter;
use crate::analysis::is_alphabetic;
use crate::error::Result;

/// A filter that keeps candidates made only of alphabetic characters.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    /// Create a new alphabetic filter.
    pub fn new() -> Self {
        AlphabeticFilter
    }

    /// Check a single candidate.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        is_alphabetic(&candidate.text)
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream> {
        let kept: Vec<Candidate> = candidates.filter(|c| self.accepts(c)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
