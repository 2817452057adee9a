//! Frequency filter implementation.
//!
//! Length and alphabet checks let through abbreviations, foreign fragments
//! and OCR noise. Requiring a minimum usage frequency removes most of them.
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::candidate::Candidate;
//! use wordbank::analysis::filter::frequency::FrequencyFilter;
//!
//! let filter = FrequencyFilter::new(1e-6);
//! assert!(filter.accepts(&Candidate::new("house", 0).with_frequency(2.3e-4)));
//! assert!(!filter.accepts(&Candidate::new("xylyl", 0).with_frequency(4.0e-9)));
//! assert!(!filter.accepts(&Candidate::new("house", 0)));
//! ```

use crate::analysis::candidate::{Candidate, CandidateStream};
use crate::analysis::filter::Filter;
use crate::error::Result;

/// Default minimum frequency, as a proportion of all tokens.
pub const DEFAULT_FREQUENCY_THRESHOLD: f64 = 1e-6;

/// A filter that keeps candidates whose frequency is strictly above a threshold.
///
/// Candidates without a frequency score are dropped.
#[derive(Clone, Debug)]
pub struct FrequencyFilter {
    threshold: f64,
}

impl FrequencyFilter {
    /// Create a new frequency filter.
    pub fn new(threshold: f64) -> Self {
        FrequencyFilter { threshold }
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Check a single candidate.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        candidate
            .frequency
            .is_some_and(|frequency| frequency > self.threshold)
    }
}

impl Default for FrequencyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY_THRESHOLD)
    }
}

impl Filter for FrequencyFilter {
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream> {
        let kept: Vec<Candidate> = candidates.filter(|c| self.accepts(c)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str, frequency: f64) -> Candidate {
        Candidate::new(text, 0).with_frequency(frequency)
    }

    #[test]
    fn test_frequency_filter() {
        let filter = FrequencyFilter::default();
        let candidates = vec![
            scored("about", 1.1e-3),
            scored("zzyzx", 3.0e-9),
            scored("edge", 1e-6),
            Candidate::new("plain", 3),
        ];

        let result: Vec<Candidate> = filter
            .filter(Box::new(candidates.into_iter()))
            .unwrap()
            .collect();

        // threshold is exclusive, unscored candidates are dropped
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "about");
    }

    #[test]
    fn test_raising_threshold_never_adds_words() {
        let words = vec![
            scored("alpha", 5e-4),
            scored("bravo", 2e-5),
            scored("charm", 7e-7),
            scored("delta", 3e-6),
        ];

        let mut previous = usize::MAX;
        for threshold in [0.0, 1e-7, 1e-6, 1e-5, 1e-4, 1e-3] {
            let filter = FrequencyFilter::new(threshold);
            let kept = words.iter().filter(|c| filter.accepts(c)).count();
            assert!(kept <= previous);
            previous = kept;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(FrequencyFilter::default().name(), "frequency");
    }
}
