//! Filter stages that accept, reject or rewrite candidates.
//!
//! Every stage of a build is a [`Filter`]. Most stages are plain predicates
//! and expose an `accepts` method alongside the stream-level `filter`.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Normalizes working text to lowercase
//! - [`length::LengthFilter`] - Keeps words within an inclusive length range
//! - [`alphabetic::AlphabeticFilter`] - Keeps words made only of letters
//! - [`frequency::FrequencyFilter`] - Keeps words above a usage frequency
//! - [`name_pattern::NamePatternFilter`] - Drops words shaped like given names
//! - [`capitalization::CapitalizationFilter`] - Drops words capitalized like proper nouns in the corpus
//! - [`denylist::DenylistFilter`] - Drops words from a fixed denylist
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::candidate::Candidate;
//! use wordbank::analysis::filter::Filter;
//! use wordbank::analysis::filter::length::LengthFilter;
//!
//! let filter = LengthFilter::new(4, 6);
//! let candidates = vec![Candidate::new("it", 0), Candidate::new("bingo", 1)];
//! let kept: Vec<_> = filter.filter(Box::new(candidates.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "bingo");
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::candidate::CandidateStream;
use crate::error::Result;

/// Trait for filters that transform candidate streams.
///
/// Filters receive a stream of candidates and produce a new stream. They may
/// drop candidates or rewrite their working text, but never touch
/// `Candidate::original`.
pub trait Filter: Send + Sync {
    /// Apply this filter to a candidate stream.
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream>;

    /// Get the name of this filter (for logging and build reports).
    fn name(&self) -> &'static str;
}

/// The filter stages a configuration can enable, by name.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Lowercase normalization
    Lowercase,
    /// Inclusive length bounds
    Length,
    /// Letters only
    Alphabetic,
    /// Minimum usage frequency
    Frequency,
    /// Vowel-initial and suffix name shapes
    NamePattern,
    /// Proper-noun capitalization in the original token
    Capitalization,
    /// Fixed denylist, as a pipeline stage
    Denylist,
}

impl FilterKind {
    /// The name reported by the filter built for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Lowercase => "lowercase",
            FilterKind::Length => "length",
            FilterKind::Alphabetic => "alphabetic",
            FilterKind::Frequency => "frequency",
            FilterKind::NamePattern => "name_pattern",
            FilterKind::Capitalization => "capitalization",
            FilterKind::Denylist => "denylist",
        }
    }
}

// Individual filter modules
pub mod alphabetic;
pub mod capitalization;
pub mod denylist;
pub mod frequency;
pub mod length;
pub mod lowercase;
pub mod name_pattern;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_kind_serde_names() {
        let json = serde_json::to_string(&FilterKind::NamePattern).unwrap();
        assert_eq!(json, "\"name-pattern\"");

        let kind: FilterKind = serde_json::from_str("\"capitalization\"").unwrap();
        assert_eq!(kind, FilterKind::Capitalization);
    }

    #[test]
    fn test_filter_kind_names_match_filters() {
        use crate::analysis::filter::length::LengthFilter;
        use crate::analysis::filter::lowercase::LowercaseFilter;

        assert_eq!(FilterKind::Lowercase.as_str(), LowercaseFilter::new().name());
        assert_eq!(FilterKind::Length.as_str(), LengthFilter::new(1, 2).name());
    }
}
