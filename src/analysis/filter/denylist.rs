//! Denylist filter implementation.
//!
//! A fixed set of common personal names that must never reach the generated
//! dictionary, whatever the other stages decided. The builder subtracts the
//! denylist as its last step; [`DenylistFilter`] exposes the same set as an
//! ordinary pipeline stage.
//!
//! Only names that are not also ordinary words are listed ("frank", "grace"
//! and "mark" stay out).
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::filter::denylist::Denylist;
//!
//! let denylist = Denylist::new().extend_with(vec!["Zelda"]);
//! assert!(denylist.contains("susan"));
//! assert!(denylist.contains("zelda"));
//! assert!(!denylist.contains("bingo"));
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::candidate::{Candidate, CandidateStream};
use crate::analysis::filter::Filter;
use crate::error::Result;

/// Common personal names removed from every dictionary.
pub const DEFAULT_NAME_DENYLIST: &[&str] = &[
    "aaron", "adam", "alan", "albert", "alice", "andrew", "angela", "anna", "anne", "arthur",
    "barbara", "betty", "brenda", "brian", "carl", "carlos", "carol", "chris", "craig", "daniel",
    "david", "debra", "dennis", "diana", "donald", "donna", "edward", "emily", "emma", "eric",
    "ethan", "gary", "george", "gloria", "helen", "henry", "jackson", "jacob", "james", "jason",
    "jeff", "jenny", "jerry", "jesse", "john", "jose", "joseph", "joshua", "julia", "karen",
    "kathy", "kelly", "kevin", "laura", "linda", "lisa", "louis", "maria", "mary", "megan", "mike",
    "nancy", "paul", "peter", "ralph", "randy", "roger", "ryan", "sarah", "scott", "sharon",
    "steve", "susan", "terry", "thomas", "tyler", "walter", "wayne",
];

static DEFAULT_NAME_DENYLIST_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_NAME_DENYLIST
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A set of lowercase words to remove unconditionally.
#[derive(Clone, Debug)]
pub struct Denylist {
    words: Arc<AHashSet<String>>,
}

impl Denylist {
    /// Create a denylist holding the default personal names.
    pub fn new() -> Self {
        Denylist {
            words: Arc::new(DEFAULT_NAME_DENYLIST_SET.clone()),
        }
    }

    /// Create a denylist from an arbitrary word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Denylist {
            words: Arc::new(words.into_iter().map(|s| s.into().to_lowercase()).collect()),
        }
    }

    /// Add words to this denylist.
    pub fn extend_with<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged = Arc::unwrap_or_clone(self.words);
        merged.extend(words.into_iter().map(|s| s.into().to_lowercase()));
        Denylist {
            words: Arc::new(merged),
        }
    }

    /// Check if a word is denied.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of denied words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the denylist is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the denied words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new()
    }
}

/// A filter that drops denylisted candidates.
#[derive(Clone, Debug, Default)]
pub struct DenylistFilter {
    denylist: Denylist,
}

impl DenylistFilter {
    /// Create a filter over the default denylist.
    pub fn new() -> Self {
        Self::with_denylist(Denylist::new())
    }

    /// Create a filter over a custom denylist.
    pub fn with_denylist(denylist: Denylist) -> Self {
        DenylistFilter { denylist }
    }

    /// Get the denylist.
    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Check a single candidate.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        !self.denylist.contains(&candidate.text)
    }
}

impl Filter for DenylistFilter {
    fn filter(&self, candidates: CandidateStream) -> Result<CandidateStream> {
        let kept: Vec<Candidate> = candidates.filter(|c| self.accepts(c)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "denylist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_denylist_is_lowercase_and_alphabetic() {
        for word in DEFAULT_NAME_DENYLIST {
            assert_eq!(*word, word.to_lowercase());
            assert!(word.chars().all(char::is_alphabetic));
        }
        assert_eq!(Denylist::new().len(), DEFAULT_NAME_DENYLIST.len());
    }

    #[test]
    fn test_denylist_filter() {
        let filter = DenylistFilter::new();
        let candidates = vec![
            Candidate::new("karen", 0),
            Candidate::new("apple", 1),
            Candidate::new("susan", 2),
        ];

        let result: Vec<Candidate> = filter
            .filter(Box::new(candidates.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "apple");
    }

    #[test]
    fn test_from_words_lowercases() {
        let denylist = Denylist::from_words(vec!["Foo", "BAR"]);
        assert!(denylist.contains("foo"));
        assert!(denylist.contains("bar"));
        assert!(!denylist.contains("susan"));
    }

    #[test]
    fn test_extend_keeps_defaults() {
        let denylist = Denylist::new().extend_with(vec!["quux"]);
        assert!(denylist.contains("quux"));
        assert!(denylist.contains("peter"));
        assert_eq!(denylist.len(), DEFAULT_NAME_DENYLIST.len() + 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(DenylistFilter::new().name(), "denylist");
    }
}
