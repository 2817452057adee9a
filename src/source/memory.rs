//! In-memory word source.

use crate::analysis::candidate::Candidate;
use crate::error::Result;
use crate::source::{SourceLoad, WordSource};

/// A source holding its words in memory.
///
/// # Examples
///
/// ```
/// use wordbank::source::WordSource;
/// use wordbank::source::memory::MemorySource;
///
/// let source = MemorySource::from_words(["Apple", "bingo"]);
/// let load = source.load().unwrap();
/// assert_eq!(load.candidates[0].original, "Apple");
/// assert!(!source.provides_frequencies());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<(String, Option<f64>)>,
    scored: bool,
}

impl MemorySource {
    /// Create a source from plain words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemorySource {
            entries: words.into_iter().map(|w| (w.into(), None)).collect(),
            scored: false,
        }
    }

    /// Create a source from `(word, frequency)` pairs, most frequent first.
    pub fn from_scored<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        MemorySource {
            entries: words.into_iter().map(|(w, f)| (w.into(), Some(f))).collect(),
            scored: true,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordSource for MemorySource {
    fn load(&self) -> Result<SourceLoad> {
        let candidates = self
            .entries
            .iter()
            .enumerate()
            .map(|(rank, (word, frequency))| {
                let candidate = Candidate::new(word.as_str(), rank);
                match frequency {
                    Some(f) => candidate.with_frequency(*f),
                    None => candidate,
                }
            })
            .collect();

        Ok(SourceLoad {
            candidates,
            skipped: Vec::new(),
        })
    }

    fn name(&self) -> &'static str {
        "memory"
    }

    fn provides_frequencies(&self) -> bool {
        self.scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_source() {
        let source = MemorySource::from_scored([("house", 2e-4), ("xylyl", 1e-9)]);
        let load = source.load().unwrap();

        assert!(source.provides_frequencies());
        assert_eq!(source.len(), 2);
        assert_eq!(load.candidates[1].rank, 1);
        assert_eq!(load.candidates[1].frequency, Some(1e-9));
    }
}
