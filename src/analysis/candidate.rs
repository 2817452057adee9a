//! Candidate words and candidate streams.
//!
//! A [`Candidate`] is one entry read from a corpus. It carries two spellings:
//! `text`, which filters rewrite (lowercasing), and `original`, which is never
//! touched after the source produces it. Heuristics that depend on the corpus
//! casing read `original`, so they see real capitalization no matter where in
//! the pipeline they run.
//!
//! # Examples
//!
//! ```
//! use wordbank::analysis::candidate::Candidate;
//!
//! let candidate = Candidate::new("Jackson", 3).with_frequency(2.5e-6);
//! assert_eq!(candidate.text, "Jackson");
//! assert_eq!(candidate.original, "Jackson");
//! assert_eq!(candidate.rank, 3);
//! assert_eq!(candidate.frequency, Some(2.5e-6));
//!
//! let lowered = candidate.with_text("jackson");
//! assert_eq!(lowered.text, "jackson");
//! assert_eq!(lowered.original, "Jackson");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word read from a corpus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Working text, rewritten by normalizing filters
    pub text: String,

    /// Text exactly as the corpus spelled it
    pub original: String,

    /// 0-based position in the source (frequency rank for ranked corpora)
    pub rank: usize,

    /// Estimated usage frequency as a proportion of all tokens, if known
    pub frequency: Option<f64>,
}

impl Candidate {
    /// Create a new candidate with no frequency information.
    pub fn new<S: Into<String>>(text: S, rank: usize) -> Self {
        let text = text.into();
        Candidate {
            original: text.clone(),
            text,
            rank,
            frequency: None,
        }
    }

    /// Attach a frequency score.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Clone this candidate with updated working text, keeping the original.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut candidate = self.clone();
        candidate.text = text.into();
        candidate
    }

    /// Length of the working text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the working text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A candidate stream is the sequence of candidates passed between filters.
pub type CandidateStream = Box<dyn Iterator<Item = Candidate>>;

/// Trait for types that can produce a candidate stream.
pub trait IntoCandidateStream {
    /// Convert this type into a candidate stream.
    fn into_candidate_stream(self) -> CandidateStream;
}

impl IntoCandidateStream for Vec<Candidate> {
    fn into_candidate_stream(self) -> CandidateStream {
        Box::new(self.into_iter())
    }
}
