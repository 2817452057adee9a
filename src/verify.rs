//! Invariant checks for generated dictionaries.
//!
//! A consumer of the artifact relies on every entry being a lowercase,
//! purely alphabetic word within the length bounds, on entries being unique
//! and sorted, and on no denylisted name slipping through. [`verify`] checks
//! all of these on an existing word list and reports every violation.

use serde::{Deserialize, Serialize};

use crate::analysis::filter::denylist::Denylist;
use crate::analysis::{char_len, is_alphabetic};

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    NotLowercase { word: String },
    NotAlphabetic { word: String },
    Length { word: String, len: usize },
    Duplicate { word: String },
    Unsorted { previous: String, word: String },
    Denylisted { word: String },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::NotLowercase { word } => write!(f, "{word:?} is not lowercase"),
            Violation::NotAlphabetic { word } => write!(f, "{word:?} is not alphabetic"),
            Violation::Length { word, len } => write!(f, "{word:?} has length {len}"),
            Violation::Duplicate { word } => write!(f, "{word:?} appears more than once"),
            Violation::Unsorted { previous, word } => {
                write!(f, "{word:?} comes after {previous:?}")
            }
            Violation::Denylisted { word } => write!(f, "{word:?} is denylisted"),
        }
    }
}

/// Outcome of verifying a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    pub word_count: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub violations: Vec<Violation>,
}

impl VerifyReport {
    /// True when no invariant is broken.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check every dictionary invariant on `words`.
///
/// # Examples
///
/// ```
/// use wordbank::analysis::filter::denylist::Denylist;
/// use wordbank::verify::verify;
///
/// let words = vec!["apple".to_string(), "bingo".to_string()];
/// assert!(verify(&words, 4, 6, &Denylist::new()).is_valid());
///
/// let words = vec!["bingo".to_string(), "Apple".to_string()];
/// assert_eq!(verify(&words, 4, 6, &Denylist::new()).violations.len(), 2);
/// ```
pub fn verify(words: &[String], min_len: usize, max_len: usize, denylist: &Denylist) -> VerifyReport {
    let mut violations = Vec::new();

    for (i, word) in words.iter().enumerate() {
        if word.chars().any(char::is_uppercase) {
            violations.push(Violation::NotLowercase { word: word.clone() });
        }
        if !is_alphabetic(word) {
            violations.push(Violation::NotAlphabetic { word: word.clone() });
        }
        let len = char_len(word);
        if len < min_len || len > max_len {
            violations.push(Violation::Length {
                word: word.clone(),
                len,
            });
        }
        if denylist.contains(word) {
            violations.push(Violation::Denylisted { word: word.clone() });
        }

        if i > 0 {
            let previous = &words[i - 1];
            if previous == word {
                violations.push(Violation::Duplicate { word: word.clone() });
            } else if previous > word {
                violations.push(Violation::Unsorted {
                    previous: previous.clone(),
                    word: word.clone(),
                });
            }
        }
    }

    VerifyReport {
        word_count: words.len(),
        min_len,
        max_len,
        violations,
    }
}
