//! Candidate analysis for wordbank.
//!
//! This module holds the word type that flows through a build, the filter
//! stages that accept or reject candidates, and the pipeline that chains them:
//!
//! ```text
//! WordSource → Lowercase → Length → Alphabetic → Frequency → Name heuristics
//! ```

pub mod candidate;
pub mod filter;
pub mod pipeline;

/// Normalize a word: lowercase it and nothing else.
///
/// Punctuation and whitespace are left in place; rejecting them is the job of
/// [`filter::alphabetic::AlphabeticFilter`].
///
/// # Examples
///
/// ```
/// use wordbank::analysis::normalize;
///
/// assert_eq!(normalize("Apple"), "apple");
/// assert_eq!(normalize("O'Neil"), "o'neil");
/// ```
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Check that a word is non-empty and made only of letters.
///
/// # Examples
///
/// ```
/// use wordbank::analysis::is_alphabetic;
///
/// assert!(is_alphabetic("sphinx"));
/// assert!(is_alphabetic("café"));
/// assert!(!is_alphabetic("mp3s"));
/// assert!(!is_alphabetic("don't"));
/// assert!(!is_alphabetic(""));
/// ```
pub fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Length of a word in characters, not bytes.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
