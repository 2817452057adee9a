//! # wordbank
//!
//! Builds a static dictionary of candidate words for word games from a
//! frequency-ranked word list or a directory of SCOWL-style tiered word lists.
//!
//! ## Features
//!
//! - Composable filter pipeline (case, length, alphabet, frequency, proper-noun heuristics)
//! - Pluggable word sources
//! - Deterministic, embeddable list-literal output
//! - Presets for the common 4-6 letter and 5 letter dictionaries
//!
//! ```text
//! WordSource → Pipeline → dedup + sort → denylist → export
//! ```

pub mod analysis;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod source;
pub mod verify;

pub mod prelude {
    pub use crate::analysis::candidate::Candidate;
    pub use crate::analysis::filter::{Filter, FilterKind};
    pub use crate::analysis::pipeline::Pipeline;
    pub use crate::builder::{BuildReport, Dictionary, DictionaryBuilder};
    pub use crate::config::{BuildConfig, CorpusSource, Preset};
    pub use crate::error::{Result, WordbankError};
    pub use crate::source::WordSource;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
