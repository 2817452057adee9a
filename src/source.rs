//! Word sources.
//!
//! A [`WordSource`] reads a corpus and yields raw candidates in corpus order,
//! with their original spelling intact. Sources never filter; that is the
//! pipeline's job.
//!
//! - [`frequency::FrequencyListSource`] - ranked `word score` file
//! - [`tiered::TieredWordlistSource`] - SCOWL-style directory of tier files
//! - [`memory::MemorySource`] - words held in memory

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::candidate::Candidate;
use crate::config::{BuildConfig, CorpusSource};
use crate::error::Result;

pub mod frequency;
pub mod memory;
pub mod tiered;

/// Candidates read from a source, plus what had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct SourceLoad {
    /// Raw candidates in corpus order
    pub candidates: Vec<Candidate>,
    /// Optional inputs that were missing and skipped
    pub skipped: Vec<SkippedInput>,
}

/// An optional input that was absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedInput {
    pub name: String,
    pub reason: String,
}

/// Trait for corpora that produce candidates.
pub trait WordSource: Send + Sync {
    /// Read the corpus.
    ///
    /// Returns an error only if the corpus as a whole is unavailable.
    fn load(&self) -> Result<SourceLoad>;

    /// Get the name of this source (for logging and build reports).
    fn name(&self) -> &'static str;

    /// Whether loaded candidates carry frequency scores.
    fn provides_frequencies(&self) -> bool;
}

/// Open the source a configuration points at.
pub fn open_source(config: &BuildConfig) -> Box<dyn WordSource> {
    match &config.corpus_source {
        CorpusSource::FrequencyList { path, scale } => Box::new(
            frequency::FrequencyListSource::new(path, *scale).with_top_n(config.top_n),
        ),
        CorpusSource::Wordlists { dir, file_prefix } => Box::new(
            tiered::TieredWordlistSource::new(dir, config.list_tiers.iter().cloned())
                .with_file_prefix(file_prefix.clone()),
        ),
    }
}

/// Read a text file, replacing invalid UTF-8 instead of failing.
///
/// Older SCOWL releases ship Latin-1 files; a stray byte should cost one
/// word, not the run.
pub(crate) fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
