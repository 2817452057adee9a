//! Frequency-ranked corpus.
//!
//! The file lists one `word score` pair per line, most frequent first, in the
//! shape produced by dumping a wordfreq top-N list:
//!
//! ```text
//! # word frequency
//! the 0.0537
//! of 0.0288
//! house 0.000214
//! ```
//!
//! Blank lines and `#` comments are ignored. Lines that do not parse are
//! skipped. Scores are converted to proportions of all tokens according to
//! [`FrequencyScale`].

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::candidate::Candidate;
use crate::config::DEFAULT_TOP_N;
use crate::error::{Result, WordbankError};
use crate::source::{SourceLoad, WordSource, read_lossy};

/// How scores in a frequency file are expressed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyScale {
    /// Proportion of all tokens (wordfreq `word_frequency`)
    #[default]
    Proportion,
    /// Raw occurrence counts, normalized by the file total
    Count,
    /// wordfreq Zipf scale: log10 of occurrences per billion tokens
    Zipf,
}

impl FrequencyScale {
    /// Convert one score to a proportion, given the sum of all scores in the file.
    pub fn to_proportion(&self, score: f64, total: f64) -> f64 {
        match self {
            FrequencyScale::Proportion => score,
            FrequencyScale::Count => {
                if total > 0.0 {
                    score / total
                } else {
                    0.0
                }
            }
            FrequencyScale::Zipf => 10f64.powf(score - 9.0),
        }
    }
}

/// Parse frequency list text into ranked candidates.
///
/// Ranks follow line order among the lines that parse. Only the first `top_n`
/// entries are returned, but `Count` scores are normalized by the total of the
/// whole file.
pub fn parse_frequency_list(text: &str, scale: FrequencyScale, top_n: usize) -> Vec<Candidate> {
    let mut entries: Vec<(&str, f64)> = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next().map(str::parse::<f64>)) {
            (Some(word), Some(Ok(score))) if score.is_finite() && score >= 0.0 => {
                entries.push((word, score));
            }
            _ => debug!("skipping malformed frequency line {}: {line:?}", line_num + 1),
        }
    }

    let total: f64 = match scale {
        FrequencyScale::Count => entries.iter().map(|(_, score)| score).sum(),
        _ => 0.0,
    };

    entries
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(rank, (word, score))| {
            Candidate::new(word, rank).with_frequency(scale.to_proportion(score, total))
        })
        .collect()
}

/// A source reading a ranked frequency file.
#[derive(Debug, Clone)]
pub struct FrequencyListSource {
    path: PathBuf,
    scale: FrequencyScale,
    top_n: usize,
}

impl FrequencyListSource {
    /// Create a source for the given file.
    pub fn new<P: AsRef<Path>>(path: P, scale: FrequencyScale) -> Self {
        FrequencyListSource {
            path: path.as_ref().to_path_buf(),
            scale,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Limit the source to the `top_n` most frequent entries.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FrequencyListSource {
    fn load(&self) -> Result<SourceLoad> {
        let text = read_lossy(&self.path).map_err(|e| {
            WordbankError::source_unavailable(format!(
                "cannot read frequency list {}: {e}",
                self.path.display()
            ))
        })?;

        let candidates = parse_frequency_list(&text, self.scale, self.top_n);
        info!(
            "Loaded {} ranked words from {}",
            candidates.len(),
            self.path.display()
        );

        Ok(SourceLoad {
            candidates,
            skipped: Vec::new(),
        })
    }

    fn name(&self) -> &'static str {
        "frequency_list"
    }

    fn provides_frequencies(&self) -> bool {
        true
    }
}
