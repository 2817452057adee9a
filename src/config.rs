//! Build configuration.
//!
//! A [`BuildConfig`] fixes everything that determines the output: length
//! bounds, frequency threshold, which filter stages run and in what order,
//! which corpus to read and, for tiered word lists, which tiers. Two runs with
//! equal configurations over an unchanged corpus produce identical artifacts.
//!
//! Configurations come from a [`Preset`], from a JSON file, or from a preset
//! with command-line overrides applied on top.
//!
//! # Examples
//!
//! ```
//! use wordbank::config::{BuildConfig, Preset};
//!
//! let config = BuildConfig::preset(Preset::Frequency);
//! assert_eq!((config.min_len, config.max_len), (5, 5));
//! assert_eq!(config.freq_threshold, 1e-6);
//! config.validate().unwrap();
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::filter::FilterKind;
use crate::analysis::filter::frequency::DEFAULT_FREQUENCY_THRESHOLD;
use crate::analysis::filter::name_pattern::{DEFAULT_NAME_PATTERN, DEFAULT_NAME_SUFFIXES};
use crate::error::{Result, WordbankError};
use crate::source::frequency::FrequencyScale;
use crate::source::tiered::DEFAULT_FILE_PREFIX;

/// Default SCOWL directory, relative to the working directory.
pub const DEFAULT_WORDLIST_DIR: &str = "scowl/wordlist-master/final/english";

/// Default frequency-ranked corpus file.
pub const DEFAULT_FREQUENCY_FILE: &str = "en_frequencies.txt";

/// Default tiers, most common first.
pub const DEFAULT_LIST_TIERS: &[&str] = &["10", "20", "35", "40"];

/// Default number of ranked entries read from a frequency corpus.
pub const DEFAULT_TOP_N: usize = 50_000;

/// Default name of the exported list.
pub const DEFAULT_EXPORT_NAME: &str = "VALID_WORDS";

/// Stages every configuration must enable; the rest are optional.
pub const REQUIRED_FILTERS: &[FilterKind] = &[
    FilterKind::Lowercase,
    FilterKind::Alphabetic,
    FilterKind::Length,
];

static EXPORT_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier pattern")
});

/// Named configurations reproducing the known generator variants.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Frequency-ranked corpus, five-letter words above 1e-6
    Frequency,
    /// SCOWL tiers 10-40, four to six letters
    Tiered,
    /// `tiered` plus the proper-noun heuristics
    TieredNames,
}

impl Preset {
    /// Preset name as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Frequency => "frequency",
            Preset::Tiered => "tiered",
            Preset::TieredNames => "tiered-names",
        }
    }
}

/// Where candidate words come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CorpusSource {
    /// A ranked `word score` file, most frequent first.
    FrequencyList {
        path: PathBuf,
        #[serde(default)]
        scale: FrequencyScale,
    },
    /// A directory of flat word lists, one file per tier.
    Wordlists {
        dir: PathBuf,
        #[serde(default = "default_file_prefix")]
        file_prefix: String,
    },
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

impl CorpusSource {
    /// A frequency corpus at the default location.
    pub fn default_frequency_list() -> Self {
        CorpusSource::FrequencyList {
            path: PathBuf::from(DEFAULT_FREQUENCY_FILE),
            scale: FrequencyScale::default(),
        }
    }

    /// SCOWL word lists at the default location.
    pub fn default_wordlists() -> Self {
        CorpusSource::Wordlists {
            dir: PathBuf::from(DEFAULT_WORDLIST_DIR),
            file_prefix: default_file_prefix(),
        }
    }

    /// Check whether this corpus carries frequency scores.
    pub fn has_frequencies(&self) -> bool {
        matches!(self, CorpusSource::FrequencyList { .. })
    }
}

/// Configuration for one dictionary build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Label used in logs and reports.
    pub name: String,

    /// Shortest accepted word, in characters.
    pub min_len: usize,

    /// Longest accepted word, in characters.
    pub max_len: usize,

    /// Minimum usage frequency (exclusive) for the frequency stage.
    pub freq_threshold: f64,

    /// Filter stages, in the order they run.
    pub enabled_filters: Vec<FilterKind>,

    /// Corpus to read.
    pub corpus_source: CorpusSource,

    /// Tier tokens read from a word list directory.
    pub list_tiers: Vec<String>,

    /// Number of ranked entries read from a frequency corpus.
    pub top_n: usize,

    /// Identifier of the exported list.
    pub export_name: String,

    /// Regex for the vowel-initial name shape.
    pub name_pattern: String,

    /// Name-forming suffixes.
    pub name_suffixes: Vec<String>,

    /// Words added to the built-in personal name denylist.
    pub extra_denylist: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::preset(Preset::Tiered)
    }
}

impl BuildConfig {
    /// Create the configuration for a preset.
    pub fn preset(preset: Preset) -> Self {
        let base = BuildConfig {
            name: preset.as_str().to_string(),
            min_len: 4,
            max_len: 6,
            freq_threshold: DEFAULT_FREQUENCY_THRESHOLD,
            enabled_filters: vec![
                FilterKind::Lowercase,
                FilterKind::Alphabetic,
                FilterKind::Length,
            ],
            corpus_source: CorpusSource::default_wordlists(),
            list_tiers: DEFAULT_LIST_TIERS.iter().map(|s| s.to_string()).collect(),
            top_n: DEFAULT_TOP_N,
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
            name_suffixes: DEFAULT_NAME_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            extra_denylist: Vec::new(),
        };

        match preset {
            Preset::Tiered => base,
            Preset::TieredNames => {
                let mut config = base;
                config.enabled_filters.extend([
                    FilterKind::Capitalization,
                    FilterKind::NamePattern,
                ]);
                config
            }
            Preset::Frequency => BuildConfig {
                min_len: 5,
                max_len: 5,
                enabled_filters: vec![
                    FilterKind::Lowercase,
                    FilterKind::Length,
                    FilterKind::Alphabetic,
                    FilterKind::Frequency,
                ],
                corpus_source: CorpusSource::default_frequency_list(),
                ..base
            },
        }
    }

    /// Load a configuration from a JSON file. Missing fields take the
    /// `tiered` preset values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            WordbankError::invalid_config(format!(
                "cannot read config {}: {e}",
                path.display()
            ))
        })?;
        let config: BuildConfig = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Serialize this configuration as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check whether a filter stage is enabled.
    pub fn is_enabled(&self, kind: FilterKind) -> bool {
        self.enabled_filters.contains(&kind)
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 {
            return Err(WordbankError::invalid_config("min_len must be at least 1"));
        }
        if self.min_len > self.max_len {
            return Err(WordbankError::invalid_config(format!(
                "min_len ({}) is greater than max_len ({})",
                self.min_len, self.max_len
            )));
        }
        if !self.freq_threshold.is_finite() || self.freq_threshold < 0.0 {
            return Err(WordbankError::invalid_config(format!(
                "freq_threshold must be a non-negative number, got {}",
                self.freq_threshold
            )));
        }
        for required in REQUIRED_FILTERS {
            if !self.is_enabled(*required) {
                return Err(WordbankError::invalid_config(format!(
                    "the {} stage is required in enabled_filters",
                    required.as_str()
                )));
            }
        }
        if self.enabled_filters.first() != Some(&FilterKind::Lowercase) {
            return Err(WordbankError::invalid_config(
                "lowercase must be the first stage in enabled_filters",
            ));
        }
        if !EXPORT_IDENTIFIER.is_match(&self.export_name) {
            return Err(WordbankError::invalid_config(format!(
                "export_name {:?} is not a valid identifier",
                self.export_name
            )));
        }

        match &self.corpus_source {
            CorpusSource::FrequencyList { .. } => {
                if self.top_n == 0 {
                    return Err(WordbankError::invalid_config("top_n must be at least 1"));
                }
            }
            CorpusSource::Wordlists { .. } => {
                if self.list_tiers.is_empty() {
                    return Err(WordbankError::invalid_config(
                        "list_tiers is empty; name at least one tier",
                    ));
                }
                if self.is_enabled(FilterKind::Frequency) {
                    return Err(WordbankError::invalid_config(
                        "the frequency filter needs a frequency-ranked corpus",
                    ));
                }
            }
        }

        Ok(())
    }
}
