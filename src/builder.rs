//! Dictionary builder.
//!
//! The builder ties a [`WordSource`] to a [`Pipeline`] and finishes the run:
//!
//! ```text
//! load → pipeline stages → deduplicate + sort → denylist cleanup
//! ```
//!
//! The result is a [`Dictionary`]: the final word list plus a [`BuildReport`]
//! describing what every step removed.
//!
//! # Examples
//!
//! ```
//! use wordbank::builder::DictionaryBuilder;
//! use wordbank::config::{BuildConfig, Preset};
//! use wordbank::analysis::pipeline::Pipeline;
//! use wordbank::source::memory::MemorySource;
//!
//! let source = MemorySource::from_words(["Apple", "bingo", "it", "ab", "sphinx", "Jackson"]);
//! let pipeline = Pipeline::from_config(&BuildConfig::preset(Preset::Tiered)).unwrap();
//!
//! let dictionary = DictionaryBuilder::new(Box::new(source), pipeline).build().unwrap();
//! assert_eq!(dictionary.words(), &["apple", "bingo", "sphinx"]);
//! ```

use std::collections::BTreeSet;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::filter::denylist::Denylist;
use crate::analysis::pipeline::{Pipeline, StageStats};
use crate::config::BuildConfig;
use crate::error::{Result, WordbankError};
use crate::export;
use crate::source::{SkippedInput, WordSource, open_source};

/// Collapse words into a sorted sequence of distinct entries.
pub fn deduplicate_and_sort<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    words.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Summary of one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Source name
    pub source: String,
    /// Pipeline name
    pub pipeline: String,
    /// Candidates read from the source
    pub corpus_size: usize,
    /// Optional inputs that were missing
    pub skipped: Vec<SkippedInput>,
    /// Per-stage counts
    pub stages: Vec<StageStats>,
    /// Distinct words left after the pipeline
    pub unique_words: usize,
    /// Words removed by the final denylist pass
    pub denylisted: usize,
    /// Words in the dictionary
    pub word_count: usize,
    /// True when nothing survived; almost always a misconfiguration
    pub empty: bool,
}

/// A finished dictionary.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    report: BuildReport,
}

impl Dictionary {
    /// Get the words, sorted and unique.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the build report.
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Serialize as a list literal exported under `export_name`.
    pub fn render(&self, export_name: &str) -> String {
        export::serialize(export_name, &self.words)
    }

    /// Consume the dictionary, keeping only the words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Builds a [`Dictionary`] from a source and a pipeline.
pub struct DictionaryBuilder {
    source: Box<dyn WordSource>,
    pipeline: Pipeline,
    denylist: Denylist,
}

impl DictionaryBuilder {
    /// Create a builder with the default personal name denylist.
    pub fn new(source: Box<dyn WordSource>, pipeline: Pipeline) -> Self {
        DictionaryBuilder {
            source,
            pipeline,
            denylist: Denylist::new(),
        }
    }

    /// Create the builder described by a configuration.
    pub fn from_config(config: &BuildConfig) -> Result<Self> {
        config.validate()?;
        let pipeline = Pipeline::from_config(config)?;
        let denylist = Denylist::new().extend_with(config.extra_denylist.iter().cloned());

        Ok(DictionaryBuilder::new(open_source(config), pipeline).with_denylist(denylist))
    }

    /// Replace the denylist used by the final cleanup pass.
    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    /// Get the pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Run the build.
    pub fn build(&self) -> Result<Dictionary> {
        if self.pipeline.has_filter("frequency") && !self.source.provides_frequencies() {
            return Err(WordbankError::invalid_config(format!(
                "the frequency filter is enabled but source '{}' has no frequency data",
                self.source.name()
            )));
        }

        let load = self.source.load()?;
        let corpus_size = load.candidates.len();
        info!(
            "Loaded {corpus_size} candidates from {} ({} inputs skipped)",
            self.source.name(),
            load.skipped.len()
        );

        let output = self.pipeline.run(load.candidates)?;
        let survivors = output.candidates.len();
        let unique = deduplicate_and_sort(output.candidates.into_iter().map(|c| c.text));
        let unique_words = unique.len();

        let words: Vec<String> = unique
            .into_iter()
            .filter(|word| !self.denylist.contains(word))
            .collect();
        let denylisted = unique_words - words.len();

        let report = BuildReport {
            source: self.source.name().to_string(),
            pipeline: self.pipeline.name().to_string(),
            corpus_size,
            skipped: load.skipped,
            stages: output.stages,
            unique_words,
            denylisted,
            word_count: words.len(),
            empty: words.is_empty(),
        };

        if report.empty {
            warn!(
                "Build produced no words from {corpus_size} candidates; check length bounds and thresholds"
            );
        } else {
            info!(
                "Built {} words ({} duplicates, {denylisted} denylisted)",
                report.word_count,
                survivors - unique_words
            );
        }

        Ok(Dictionary { words, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::source::memory::MemorySource;

    fn tiered(words: &[&str]) -> DictionaryBuilder {
        let pipeline = Pipeline::from_config(&BuildConfig::preset(Preset::Tiered)).unwrap();
        DictionaryBuilder::new(Box::new(MemorySource::from_words(words.iter().copied())), pipeline)
    }

    #[test]
    fn test_deduplicate_and_sort() {
        let words = vec!["pear", "apple", "pear", "fig"]
            .into_iter()
            .map(String::from);
        assert_eq!(deduplicate_and_sort(words), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_scenario_from_mixed_case_input() {
        let dictionary = tiered(&["Apple", "bingo", "it", "ab", "sphinx", "Jackson"])
            .build()
            .unwrap();

        assert_eq!(dictionary.words(), &["apple", "bingo", "sphinx"]);
        assert_eq!(dictionary.report().corpus_size, 6);
        assert!(!dictionary.report().empty);
    }

    #[test]
    fn test_duplicates_after_lowercasing_collapse() {
        let dictionary = tiered(&["Bingo", "bingo", "BINGO"]).build().unwrap();
        assert_eq!(dictionary.words(), &["bingo"]);
        assert_eq!(dictionary.report().unique_words, 1);
    }

    #[test]
    fn test_denylist_is_unconditional() {
        let dictionary = tiered(&["susan", "Karen", "apple"]).build().unwrap();
        assert_eq!(dictionary.words(), &["apple"]);
        assert_eq!(dictionary.report().denylisted, 2);

        let custom = tiered(&["susan", "apple"])
            .with_denylist(Denylist::from_words(["apple"]))
            .build()
            .unwrap();
        assert_eq!(custom.words(), &["susan"]);
    }

    #[test]
    fn test_empty_result_is_reported_not_raised() {
        let dictionary = tiered(&["it", "an", "extraordinary"]).build().unwrap();

        assert!(dictionary.is_empty());
        assert!(dictionary.report().empty);
        assert_eq!(dictionary.report().word_count, 0);
        assert_eq!(dictionary.render("VALID_WORDS"), "export const VALID_WORDS = [];\n");
    }

    #[test]
    fn test_frequency_stage_without_scores_is_rejected() {
        let pipeline = Pipeline::from_config(&BuildConfig::preset(Preset::Frequency)).unwrap();
        let builder = DictionaryBuilder::new(Box::new(MemorySource::from_words(["house"])), pipeline);

        assert!(matches!(
            builder.build(),
            Err(WordbankError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_frequency_pipeline() {
        let pipeline = Pipeline::from_config(&BuildConfig::preset(Preset::Frequency)).unwrap();
        let source = MemorySource::from_scored([
            ("about", 1.2e-3),
            ("House", 2.1e-4),
            ("qwert", 2e-7),
            ("don't", 9e-4),
            ("houses", 5e-5),
        ]);

        let dictionary = DictionaryBuilder::new(Box::new(source), pipeline)
            .build()
            .unwrap();
        assert_eq!(dictionary.words(), &["about", "house"]);
    }
}
