//! Filter pipeline that chains stages in order.
//!
//! A [`Pipeline`] owns an ordered list of [`Filter`]s and feeds the output of
//! each stage into the next. [`Pipeline::run`] also counts how many candidates
//! every stage removed, which ends up in the build report.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordbank::analysis::candidate::Candidate;
//! use wordbank::analysis::filter::alphabetic::AlphabeticFilter;
//! use wordbank::analysis::filter::length::LengthFilter;
//! use wordbank::analysis::filter::lowercase::LowercaseFilter;
//! use wordbank::analysis::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new()
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(LengthFilter::new(4, 6)))
//!     .add_filter(Arc::new(AlphabeticFilter::new()));
//!
//! let words = ["Apple", "it", "x-ray", "Bingo"];
//! let candidates = words.iter().enumerate().map(|(i, w)| Candidate::new(*w, i)).collect();
//! let output = pipeline.run(candidates).unwrap();
//!
//! let texts: Vec<_> = output.candidates.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(texts, vec!["apple", "bingo"]);
//! assert_eq!(output.stages[1].removed(), 1);
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::candidate::{Candidate, IntoCandidateStream};
use crate::analysis::filter::alphabetic::AlphabeticFilter;
use crate::analysis::filter::capitalization::CapitalizationFilter;
use crate::analysis::filter::denylist::{Denylist, DenylistFilter};
use crate::analysis::filter::frequency::FrequencyFilter;
use crate::analysis::filter::length::LengthFilter;
use crate::analysis::filter::lowercase::LowercaseFilter;
use crate::analysis::filter::name_pattern::NamePatternFilter;
use crate::analysis::filter::{Filter, FilterKind};
use crate::config::BuildConfig;
use crate::error::Result;

/// Candidate counts before and after one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStats {
    pub name: String,
    pub input: usize,
    pub output: usize,
}

impl StageStats {
    /// Number of candidates the stage dropped.
    pub fn removed(&self) -> usize {
        self.input.saturating_sub(self.output)
    }
}

/// Result of running a pipeline to completion.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Surviving candidates, in source order
    pub candidates: Vec<Candidate>,
    /// One entry per stage, in pipeline order
    pub stages: Vec<StageStats>,
}

/// An ordered chain of filters.
#[derive(Clone)]
pub struct Pipeline {
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl Pipeline {
    /// Create an empty pipeline. An empty pipeline passes everything through.
    pub fn new() -> Self {
        Pipeline {
            filters: Vec::new(),
            name: "pipeline".to_string(),
        }
    }

    /// Build the pipeline described by a configuration.
    ///
    /// Stages appear in the order of `enabled_filters`.
    pub fn from_config(config: &BuildConfig) -> Result<Self> {
        let mut pipeline = Pipeline::new().with_name(config.name.clone());

        for kind in &config.enabled_filters {
            let filter: Arc<dyn Filter> = match kind {
                FilterKind::Lowercase => Arc::new(LowercaseFilter::new()),
                FilterKind::Length => Arc::new(LengthFilter::new(config.min_len, config.max_len)),
                FilterKind::Alphabetic => Arc::new(AlphabeticFilter::new()),
                FilterKind::Frequency => Arc::new(FrequencyFilter::new(config.freq_threshold)),
                FilterKind::NamePattern => Arc::new(NamePatternFilter::with_rules(
                    &config.name_pattern,
                    config.name_suffixes.iter().cloned(),
                )?),
                FilterKind::Capitalization => Arc::new(CapitalizationFilter::new()),
                FilterKind::Denylist => Arc::new(DenylistFilter::with_denylist(
                    Denylist::new().extend_with(config.extra_denylist.iter().cloned()),
                )),
            };
            pipeline = pipeline.add_filter(filter);
        }

        Ok(pipeline)
    }

    /// Add a filter to the end of the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this pipeline.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the pipeline name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the filters, in order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Check whether a stage with the given name is present.
    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.iter().any(|f| f.name() == name)
    }

    /// Apply every stage, recording per-stage counts.
    pub fn run(&self, candidates: Vec<Candidate>) -> Result<PipelineOutput> {
        let mut current = candidates;
        let mut stages = Vec::with_capacity(self.filters.len());

        for filter in &self.filters {
            let input = current.len();
            current = filter.filter(current.into_candidate_stream())?.collect();

            let stats = StageStats {
                name: filter.name().to_string(),
                input,
                output: current.len(),
            };
            debug!(
                "{}: {} -> {} candidates ({} removed)",
                stats.name,
                stats.input,
                stats.output,
                stats.removed()
            );
            stages.push(stats);
        }

        Ok(PipelineOutput {
            candidates: current,
            stages,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
