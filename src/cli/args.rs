//! Command line argument parsing for the wordbank CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::filter::FilterKind;
use crate::config::{BuildConfig, CorpusSource, Preset};
use crate::error::{Result, WordbankError};
use crate::source::frequency::FrequencyScale;
use crate::source::tiered::DEFAULT_FILE_PREFIX;

/// wordbank - build embeddable word-game dictionaries
#[derive(Parser, Debug, Clone)]
#[command(name = "wordbank")]
#[command(about = "Build a static dictionary of candidate words for word games")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordbankArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for reports
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordbankArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a dictionary and write it as a list literal
    Build(BuildArgs),

    /// Check an existing artifact against the dictionary invariants
    Verify(VerifyArgs),

    /// Print the resolved build configuration as JSON
    #[command(name = "show-config")]
    ShowConfig(ShowConfigArgs),
}

/// Options that resolve to a [`BuildConfig`].
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Starting configuration
    #[arg(short, long, default_value = "tiered")]
    pub preset: Preset,

    /// JSON configuration file (replaces the preset)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDBANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read a frequency-ranked `word score` file
    #[arg(long, value_name = "FILE", conflicts_with = "wordlist_dir")]
    pub frequency_file: Option<PathBuf>,

    /// Scale of the scores in the frequency file
    #[arg(long)]
    pub scale: Option<FrequencyScale>,

    /// Number of ranked entries to read from the frequency file
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Read tiered word lists from this directory
    #[arg(long, value_name = "DIR")]
    pub wordlist_dir: Option<PathBuf>,

    /// Tiers to read (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tiers: Vec<String>,

    /// Shortest accepted word
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Longest accepted word
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Minimum frequency for the frequency filter
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Filter stages in order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub filters: Vec<FilterKind>,

    /// Extra words to deny (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub deny: Vec<String>,

    /// Name of the exported list
    #[arg(long)]
    pub export_name: Option<String>,
}

impl ConfigArgs {
    /// Resolve preset or config file, then apply command line overrides.
    pub fn resolve(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::from_file(path)?,
            None => BuildConfig::preset(self.preset),
        };

        if let Some(path) = &self.frequency_file {
            config.corpus_source = CorpusSource::FrequencyList {
                path: path.clone(),
                scale: FrequencyScale::default(),
            };
        }
        if let Some(dir) = &self.wordlist_dir {
            let file_prefix = match &config.corpus_source {
                CorpusSource::Wordlists { file_prefix, .. } => file_prefix.clone(),
                CorpusSource::FrequencyList { .. } => DEFAULT_FILE_PREFIX.to_string(),
            };
            config.corpus_source = CorpusSource::Wordlists {
                dir: dir.clone(),
                file_prefix,
            };
        }
        if let Some(new_scale) = self.scale {
            match &mut config.corpus_source {
                CorpusSource::FrequencyList { scale, .. } => *scale = new_scale,
                CorpusSource::Wordlists { .. } => {
                    return Err(WordbankError::invalid_config(
                        "--scale only applies to a frequency-ranked corpus",
                    ));
                }
            }
        }

        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if !self.tiers.is_empty() {
            config.list_tiers = self.tiers.clone();
        }
        if let Some(min_len) = self.min_len {
            config.min_len = min_len;
        }
        if let Some(max_len) = self.max_len {
            config.max_len = max_len;
        }
        if let Some(threshold) = self.threshold {
            config.freq_threshold = threshold;
        }
        if !self.filters.is_empty() {
            config.enabled_filters = self.filters.clone();
        }
        config.extra_denylist.extend(self.deny.iter().cloned());
        if let Some(name) = &self.export_name {
            config.export_name = name.clone();
        }

        Ok(config)
    }
}

/// Arguments for building a dictionary
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output file
    #[arg(short, long, value_name = "OUTPUT", default_value = "words.js")]
    pub output: PathBuf,

    /// Build and report without writing the artifact
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for verifying an artifact
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Artifact to check
    #[arg(value_name = "ARTIFACT")]
    pub artifact: PathBuf,

    /// Shortest allowed word
    #[arg(long, default_value = "4")]
    pub min_len: usize,

    /// Longest allowed word
    #[arg(long, default_value = "6")]
    pub max_len: usize,

    /// Expected name of the exported list
    #[arg(long)]
    pub export_name: Option<String>,
}

/// Arguments for printing the configuration
#[derive(Parser, Debug, Clone)]
pub struct ShowConfigArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_build_command() {
        let args = WordbankArgs::try_parse_from([
            "wordbank",
            "build",
            "--wordlist-dir",
            "/data/scowl/final/english",
            "--tiers",
            "10,20",
            "-o",
            "out/words.js",
        ])
        .unwrap();

        if let Command::Build(build_args) = args.command {
            assert_eq!(build_args.output, PathBuf::from("out/words.js"));
            assert_eq!(build_args.config.tiers, vec!["10", "20"]);

            let config = build_args.config.resolve().unwrap();
            assert_eq!(config.list_tiers, vec!["10", "20"]);
            assert_eq!(
                config.corpus_source,
                CorpusSource::Wordlists {
                    dir: PathBuf::from("/data/scowl/final/english"),
                    file_prefix: DEFAULT_FILE_PREFIX.to_string(),
                }
            );
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_frequency_overrides() {
        let args = WordbankArgs::try_parse_from([
            "wordbank",
            "build",
            "--preset",
            "frequency",
            "--frequency-file",
            "counts.txt",
            "--scale",
            "count",
            "--threshold",
            "1e-5",
            "--top-n",
            "2000",
        ])
        .unwrap();

        let Command::Build(build_args) = args.command else {
            panic!("Expected Build command");
        };
        let config = build_args.config.resolve().unwrap();

        assert_eq!(config.freq_threshold, 1e-5);
        assert_eq!(config.top_n, 2000);
        assert_eq!((config.min_len, config.max_len), (5, 5));
        assert_eq!(
            config.corpus_source,
            CorpusSource::FrequencyList {
                path: PathBuf::from("counts.txt"),
                scale: FrequencyScale::Count,
            }
        );
    }

    #[test]
    fn test_filters_list() {
        let args = WordbankArgs::try_parse_from([
            "wordbank",
            "show-config",
            "--filters",
            "lowercase,alphabetic,length,name-pattern",
        ])
        .unwrap();

        let Command::ShowConfig(show_args) = args.command else {
            panic!("Expected ShowConfig command");
        };
        let config = show_args.config.resolve().unwrap();
        assert_eq!(
            config.enabled_filters,
            vec![
                FilterKind::Lowercase,
                FilterKind::Alphabetic,
                FilterKind::Length,
                FilterKind::NamePattern
            ]
        );
    }

    #[test]
    fn test_scale_needs_frequency_corpus() {
        let args =
            WordbankArgs::try_parse_from(["wordbank", "build", "--scale", "zipf"]).unwrap();
        let Command::Build(build_args) = args.command else {
            panic!("Expected Build command");
        };
        assert!(build_args.config.resolve().is_err());
    }

    #[test]
    fn test_conflicting_sources() {
        let result = WordbankArgs::try_parse_from([
            "wordbank",
            "build",
            "--frequency-file",
            "a.txt",
            "--wordlist-dir",
            "scowl",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = WordbankArgs::try_parse_from(["wordbank", "-q", "verify", "words.js"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = WordbankArgs::try_parse_from(["wordbank", "verify", "words.js"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = WordbankArgs::try_parse_from(["wordbank", "-vv", "verify", "words.js"]).unwrap();
        assert_eq!(args.verbosity(), 3);
    }
}
