//! Tiered flat word lists (SCOWL layout).
//!
//! SCOWL splits English words into size tiers, lower numbers holding more
//! common words. Each tier lives in its own file, `english-words.<tier>`,
//! one word per line. This source reads the union of a whitelist of tiers.
//!
//! A missing or unreadable tier file is not an error: it is logged, recorded
//! in [`SourceLoad::skipped`] and the remaining tiers are used. Only a missing
//! directory, or a whitelist where no file can be read, aborts the run.

use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::analysis::candidate::Candidate;
use crate::error::{Result, WordbankError};
use crate::source::{SkippedInput, SourceLoad, WordSource, read_lossy};

/// File name prefix of SCOWL English word tiers.
pub const DEFAULT_FILE_PREFIX: &str = "english-words.";

/// A source reading a whitelist of tier files from one directory.
#[derive(Debug, Clone)]
pub struct TieredWordlistSource {
    dir: PathBuf,
    tiers: Vec<String>,
    file_prefix: String,
}

impl TieredWordlistSource {
    /// Create a source over `dir` reading the given tiers in order.
    pub fn new<P, I, S>(dir: P, tiers: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TieredWordlistSource {
            dir: dir.as_ref().to_path_buf(),
            tiers: tiers.into_iter().map(Into::into).collect(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    /// Use a different file name prefix.
    pub fn with_file_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Path of the file holding one tier.
    pub fn tier_path(&self, tier: &str) -> PathBuf {
        self.dir.join(format!("{}{}", self.file_prefix, tier))
    }

    /// Get the tier whitelist.
    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }
}

impl WordSource for TieredWordlistSource {
    fn load(&self) -> Result<SourceLoad> {
        if !self.dir.is_dir() {
            return Err(WordbankError::source_unavailable(format!(
                "word list directory not found: {}",
                self.dir.display()
            )));
        }

        let mut load = SourceLoad::default();
        let mut tiers_read = 0;

        for tier in &self.tiers {
            let path = self.tier_path(tier);
            let text = match read_lossy(&path) {
                Ok(text) => text,
                Err(e) => {
                    let reason = if e.kind() == io::ErrorKind::NotFound {
                        format!("{} not found", path.display())
                    } else {
                        format!("{} unreadable: {e}", path.display())
                    };
                    warn!("Skipping tier {tier}: {reason}");
                    load.skipped.push(SkippedInput {
                        name: tier.clone(),
                        reason,
                    });
                    continue;
                }
            };
            let before = load.candidates.len();
            for line in text.lines() {
                let rank = load.candidates.len();
                load.candidates.push(Candidate::new(line, rank));
            }
            tiers_read += 1;
            info!(
                "Read {} lines from tier {tier}",
                load.candidates.len() - before
            );
        }

        if tiers_read == 0 {
            return Err(WordbankError::source_unavailable(format!(
                "none of the tiers [{}] could be read in {}",
                self.tiers.join(", "),
                self.dir.display()
            )));
        }

        Ok(load)
    }

    fn name(&self) -> &'static str {
        "tiered_wordlists"
    }

    fn provides_frequencies(&self) -> bool {
        false
    }
}
