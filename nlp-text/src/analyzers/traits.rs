//! Analyzer Traits
//!
//! Common interfaces and configuration shared by the text analyzers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest stem the stemmer will produce unless the input itself is shorter.
pub const DEFAULT_MIN_STEM_LENGTH: usize = 3;

/// How the tokenizer treats the fragments after an apostrophe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContractionPolicy {
    /// Drop clitic fragments (`'s`, `'t`, `'re`, ...) and keep the others as tokens.
    #[default]
    DropClitics,
    /// Keep every fragment as its own token.
    Split,
}

impl FromStr for ContractionPolicy {
    type Err = AnalyzerConfigError;

    /// Parse a policy name as written in config files (`drop-clitics`, `split`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop-clitics" => Ok(ContractionPolicy::DropClitics),
            "split" => Ok(ContractionPolicy::Split),
            _ => Err(AnalyzerConfigError::UnknownContractionPolicy(s.to_string())),
        }
    }
}

impl ContractionPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ContractionPolicy::DropClitics => "drop-clitics",
            ContractionPolicy::Split => "split",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalyzerConfigError {
    #[error("min_stem_length must be at least 1, got {0}")]
    MinStemLength(usize),

    #[error("unknown contraction policy {0:?}, expected \"drop-clitics\" or \"split\"")]
    UnknownContractionPolicy(String),
}

/// Configuration for text analyzers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Enable stemming in `analyze`
    pub stemming: bool,
    /// Remove stop words in `analyze`
    pub remove_stop_words: bool,
    /// Minimum stem length guard
    pub min_stem_length: usize,
    /// Apostrophe handling
    pub contraction_policy: ContractionPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stemming: true,
            remove_stop_words: false,
            min_stem_length: DEFAULT_MIN_STEM_LENGTH,
            contraction_policy: ContractionPolicy::DropClitics,
        }
    }
}

impl AnalyzerConfig {
    /// Config for search-style analysis: stop words removed, stems kept.
    pub fn search() -> Self {
        Self {
            remove_stop_words: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), AnalyzerConfigError> {
        if self.min_stem_length == 0 {
            return Err(AnalyzerConfigError::MinStemLength(self.min_stem_length));
        }
        Ok(())
    }
}

/// Common trait for all text analyzers.
pub trait Analyzer: Send + Sync {
    /// Tokenize text into individual lowercase tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Reduce a single word to its stem.
    fn stem(&self, word: &str) -> String;

    /// Get the analyzer configuration.
    fn config(&self) -> &AnalyzerConfig;

    /// Process text: tokenize, filter, and stem.
    fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
    }
}
