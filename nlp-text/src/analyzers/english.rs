//! English Text Analyzer
//!
//! Combines the tokenizer, the stop word list and the stemmer into one
//! configurable pipeline.

use super::stemmer::Stemmer;
use super::stop_words::StopWords;
use super::tokenizer::Tokenizer;
use super::traits::{Analyzer, AnalyzerConfig};

/// English text analyzer.
#[derive(Debug, Clone)]
pub struct EnglishAnalyzer {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    stemmer: Stemmer,
    stop_words: StopWords,
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl EnglishAnalyzer {
    /// Create a new English analyzer with the default stop words.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_stop_words(config, StopWords::english())
    }

    pub fn with_stop_words(config: AnalyzerConfig, stop_words: StopWords) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.contraction_policy),
            stemmer: Stemmer::new(config.min_stem_length),
            stop_words,
            config,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

impl Analyzer for EnglishAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|token| !(self.config.remove_stop_words && self.stop_words.contains(token)))
            .map(|token| {
                if self.config.stemming {
                    self.stem(&token)
                } else {
                    token
                }
            })
            .collect()
    }
}
