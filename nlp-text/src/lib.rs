//! Deterministic English tokenization and stemming.
//!
//! [`tokenize`] and [`stem`] use the default configuration; build a
//! [`Tokenizer`], [`Stemmer`] or [`EnglishAnalyzer`] for anything else.

pub mod analyzers;

pub use analyzers::{
    Analyzer, AnalyzerConfig, AnalyzerConfigError, ContractionPolicy, EnglishAnalyzer,
    RuleCondition, Stemmer, StopWords, SuffixRule, Tokenizer, DEFAULT_ENGLISH_STOP_WORDS,
    DEFAULT_MIN_STEM_LENGTH, ENGLISH_RULES,
};

/// Split `text` into lowercase word tokens.
///
/// ```
/// assert_eq!(nlp_text::tokenize("who's on first?"), vec!["who", "on", "first"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// Reduce `word` to its stem.
///
/// ```
/// assert_eq!(nlp_text::stem("Running"), "run");
/// ```
pub fn stem(word: &str) -> String {
    Stemmer::default().stem(word)
}
