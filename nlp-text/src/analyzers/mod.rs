//! Text Analyzers Module
//!
//! Tokenizer, rule-table stemmer, stop words and the English analyzer
//! pipeline built from them.

mod english;
mod rules;
mod stemmer;
mod stop_words;
mod tokenizer;
mod traits;

pub use english::EnglishAnalyzer;
pub use rules::{RuleCondition, SuffixRule, ENGLISH_RULES};
pub use stemmer::Stemmer;
pub use stop_words::{StopWords, DEFAULT_ENGLISH_STOP_WORDS};
pub use tokenizer::Tokenizer;
pub use traits::{
    Analyzer, AnalyzerConfig, AnalyzerConfigError, ContractionPolicy, DEFAULT_MIN_STEM_LENGTH,
};
