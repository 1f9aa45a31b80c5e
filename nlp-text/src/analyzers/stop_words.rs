//! Configurable Stop Words
//!
//! Stop word sets for the analyze pipeline, loadable from files or custom lists.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default English stop words.
pub static DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
    "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
    "to", "was", "were", "will", "with", "this", "but", "they",
    "have", "had", "what", "when", "where", "who", "which", "why", "how",
    "all", "each", "every", "both", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "can", "just", "should", "now", "or", "if", "then", "else",
    "do", "does", "did", "doing", "would", "could", "might",
    "must", "shall", "may", "here", "there", "am", "been", "being",
];

/// Stop words collection. Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create an empty stop words collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a slice of words.
    pub fn from_slice(words: &[&str]) -> Self {
        let words = words.iter().map(|s| s.to_lowercase()).collect();
        Self { words }
    }

    /// Create with the default English stop words.
    pub fn english() -> Self {
        Self::from_slice(DEFAULT_ENGLISH_STOP_WORDS)
    }

    /// Load stop words from a file (one word per line, `#` starts a comment line).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let words = content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|s| s.to_lowercase())
            .collect();

        Ok(Self { words })
    }

    pub fn add(&mut self, word: impl AsRef<str>) {
        self.words.insert(word.as_ref().to_lowercase());
    }

    pub fn remove(&mut self, word: &str) {
        self.words.remove(&word.to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Merge with another stop words collection.
    pub fn merge(&mut self, other: &StopWords) {
        self.words.extend(other.words.iter().cloned());
    }
}
