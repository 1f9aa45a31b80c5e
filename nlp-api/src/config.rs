use std::fs;
use std::path::{Path, PathBuf};

use nlp_text::{AnalyzerConfig, AnalyzerConfigError, EnglishAnalyzer, StopWords};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request bodies larger than this are rejected unless configured otherwise.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("analyzer config error: {0}")]
    Analyzer(#[from] AnalyzerConfigError),

    #[error("max_body_bytes must be positive")]
    InvalidBodyLimit,

    #[error("failed to load stop words from {path}: {source}")]
    StopWords {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings for the `nlpd` service, loadable from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub max_body_bytes: usize,
    pub analyzer: AnalyzerConfig,
    /// Newline-separated stop word list replacing the built-in English one
    pub stop_words_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            analyzer: AnalyzerConfig::default(),
            stop_words_path: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: ServiceConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidBodyLimit);
        }
        self.analyzer.validate()?;
        Ok(())
    }

    /// Stop words from `stop_words_path`, or the built-in English list.
    pub fn stop_words(&self) -> Result<StopWords, ConfigError> {
        match &self.stop_words_path {
            Some(path) => StopWords::from_file(path).map_err(|source| ConfigError::StopWords {
                path: path.clone(),
                source,
            }),
            None => Ok(StopWords::english()),
        }
    }

    pub fn build_analyzer(&self) -> Result<EnglishAnalyzer, ConfigError> {
        Ok(EnglishAnalyzer::with_stop_words(
            self.analyzer.clone(),
            self.stop_words()?,
        ))
    }
}
