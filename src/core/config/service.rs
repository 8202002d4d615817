//! Typed application configuration.
//!
//! Loaded from `config.yml` (path overridable via `MATERNA_CONFIG_PATH`),
//! falling back to the built-in defaults when the file is absent. Secrets
//! (the provider API key) never live in the file; they come from the
//! `MATERNA_API_KEY` environment variable.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::paths::AppPaths;
use crate::core::errors::RagError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub articles: ArticlesConfig,
    pub chunking: ChunkingConfig,
    pub retrieval: RetrievalConfig,
    pub summary: SummaryConfig,
    pub provider: ProviderConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlesConfig {
    pub urls: Vec<String>,
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks, in characters.
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of chunks retrieved per query.
    pub top_k: usize,
    /// Maximum distinct source URLs surfaced in a response.
    pub max_sources: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: usize,
    pub request_timeout_secs: u64,
    pub backoff_base_ms: u64,
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            urls: defaults::DEFAULT_ARTICLE_URLS
                .iter()
                .map(|url| url.to_string())
                .collect(),
            fetch_timeout_secs: defaults::DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            chunk_overlap: defaults::DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            max_sources: defaults::DEFAULT_MAX_SOURCES,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_words: defaults::DEFAULT_SUMMARY_MAX_WORDS,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_PROVIDER_BASE_URL.to_string(),
            chat_model: defaults::DEFAULT_CHAT_MODEL.to_string(),
            embedding_model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_RETRY_MAX_ATTEMPTS,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            backoff_base_ms: defaults::DEFAULT_BACKOFF_BASE_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            articles: ArticlesConfig::default(),
            chunking: ChunkingConfig::default(),
            retrieval: RetrievalConfig::default(),
            summary: SummaryConfig::default(),
            provider: ProviderConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn config_path(paths: &AppPaths) -> PathBuf {
        if let Ok(path) = env::var("MATERNA_CONFIG_PATH") {
            return PathBuf::from(path);
        }

        paths.project_root.join("config.yml")
    }

    /// Load the config file if present, otherwise fall back to defaults.
    pub fn load(paths: &AppPaths) -> Result<Self, RagError> {
        let path = Self::config_path(paths);
        if !path.exists() {
            tracing::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        let config: AppConfig = serde_yaml::from_str(&raw)
            .map_err(|err| RagError::Config(format!("{}: {}", path.display(), err)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RagError> {
        if self.chunking.chunk_size == 0 {
            return Err(RagError::Config("chunking.chunk_size must be > 0".into()));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(RagError::Config(format!(
                "chunking.chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunking.chunk_overlap, self.chunking.chunk_size
            )));
        }
        if self.retrieval.top_k == 0 {
            return Err(RagError::Config("retrieval.top_k must be >= 1".into()));
        }
        if self.retrieval.max_sources == 0 {
            return Err(RagError::Config("retrieval.max_sources must be >= 1".into()));
        }
        if self.summary.max_words == 0 {
            return Err(RagError::Config("summary.max_words must be >= 1".into()));
        }
        if self.retry.max_attempts == 0 {
            return Err(RagError::Config("retry.max_attempts must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.chunk_overlap, 200);
        assert_eq!(config.retrieval.top_k, 3);
        assert!(!config.articles.urls.is_empty());
    }

    #[test]
    fn overlap_must_stay_below_chunk_size() {
        let mut config = AppConfig::default();
        config.chunking.chunk_overlap = config.chunking.chunk_size;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, RagError::Config(_)));
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_sections() {
        let config: AppConfig =
            serde_yaml::from_str("retrieval:\n  top_k: 5\n").expect("partial config parses");

        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.retrieval.max_sources, 3);
        assert_eq!(config.chunking.chunk_size, 1000);
    }
}
