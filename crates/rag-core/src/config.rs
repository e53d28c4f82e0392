//! Configuration for the model provider and the generation pipeline
//!
//! Provider settings come from environment variables; pipeline settings
//! default to the draft/refine budgets the article generator is tuned for.

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Default OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default embedding model used for both corpus and queries
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Default cheap drafting model
pub const DEFAULT_FAST_MODEL: &str = "gpt-3.5-turbo";

/// Default expensive refinement model
pub const DEFAULT_ACCURATE_MODEL: &str = "gpt-4";

/// Default provider request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Model provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL without the trailing endpoint path
    pub base_url: String,
    /// Embedding model identifier
    pub embedding_model: String,
    /// Model serving the fast (draft) tier
    pub fast_model: String,
    /// Model serving the accurate (refine) tier
    pub accurate_model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Create a configuration with default models for the given key
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            fast_model: DEFAULT_FAST_MODEL.to_string(),
            accurate_model: DEFAULT_ACCURATE_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the client at a different OpenAI-compatible server
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables
    ///
    /// Expected variables:
    /// - OPENAI_API_KEY: API key (required)
    /// - OPENAI_BASE_URL: Endpoint base (default: https://api.openai.com/v1)
    /// - RAG_EMBEDDING_MODEL: Embedding model
    /// - RAG_FAST_MODEL: Draft tier model
    /// - RAG_ACCURATE_MODEL: Refine tier model
    /// - RAG_PROVIDER_TIMEOUT_SECS: Request timeout in seconds
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("OPENAI_API_KEY must be set"))?;

        let mut config = Self::new(api_key.trim());

        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        if let Some(model) = lookup("RAG_EMBEDDING_MODEL") {
            config.embedding_model = model;
        }
        if let Some(model) = lookup("RAG_FAST_MODEL") {
            config.fast_model = model;
        }
        if let Some(model) = lookup("RAG_ACCURATE_MODEL") {
            config.accurate_model = model;
        }
        if let Some(raw) = lookup("RAG_PROVIDER_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .map_err(|_| anyhow!("Invalid RAG_PROVIDER_TIMEOUT_SECS: {}", raw))?;
            config.timeout = Duration::from_secs(secs.max(1));
        }

        Ok(config)
    }
}

/// Retrieval and generation budgets for one article
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Records retrieved for the draft stage
    pub draft_top_k: usize,
    /// Records retrieved with the draft's own embedding
    pub refine_top_k: usize,
    /// Character cap per packed record in the draft context
    pub per_doc_limit: usize,
    /// Character cap over all packed records in the draft context
    pub total_limit: usize,
    /// Completion length ceiling for draft and refine calls
    pub section_max_tokens: usize,
    /// Completion length ceiling for the section plan call
    pub planner_max_tokens: usize,
    /// Sampling temperature for every completion
    pub temperature: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            draft_top_k: 3,
            refine_top_k: 3,
            per_doc_limit: 1200,
            total_limit: 6000,
            section_max_tokens: 4096,
            planner_max_tokens: 256,
            temperature: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_only_key_set() {
        let config =
            ProviderConfig::from_vars(lookup_from(&[("OPENAI_API_KEY", " sk-test ")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.fast_model, "gpt-3.5-turbo");
        assert_eq!(config.accurate_model, "gpt-4");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_missing_key_is_rejected() {
        assert!(ProviderConfig::from_vars(lookup_from(&[])).is_err());
        assert!(ProviderConfig::from_vars(lookup_from(&[("OPENAI_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ProviderConfig::from_vars(lookup_from(&[
            ("OPENAI_API_KEY", "sk"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("RAG_FAST_MODEL", "small"),
            ("RAG_PROVIDER_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.fast_model, "small");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout() {
        let result = ProviderConfig::from_vars(lookup_from(&[
            ("OPENAI_API_KEY", "sk"),
            ("RAG_PROVIDER_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_pipeline_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.draft_top_k, 3);
        assert_eq!(config.per_doc_limit, 1200);
        assert_eq!(config.total_limit, 6000);
        assert_eq!(config.section_max_tokens, 4096);
    }
}
