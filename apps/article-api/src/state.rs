//! Application state for the article API
//!
//! Holds the assembler wired to the model provider and vector store.

use anyhow::Result;
use rag_core::provider::OpenAiProvider;
use rag_core::{
    ArticleAssembler, JsonFileStore, ModelProvider, PipelineConfig, ProviderConfig, VectorStore,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Shared application state
pub struct AppState {
    /// Planner + per-section pipeline
    pub assembler: ArticleAssembler,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        store: Arc<dyn VectorStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            assembler: ArticleAssembler::new(provider, store, config),
        }
    }

    /// Initialize from environment configuration and a store file path
    pub fn from_env(store_path: &Path) -> Result<Self> {
        let provider_config = ProviderConfig::from_env()?;
        info!(
            "Provider: {} (fast: {}, accurate: {}, embeddings: {})",
            provider_config.base_url,
            provider_config.fast_model,
            provider_config.accurate_model,
            provider_config.embedding_model
        );

        let provider = Arc::new(OpenAiProvider::new(&provider_config)?);
        let store = Arc::new(JsonFileStore::new(store_path));

        Ok(Self::new(provider, store, PipelineConfig::default()))
    }
}
