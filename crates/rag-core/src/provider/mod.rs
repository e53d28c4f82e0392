//! Model provider seam
//!
//! Embedding and completion are remote capabilities. They are reached through
//! the `ModelProvider` trait so the pipeline can be driven by any backend,
//! including scripted test doubles.

pub mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ProviderError;

/// Which generation tier serves a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Cheap drafting model
    Fast,
    /// Stronger, more expensive refinement model
    Accurate,
}

/// Chat message sent to a completion model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Completion request shared by every provider
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: usize,
    pub temperature: f32,
    pub tier: ModelTier,
}

impl CompletionRequest {
    /// Single user-message request
    pub fn prompt(
        prompt: impl Into<String>,
        tier: ModelTier,
        max_tokens: usize,
        temperature: f32,
    ) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
            max_tokens,
            temperature,
            tier,
        }
    }
}

/// Trait implemented by embedding/completion backends
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Embed one text into a fixed-length vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;

    /// Generate text for a chat request
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}
