//! OpenAI-compatible provider
//!
//! Talks to `/embeddings` and `/chat/completions` under a configurable base
//! URL. Requests are sent once; timeouts come from `ProviderConfig`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::{ChatMessage, CompletionRequest, ModelProvider, ModelTier};
use crate::config::ProviderConfig;
use crate::error::ProviderError;

/// Async client for OpenAI-compatible endpoints
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client,
    embeddings_url: String,
    chat_url: String,
    embedding_model: String,
    fast_model: String,
    accurate_model: String,
}

impl OpenAiProvider {
    /// Build a client from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        anyhow::ensure!(!config.api_key.trim().is_empty(), "missing OpenAI API key");

        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", config.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth).context("invalid OpenAI API key")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .context("failed to build OpenAI HTTP client")?;

        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            embeddings_url: format!("{}/embeddings", base),
            chat_url: format!("{}/chat/completions", base),
            embedding_model: config.embedding_model.clone(),
            fast_model: config.fast_model.clone(),
            accurate_model: config.accurate_model.clone(),
        })
    }

    /// Model name serving a tier
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Accurate => &self.accurate_model,
        }
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: text,
        };
        let resp = self.client.post(&self.embeddings_url).json(&request).send().await?;
        let parsed: EmbeddingResponse = check_status(resp).await?.json().await?;

        parsed
            .data
            .into_iter()
            .min_by_key(|entry| entry.index)
            .map(|entry| entry.embedding)
            .ok_or_else(|| ProviderError::MalformedResponse("no embedding returned".to_string()))
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model: self.model_for(request.tier),
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };
        let resp = self.client.post(&self.chat_url).json(&body).send().await?;
        let parsed: ChatResponse = check_status(resp).await?.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::MalformedResponse("completion has no content".to_string())
            })
    }
}

async fn check_status(resp: Response) -> Result<Response, ProviderError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| "<body unavailable>".to_string());
    Err(ProviderError::Status {
        status: status.as_u16(),
        body,
    })
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: usize,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
