//! Speculative draft/refine pipeline for a single section
//!
//! # Stages
//!
//! 1. **Draft**: embed `"{section} of {topic}"`, retrieve the top records,
//!    pack them into a tight context and let the fast tier write the section
//!    from those sources only.
//! 2. **Refine**: embed the draft itself and retrieve a fresh set of records
//!    with that embedding, so the evidence follows what was actually written.
//!    The accurate tier then expands the draft. Only the draft is sent; the
//!    retrieved records are not re-injected as text.
//!
//! Any failure is returned to the caller. Nothing is retried here.

use std::sync::Arc;

use super::prompts;
use crate::config::PipelineConfig;
use crate::document::{RankedRecord, SectionResult};
use crate::error::RagError;
use crate::provider::{CompletionRequest, ModelProvider, ModelTier};
use crate::search::{Citation, ContextPacker, Retriever};
use crate::storage::VectorStore;

/// Output of the draft stage
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub text: String,
    /// Sources packed into the draft prompt, by citation index
    pub citations: Vec<Citation>,
}

/// Two-tier generation for one section
pub struct SpeculativeSectionPipeline {
    provider: Arc<dyn ModelProvider>,
    retriever: Retriever,
    packer: ContextPacker,
    config: PipelineConfig,
}

impl SpeculativeSectionPipeline {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        store: Arc<dyn VectorStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            provider,
            retriever: Retriever::new(store),
            packer: ContextPacker::new(config.per_doc_limit, config.total_limit),
            config,
        }
    }

    /// Draft then refine `section` of `topic`
    pub async fn run(&self, topic: &str, section: &str) -> Result<SectionResult, RagError> {
        let draft = self.draft(topic, section).await?;
        let content = self.refine(topic, section, &draft).await?;

        Ok(SectionResult {
            section: section.to_string(),
            content,
        })
    }

    /// Fast-tier draft grounded in records retrieved for the section query
    pub async fn draft(&self, topic: &str, section: &str) -> Result<Draft, RagError> {
        let query = format!("{} of {}", section, topic);
        let query_embedding = self.provider.embed(&query).await?;

        let ranked = self
            .retriever
            .retrieve(&query_embedding, self.config.draft_top_k)
            .await?;
        let context = self.packer.pack(&ranked);
        tracing::debug!(
            "Draft context for '{}': {} records, {} chars, {}",
            section,
            context.entries.len(),
            context.packed_chars(),
            context.citation_line()
        );

        let request = CompletionRequest::prompt(
            prompts::draft_prompt(topic, section, &context.block()),
            ModelTier::Fast,
            self.config.section_max_tokens,
            self.config.temperature,
        );
        let text = self.provider.complete(&request).await?;

        Ok(Draft {
            text,
            citations: context.citations,
        })
    }

    /// Accurate-tier refinement of a draft
    pub async fn refine(
        &self,
        topic: &str,
        section: &str,
        draft: &Draft,
    ) -> Result<String, RagError> {
        let evidence = self.draft_evidence(draft).await?;
        tracing::debug!(
            "Refine evidence for '{}': {:?}",
            section,
            evidence.iter().map(|r| r.id()).collect::<Vec<_>>()
        );

        let request = CompletionRequest::prompt(
            prompts::refine_prompt(topic, section, &draft.text),
            ModelTier::Accurate,
            self.config.section_max_tokens,
            self.config.temperature,
        );
        Ok(self.provider.complete(&request).await?)
    }

    /// Records nearest to the draft's own embedding
    pub async fn draft_evidence(&self, draft: &Draft) -> Result<Vec<RankedRecord>, RagError> {
        let draft_embedding = self.provider.embed(&draft.text).await?;
        self.retriever
            .retrieve(&draft_embedding, self.config.refine_top_k)
            .await
    }
}
