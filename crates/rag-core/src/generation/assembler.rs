//! Article assembly
//!
//! Sections run one at a time in planned order. A section that fails becomes
//! a visible placeholder, so the article always has one entry per planned
//! section once planning has succeeded.

use std::sync::Arc;

use super::{SectionPlanner, SpeculativeSectionPipeline};
use crate::config::PipelineConfig;
use crate::document::{Article, SectionResult};
use crate::error::RagError;
use crate::provider::ModelProvider;
use crate::storage::VectorStore;

/// Plans a topic and generates every section
pub struct ArticleAssembler {
    planner: SectionPlanner,
    pipeline: SpeculativeSectionPipeline,
}

impl ArticleAssembler {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        store: Arc<dyn VectorStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            planner: SectionPlanner::new(Arc::clone(&provider), config.clone()),
            pipeline: SpeculativeSectionPipeline::new(provider, store, config),
        }
    }

    /// Generate the full article for `topic`
    ///
    /// Only a planning failure is returned as an error.
    pub async fn assemble(&self, topic: &str) -> Result<Article, RagError> {
        let sections = self.planner.plan_sections(topic).await?;

        let mut article = Article {
            sections: Vec::with_capacity(sections.len()),
        };
        for section in sections {
            let result = self.section_or_placeholder(topic, section).await;
            article.sections.push(result);
        }

        let failed = article.sections.iter().filter(|s| s.is_placeholder()).count();
        tracing::info!(
            "Assembled '{}': {} sections, {} failed",
            topic,
            article.sections.len(),
            failed
        );
        Ok(article)
    }

    async fn section_or_placeholder(&self, topic: &str, section: String) -> SectionResult {
        match self.pipeline.run(topic, &section).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Section '{}' of '{}' failed: {}", section, topic, e);
                SectionResult::placeholder(section, e)
            }
        }
    }
}
