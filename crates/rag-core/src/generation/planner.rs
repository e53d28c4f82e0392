//! Section planning
//!
//! One completion call proposes section titles. Parsing never fails: the
//! response is tried as a whole JSON array, then as the outermost `[...]`
//! substring, and otherwise the fixed default outline is used.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;

use super::prompts;
use crate::config::PipelineConfig;
use crate::error::RagError;
use crate::provider::{CompletionRequest, ModelProvider, ModelTier};

/// Outline used whenever the model's plan cannot be parsed
pub const DEFAULT_SECTIONS: [&str; 7] = [
    "Introduction",
    "History",
    "Development",
    "Applications",
    "Impact",
    "See Also",
    "References",
];

lazy_static! {
    /// First `[` through last `]`, across newlines
    static ref BRACKETED_ARRAY: Regex = Regex::new(r"(?s)\[.*\]").unwrap();
}

/// Result of one parse strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Sections(Vec<String>),
    Failure(String),
}

impl ParseOutcome {
    fn or_else(self, next: impl FnOnce() -> ParseOutcome) -> ParseOutcome {
        match self {
            ParseOutcome::Sections(_) => self,
            ParseOutcome::Failure(_) => next(),
        }
    }
}

/// Parse `candidate` as a non-empty JSON array of strings
pub fn parse_array(candidate: &str) -> ParseOutcome {
    let items = match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Array(items)) => items,
        Ok(other) => return ParseOutcome::Failure(format!("expected array, got {}", kind(&other))),
        Err(e) => return ParseOutcome::Failure(e.to_string()),
    };
    if items.is_empty() {
        return ParseOutcome::Failure("empty array".to_string());
    }

    let mut sections = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(title) => sections.push(title),
            other => {
                return ParseOutcome::Failure(format!("non-string section title: {}", other))
            }
        }
    }
    ParseOutcome::Sections(sections)
}

/// Parse the outermost bracketed substring of `text`
pub fn parse_bracketed(text: &str) -> ParseOutcome {
    match BRACKETED_ARRAY.find(text) {
        Some(found) => parse_array(found.as_str()),
        None => ParseOutcome::Failure("no bracketed array".to_string()),
    }
}

/// Apply both strategies, falling back to `DEFAULT_SECTIONS`
pub fn parse_section_plan(text: &str) -> Vec<String> {
    let text = text.trim();
    match parse_array(text).or_else(|| parse_bracketed(text)) {
        ParseOutcome::Sections(sections) => sections,
        ParseOutcome::Failure(reason) => {
            tracing::warn!("Section plan unparseable ({}), using default outline", reason);
            default_sections()
        }
    }
}

pub fn default_sections() -> Vec<String> {
    DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Derives the ordered section list for a topic
pub struct SectionPlanner {
    provider: Arc<dyn ModelProvider>,
    config: PipelineConfig,
}

impl SectionPlanner {
    pub fn new(provider: Arc<dyn ModelProvider>, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    /// Plan sections for `topic`
    ///
    /// Always yields a non-empty list when the completion call succeeds; only
    /// a provider failure is returned as an error.
    pub async fn plan_sections(&self, topic: &str) -> Result<Vec<String>, RagError> {
        let request = CompletionRequest::prompt(
            prompts::section_plan_prompt(topic),
            ModelTier::Fast,
            self.config.planner_max_tokens,
            self.config.temperature,
        );
        let response = self.provider.complete(&request).await?;
        let sections = parse_section_plan(&response);

        tracing::info!("Planned {} sections for '{}'", sections.len(), topic);
        Ok(sections)
    }
}
