//! Corpus ingestion
//!
//! Turns newline-delimited text into vector records, one embedding call per
//! line. Lines that fail to embed are logged and skipped, never retried.

use crate::document::VectorRecord;
use crate::provider::ModelProvider;

/// Title given to every ingested record unless overridden
pub const DEFAULT_TITLE: &str = "OpenWebText";

/// Prefix of positional record ids
pub const DEFAULT_ID_PREFIX: &str = "owt";

/// Ingestion settings
#[derive(Debug, Clone)]
pub struct IngestOptions {
    pub title: String,
    pub id_prefix: String,
    /// Stop once this many records have been embedded
    pub limit: Option<usize>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            limit: None,
        }
    }
}

/// Outcome of one ingestion run
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub records: Vec<VectorRecord>,
    /// Positions (1-based) whose embedding call failed
    pub failed: Vec<usize>,
    /// Non-empty input lines seen
    pub lines: usize,
}

/// Embed every non-blank line of `input`
///
/// Ids are `{prefix}_{n}`, with `n` the 1-based position among non-empty raw
/// lines, so whitespace-only lines leave gaps in the numbering.
pub async fn ingest_lines(
    provider: &dyn ModelProvider,
    input: &str,
    options: &IngestOptions,
) -> IngestReport {
    let lines: Vec<&str> = input.split('\n').filter(|line| !line.is_empty()).collect();
    let mut report = IngestReport {
        lines: lines.len(),
        ..IngestReport::default()
    };

    for (i, raw) in lines.iter().enumerate() {
        if options.limit.is_some_and(|limit| report.records.len() >= limit) {
            break;
        }
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let position = i + 1;
        tracing::info!("Embedding {}/{}", position, lines.len());

        match provider.embed(text).await {
            Ok(embedding) => report.records.push(VectorRecord {
                id: format!("{}_{}", options.id_prefix, position),
                title: options.title.clone(),
                text: text.to_string(),
                embedding,
            }),
            Err(e) => {
                tracing::error!("Failed to embed line {}: {}", position, e);
                report.failed.push(position);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::generation::test_support::ScriptedProvider;
    use pretty_assertions::assert_eq;

    fn provider() -> ScriptedProvider {
        ScriptedProvider::new(|_| Ok(String::new())).with_embedder(|text| {
            if text.contains("bad") {
                Err(ProviderError::Status {
                    status: 400,
                    body: "too long".to_string(),
                })
            } else {
                Ok(vec![text.len() as f32, 1.0])
            }
        })
    }

    #[tokio::test]
    async fn test_ids_title_and_trimming() {
        let provider = provider();
        let report =
            ingest_lines(&provider, "  first line \nsecond\n", &IngestOptions::default()).await;

        let ids: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["owt_1", "owt_2"]);
        assert_eq!(report.records[0].text, "first line");
        assert_eq!(report.records[0].title, "OpenWebText");
        assert_eq!(
            provider.embeds(),
            vec!["first line".to_string(), "second".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_lines_skipped_without_position() {
        let provider = provider();
        let report =
            ingest_lines(&provider, "a\n\n\nb\n   \nc", &IngestOptions::default()).await;

        let ids: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["owt_1", "owt_2", "owt_4"]);
        assert_eq!(report.lines, 4);
    }

    #[tokio::test]
    async fn test_failed_lines_are_skipped() {
        let provider = provider();
        let report =
            ingest_lines(&provider, "good\nbad line\nfine", &IngestOptions::default()).await;

        let ids: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["owt_1", "owt_3"]);
        assert_eq!(report.failed, vec![2]);
    }

    #[tokio::test]
    async fn test_limit_caps_records() {
        let provider = provider();
        let options = IngestOptions {
            limit: Some(2),
            ..IngestOptions::default()
        };
        let report = ingest_lines(&provider, "a\nb\nc\nd", &options).await;

        assert_eq!(report.records.len(), 2);
        assert_eq!(provider.embeds().len(), 2);
    }
}
