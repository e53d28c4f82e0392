//! Vector retrieval using cosine similarity
//!
//! Every query scores the whole corpus: O(n·d) with no index, and the store
//! is reloaded each time. Results are ordered by descending similarity, with
//! equal scores keeping their corpus order.
//!
//! # Degenerate embeddings
//!
//! A zero-norm embedding (on either side) has no defined cosine similarity.
//! Such pairs score `f32::NEG_INFINITY`, so they sort after every real score
//! and tie among themselves in corpus order.
//!
//! # Example
//!
//! ```rust,no_run
//! use rag_core::search::Retriever;
//! use rag_core::storage::JsonFileStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let retriever = Retriever::new(Arc::new(JsonFileStore::new("vectorStore.json")));
//! let ranked = retriever.retrieve(&[0.1, 0.7, 0.2], 3).await?;
//!
//! for hit in ranked {
//!     println!("{} (similarity: {:.3})", hit.id(), hit.similarity);
//! }
//! # Ok(())
//! # }
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use crate::document::{RankedRecord, VectorRecord};
use crate::error::RagError;
use crate::storage::VectorStore;

/// Cosine similarity `dot(a,b) / (|a|·|b|)`
///
/// Symmetric in its arguments. Returns `f32::NEG_INFINITY` when the result
/// is undefined (zero norm). Callers must pass equal-length slices.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    if similarity.is_nan() {
        f32::NEG_INFINITY
    } else {
        similarity
    }
}

/// Score `records` against `query` and keep the `k` best
///
/// Fails on the first record whose embedding length differs from the query.
pub fn rank_records(
    records: Vec<VectorRecord>,
    query: &[f32],
    k: usize,
) -> Result<Vec<RankedRecord>, RagError> {
    let mut ranked = Vec::with_capacity(records.len());

    for record in records {
        if record.embedding.len() != query.len() {
            return Err(RagError::EmbeddingDimensionMismatch {
                record_id: record.id,
                expected: query.len(),
                found: record.embedding.len(),
            });
        }
        let similarity = cosine_similarity(query, &record.embedding);
        ranked.push(RankedRecord { record, similarity });
    }

    // slice::sort_by is stable: equal scores stay in corpus order
    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(k);

    Ok(ranked)
}

/// Top-k retrieval over a vector store
pub struct Retriever {
    store: Arc<dyn VectorStore>,
}

impl Retriever {
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    /// Return at most `k` records ordered by descending similarity
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` if the store cannot be loaded
    /// - `EmbeddingDimensionMismatch` if any record's embedding length differs
    ///   from `query_embedding`
    pub async fn retrieve(
        &self,
        query_embedding: &[f32],
        k: usize,
    ) -> Result<Vec<RankedRecord>, RagError> {
        let records = self.store.load().await?;
        let corpus_size = records.len();
        let ranked = rank_records(records, query_embedding, k)?;

        tracing::debug!(
            "Retrieved {} of {} records: {:?}",
            ranked.len(),
            corpus_size,
            ranked
                .iter()
                .map(|r| (r.id(), r.similarity))
                .collect::<Vec<_>>()
        );

        Ok(ranked)
    }
}
