//! Vector store backends
//!
//! The store is read-only at query time. `JsonFileStore` re-reads its file
//! on every `load`, so there is no cache to invalidate: edits to the file are
//! visible to the very next retrieval, at the cost of a full read per query.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::document::VectorRecord;
use crate::error::RagError;

/// Read contract for a corpus of embedded records
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Load every record, in corpus order
    async fn load(&self) -> Result<Vec<VectorRecord>, RagError>;
}

/// Store backed by a single JSON array file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write records as a pretty-printed JSON array, replacing the file
    pub async fn save(&self, records: &[VectorRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write vector store {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl VectorStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<VectorRecord>, RagError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            RagError::StoreUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let records: Vec<VectorRecord> = serde_json::from_slice(&bytes).map_err(|e| {
            RagError::StoreUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

/// Store holding records in memory, used by tests and tooling
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<VectorRecord>,
}

impl InMemoryStore {
    pub fn new(records: Vec<VectorRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl VectorStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<VectorRecord>, RagError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(id: &str) -> VectorRecord {
        VectorRecord {
            id: id.to_string(),
            title: "OpenWebText".to_string(),
            text: format!("text {}", id),
            embedding: vec![0.5, 0.5],
        }
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("vectorStore.json"));
        let records = vec![record("owt_1"), record("owt_2")];

        store.save(&records).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, RagError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vectorStore.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, RagError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_reload_sees_file_changes() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("vectorStore.json"));

        store.save(&[record("a")]).await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 1);

        store.save(&[record("a"), record("b")]).await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 2);
    }
}
