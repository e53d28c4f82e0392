//! RAG Core - Retrieval and speculative generation for topic articles
//!
//! This crate provides:
//! - Vector record types and the JSON-file vector store
//! - Linear cosine-similarity retrieval and context packing
//! - Section planning with typed parse fallbacks
//! - The two-tier draft/refine section pipeline and article assembly
//! - The model provider seam plus an OpenAI-compatible client
//! - Corpus ingestion for building the vector store file

pub mod config;
pub mod document;
pub mod error;
pub mod generation;
pub mod ingest;
pub mod provider;
pub mod search;
pub mod storage;

// Re-export commonly used types
pub use config::{PipelineConfig, ProviderConfig};
pub use document::{Article, RankedRecord, SectionResult, VectorRecord};
pub use error::{ProviderError, RagError};
pub use generation::{ArticleAssembler, SectionPlanner, SpeculativeSectionPipeline};
pub use provider::{ChatMessage, CompletionRequest, ModelProvider, ModelTier};
pub use search::{Citation, ContextPacker, PackedContext, Retriever};
pub use storage::{InMemoryStore, JsonFileStore, VectorStore};
