//! Search module - Linear vector retrieval and context packing
//!
//! This module provides:
//! - Cosine similarity ranking over the full corpus (no index)
//! - A `Retriever` that reloads the store on every call
//! - Greedy, length-bounded packing of ranked records into prompt context

pub mod context;
pub mod vector;

pub use context::{Citation, ContextPacker, PackedContext, PackedEntry};
pub use vector::{cosine_similarity, rank_records, Retriever};
