//! Decision-ancestry retrieval.
//!
//! Defines the [`AncestryStore`] port over the external persistent store, the
//! cache gateway that keeps embeddings fresh against it, the lexical
//! term-frequency scorer, and the orchestrator that assembles ranked matches
//! for the review pipeline.

pub mod box_store;
pub mod cache;
pub mod lexical;
mod matches;
pub mod retriever;
pub mod store;

pub use box_store::BoxAncestryStore;
pub use cache::EmbeddingCache;
pub use retriever::{AncestryRetriever, RetrievalRequest};
