//! BoxAncestryStore -- object-safe dynamic dispatch wrapper for AncestryStore.
//!
//! Same blanket-impl pattern as `BoxRemoteEmbedder`: an object-safe
//! `AncestryStoreDyn` trait with boxed futures, a blanket impl for all
//! `T: AncestryStore`, and a wrapper struct that delegates.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use precedent_types::decision::DecisionCandidate;
use precedent_types::embedding::EmbeddingRecord;
use precedent_types::error::StoreError;

use super::store::AncestryStore;

/// Object-safe version of [`AncestryStore`] with boxed futures.
pub trait AncestryStoreDyn: Send + Sync {
    fn get_embedding_boxed<'a>(
        &'a self,
        decision_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<EmbeddingRecord>, StoreError>> + Send + 'a>>;

    fn list_embeddings_boxed<'a>(
        &'a self,
        decision_ids: &'a [String],
    ) -> Pin<
        Box<dyn Future<Output = Result<HashMap<String, EmbeddingRecord>, StoreError>> + Send + 'a>,
    >;

    fn upsert_embedding_boxed<'a>(
        &'a self,
        record: &'a EmbeddingRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>>;

    fn list_candidates_boxed<'a>(
        &'a self,
        exclude_id: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DecisionCandidate>, StoreError>> + Send + 'a>>;
}

/// Blanket implementation: any `AncestryStore` automatically implements `AncestryStoreDyn`.
impl<T: AncestryStore> AncestryStoreDyn for T {
    fn get_embedding_boxed<'a>(
        &'a self,
        decision_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<EmbeddingRecord>, StoreError>> + Send + 'a>>
    {
        Box::pin(self.get_embedding(decision_id))
    }

    fn list_embeddings_boxed<'a>(
        &'a self,
        decision_ids: &'a [String],
    ) -> Pin<
        Box<dyn Future<Output = Result<HashMap<String, EmbeddingRecord>, StoreError>> + Send + 'a>,
    > {
        Box::pin(self.list_embeddings(decision_ids))
    }

    fn upsert_embedding_boxed<'a>(
        &'a self,
        record: &'a EmbeddingRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(self.upsert_embedding(record))
    }

    fn list_candidates_boxed<'a>(
        &'a self,
        exclude_id: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<DecisionCandidate>, StoreError>> + Send + 'a>> {
        Box::pin(self.list_candidates(exclude_id, limit))
    }
}

/// Type-erased ancestry store.
///
/// Wraps any `AncestryStore` implementation behind dynamic dispatch so the
/// retriever and cache gateway can share one store handle regardless of the
/// backend the host wired in.
pub struct BoxAncestryStore {
    inner: Box<dyn AncestryStoreDyn + Send + Sync>,
}

impl BoxAncestryStore {
    /// Wrap a concrete `AncestryStore` in a type-erased box.
    pub fn new<T: AncestryStore + 'static>(store: T) -> Self {
        Self {
            inner: Box::new(store),
        }
    }

    /// Load the cached embedding for one decision, if any.
    pub async fn get_embedding(
        &self,
        decision_id: &str,
    ) -> Result<Option<EmbeddingRecord>, StoreError> {
        self.inner.get_embedding_boxed(decision_id).await
    }

    /// Load cached embeddings for a batch of decisions, keyed by id.
    pub async fn list_embeddings(
        &self,
        decision_ids: &[String],
    ) -> Result<HashMap<String, EmbeddingRecord>, StoreError> {
        self.inner.list_embeddings_boxed(decision_ids).await
    }

    /// Insert or replace the cached embedding for a decision.
    pub async fn upsert_embedding(&self, record: &EmbeddingRecord) -> Result<(), StoreError> {
        self.inner.upsert_embedding_boxed(record).await
    }

    /// Load up to `limit` historical candidates, excluding `exclude_id`.
    pub async fn list_candidates(
        &self,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<DecisionCandidate>, StoreError> {
        self.inner.list_candidates_boxed(exclude_id, limit).await
    }
}
