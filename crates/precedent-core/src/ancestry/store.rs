//! Ancestry store port.
//!
//! The persistent store owns both the candidate snapshots and the cached
//! decision embeddings; this subsystem only reads and upserts through this
//! trait. The store is treated as independently concurrency-safe -- upserts
//! are idempotent per decision id, and repeated writes with an unchanged
//! source hash are no-ops by construction.

use std::collections::HashMap;

use precedent_types::decision::DecisionCandidate;
use precedent_types::embedding::EmbeddingRecord;
use precedent_types::error::StoreError;

/// Trait over the external persistent store.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in precedent-infra or in the host.
pub trait AncestryStore: Send + Sync {
    /// Load the cached embedding for one decision, if any.
    fn get_embedding(
        &self,
        decision_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<EmbeddingRecord>, StoreError>> + Send;

    /// Load cached embeddings for a batch of decisions, keyed by id.
    /// Missing ids are simply absent from the map.
    fn list_embeddings(
        &self,
        decision_ids: &[String],
    ) -> impl std::future::Future<Output = Result<HashMap<String, EmbeddingRecord>, StoreError>> + Send;

    /// Insert or replace the cached embedding for a decision.
    fn upsert_embedding(
        &self,
        record: &EmbeddingRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Load up to `limit` historical candidates, excluding `exclude_id`.
    fn list_candidates(
        &self,
        exclude_id: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<DecisionCandidate>, StoreError>> + Send;
}
