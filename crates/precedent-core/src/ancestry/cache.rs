//! Embedding cache gateway.
//!
//! Keeps the store's per-decision embedding records fresh against the current
//! text. A record whose `source_hash` matches the hash of the normalized
//! current text is served without touching the engine; anything else is
//! recomputed (fallback allowed) and written through. Degenerate all-zero
//! results are returned as `None` rather than cached.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use futures_util::future::join_all;

use precedent_types::decision::DecisionCandidate;
use precedent_types::embedding::EmbeddingRecord;
use precedent_types::error::CacheError;

use crate::embedding::engine::EmbedOptions;
use crate::embedding::EmbeddingEngine;

use super::box_store::BoxAncestryStore;

/// Write-through gateway between the retrieval orchestrator and the store's
/// embedding cache.
pub struct EmbeddingCache {
    engine: Arc<EmbeddingEngine>,
    store: Arc<BoxAncestryStore>,
}

impl EmbeddingCache {
    pub fn new(engine: Arc<EmbeddingEngine>, store: Arc<BoxAncestryStore>) -> Self {
        Self { engine, store }
    }

    /// Ensure a fresh embedding exists for `decision_id`'s current text.
    ///
    /// Returns the stored record unchanged on a hash match, a newly persisted
    /// record after recomputation, or `None` when the text embeds to nothing.
    #[tracing::instrument(name = "ensure_embedding", skip(self, text))]
    pub async fn ensure_embedding(
        &self,
        decision_id: &str,
        text: &str,
    ) -> Result<Option<EmbeddingRecord>, CacheError> {
        let current_hash = EmbeddingEngine::source_hash(text);

        if let Some(record) = self.store.get_embedding(decision_id).await? {
            if record.is_fresh(&current_hash) {
                tracing::debug!(decision_id, "embedding cache hit");
                return Ok(Some(record));
            }
        }

        self.recompute(decision_id, text, current_hash).await
    }

    /// Ensure fresh embeddings for a batch of candidates, keyed by id.
    ///
    /// One batched read, then only stale or missing entries are recomputed --
    /// concurrently, joined before return. Candidates whose text embeds to
    /// nothing are absent from the result.
    #[tracing::instrument(name = "ensure_candidate_embeddings", skip_all, fields(candidates = candidates.len()))]
    pub async fn ensure_candidate_embeddings(
        &self,
        candidates: &[DecisionCandidate],
    ) -> Result<HashMap<String, EmbeddingRecord>, CacheError> {
        let ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();
        let mut stored = self.store.list_embeddings(&ids).await?;

        let mut fresh = HashMap::new();
        let mut stale = Vec::new();
        for candidate in candidates {
            let text = candidate.composed_text();
            let current_hash = EmbeddingEngine::source_hash(&text);
            match stored.remove(&candidate.id) {
                Some(record) if record.is_fresh(&current_hash) => {
                    fresh.insert(candidate.id.clone(), record);
                }
                _ => stale.push((candidate.id.clone(), text, current_hash)),
            }
        }

        if !stale.is_empty() {
            tracing::debug!(stale = stale.len(), "recomputing stale candidate embeddings");
        }
        let recomputed = join_all(
            stale.iter()
                .map(|(id, text, hash)| self.recompute(id, text, hash.clone())),
        )
        .await;
        for result in recomputed {
            if let Some(record) = result? {
                fresh.insert(record.decision_id.clone(), record);
            }
        }

        Ok(fresh)
    }

    /// Recompute and write through one embedding.
    async fn recompute(
        &self,
        decision_id: &str,
        text: &str,
        source_hash: String,
    ) -> Result<Option<EmbeddingRecord>, CacheError> {
        let result = self.engine.embed_text(text, EmbedOptions::default()).await?;
        if result.is_empty() {
            return Ok(None);
        }

        let record = EmbeddingRecord {
            decision_id: decision_id.to_string(),
            source_hash,
            provider: result.provider,
            model: result.model,
            dimensions: result.dimensions,
            vector: result.vector,
            updated_at: Utc::now(),
        };
        self.store.upsert_embedding(&record).await?;
        Ok(Some(record))
    }
}
