//! DashMap-backed in-memory ancestry store.
//!
//! Implements [`AncestryStore`] for tests and for hosts that hydrate the
//! candidate set per request instead of querying a persistent backend.
//! Candidates are returned in insertion order so bounded listings are stable.

use std::collections::HashMap;
use std::sync::Mutex;

use dashmap::DashMap;

use precedent_core::ancestry::store::AncestryStore;
use precedent_types::decision::DecisionCandidate;
use precedent_types::embedding::EmbeddingRecord;
use precedent_types::error::StoreError;

/// In-memory ancestry store.
#[derive(Default)]
pub struct InMemoryAncestryStore {
    embeddings: DashMap<String, EmbeddingRecord>,
    candidates: Mutex<Vec<DecisionCandidate>>,
}

impl InMemoryAncestryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate set.
    pub fn set_candidates(&self, candidates: Vec<DecisionCandidate>) {
        *self.candidates.lock().expect("candidate lock poisoned") = candidates;
    }

    /// Add one candidate to the end of the listing order.
    pub fn push_candidate(&self, candidate: DecisionCandidate) {
        self.candidates
            .lock()
            .expect("candidate lock poisoned")
            .push(candidate);
    }

    /// Number of cached embedding records.
    pub fn embedding_count(&self) -> usize {
        self.embeddings.len()
    }
}

impl AncestryStore for InMemoryAncestryStore {
    async fn get_embedding(
        &self,
        decision_id: &str,
    ) -> Result<Option<EmbeddingRecord>, StoreError> {
        Ok(self.embeddings.get(decision_id).map(|r| r.clone()))
    }

    async fn list_embeddings(
        &self,
        decision_ids: &[String],
    ) -> Result<HashMap<String, EmbeddingRecord>, StoreError> {
        Ok(decision_ids
            .iter()
            .filter_map(|id| self.embeddings.get(id).map(|r| (id.clone(), r.clone())))
            .collect())
    }

    async fn upsert_embedding(&self, record: &EmbeddingRecord) -> Result<(), StoreError> {
        self.embeddings
            .insert(record.decision_id.clone(), record.clone());
        Ok(())
    }

    async fn list_candidates(
        &self,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<DecisionCandidate>, StoreError> {
        Ok(self
            .candidates
            .lock()
            .expect("candidate lock poisoned")
            .iter()
            .filter(|c| c.id != exclude_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use precedent_core::ancestry::{AncestryRetriever, BoxAncestryStore, RetrievalRequest};
    use precedent_core::embedding::EmbeddingEngine;
    use precedent_types::ancestry::RetrievalMethod;
    use precedent_types::config::EmbeddingConfig;

    fn candidate(id: &str, name: &str, body: &str) -> DecisionCandidate {
        DecisionCandidate {
            id: id.to_string(),
            name: name.to_string(),
            summary: String::new(),
            body_text: body.to_string(),
            executive_summary: String::new(),
            gate_decision: "Proceed".to_string(),
            dqs: Some(68.0),
            final_recommendation: None,
            blockers: Vec::new(),
            required_revisions: Vec::new(),
            last_run_at: None,
        }
    }

    #[tokio::test]
    async fn upsert_then_get_round_trips() {
        let store = InMemoryAncestryStore::new();
        let record = EmbeddingRecord {
            decision_id: "dec-1".to_string(),
            source_hash: "abc".to_string(),
            provider: precedent_types::embedding::EmbeddingProviderKind::LocalFallback,
            model: "hash-v1".to_string(),
            dimensions: 2,
            vector: vec![0.6, 0.8],
            updated_at: chrono::Utc::now(),
        };

        store.upsert_embedding(&record).await.unwrap();
        let loaded = store.get_embedding("dec-1").await.unwrap().unwrap();
        assert_eq!(loaded.source_hash, "abc");
        assert!(store.get_embedding("dec-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_excludes_and_bounds() {
        let store = InMemoryAncestryStore::new();
        store.set_candidates(
            (0..5)
                .map(|i| candidate(&format!("dec-{i}"), "Name", "body"))
                .collect(),
        );

        let listed = store.list_candidates("dec-1", 3).await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["dec-0", "dec-2", "dec-3"]);
    }

    /// End-to-end: local engine + in-memory store through the retriever.
    #[tokio::test]
    async fn retrieval_flow_populates_cache_and_ranks() {
        let store = InMemoryAncestryStore::new();
        store.set_candidates(vec![
            candidate("a", "SMB expansion", "smb segment cac payback pressure churn"),
            candidate("b", "Infra migration", "datacenter failover runbook drill"),
        ]);

        let engine = Arc::new(EmbeddingEngine::new(EmbeddingConfig::default()));
        let boxed = Arc::new(BoxAncestryStore::new(store));
        let retriever = AncestryRetriever::new(engine, Arc::clone(&boxed));

        let request = RetrievalRequest::new(
            "dec-q",
            "smb segment cac payback pressure churn analysis",
        );
        let first = retriever.retrieve(&request).await;
        assert!(!first.similar_decisions.is_empty());

        // Second run is served from cache and must rank identically.
        let second = retriever.retrieve(&request).await;
        assert_eq!(
            first.similar_decisions.len(),
            second.similar_decisions.len()
        );
        for (a, b) in first.similar_decisions.iter().zip(&second.similar_decisions) {
            assert_eq!(a.decision_id, b.decision_id);
            assert_eq!(a.similarity, b.similarity);
        }
        assert_eq!(first.retrieval_method, second.retrieval_method);
    }

    #[tokio::test]
    async fn retrieval_with_no_candidates_is_empty_lexical() {
        let store = InMemoryAncestryStore::new();
        let engine = Arc::new(EmbeddingEngine::new(EmbeddingConfig::default()));
        let retriever = AncestryRetriever::new(engine, Arc::new(BoxAncestryStore::new(store)));

        let result = retriever
            .retrieve(&RetrievalRequest::new("dec-q", "anything at all"))
            .await;
        assert!(result.similar_decisions.is_empty());
        assert_eq!(result.retrieval_method, RetrievalMethod::LexicalFallback);
    }
}
