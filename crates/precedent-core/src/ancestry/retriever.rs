//! Ancestry retrieval orchestrator.
//!
//! Composes the query text, loads a bounded candidate set, attempts the
//! vector path through the cache gateway, and falls back to lexical scoring
//! whenever the vector path fails or comes back empty. Store and provider
//! failures are logged and absorbed -- this feeds a review pipeline that must
//! not stall, so availability wins over ranking precision.

use std::sync::Arc;

use precedent_types::ancestry::{AncestryMatch, AncestryRetrieval, RetrievalMethod};
use precedent_types::decision::DecisionCandidate;
use precedent_types::error::CacheError;

use crate::embedding::{cosine_similarity, EmbeddingEngine};
use crate::text::normalize_whitespace;

use super::box_store::BoxAncestryStore;
use super::cache::EmbeddingCache;
use super::lexical::score_lexical;
use super::matches::build_match;

/// Default number of matches returned.
pub const DEFAULT_TOP_K: usize = 3;

/// Default bound on the loaded candidate set.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 60;

const TOP_K_MIN: usize = 1;
const TOP_K_MAX: usize = 10;
const CANDIDATE_LIMIT_MIN: usize = 10;
const CANDIDATE_LIMIT_MAX: usize = 250;

/// One ancestry retrieval request.
#[derive(Debug, Clone)]
pub struct RetrievalRequest {
    pub decision_id: String,
    pub decision_name: Option<String>,
    pub decision_summary: Option<String>,
    pub body_text: String,
    /// Clamped to [1, 10].
    pub top_k: usize,
    /// Clamped to [10, 250].
    pub candidate_limit: usize,
}

impl RetrievalRequest {
    /// A request with the default `top_k` and `candidate_limit`.
    pub fn new(decision_id: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            decision_id: decision_id.into(),
            decision_name: None,
            decision_summary: None,
            body_text: body_text.into(),
            top_k: DEFAULT_TOP_K,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }

    /// The text the query decision is scored by: name, summary, and body.
    fn query_text(&self) -> String {
        let parts = [
            self.decision_name.as_deref().unwrap_or(""),
            self.decision_summary.as_deref().unwrap_or(""),
            self.body_text.as_str(),
        ];
        normalize_whitespace(&parts.join(" "))
    }
}

/// Retrieves semantically similar historical decisions with their recorded
/// outcomes.
pub struct AncestryRetriever {
    store: Arc<BoxAncestryStore>,
    cache: EmbeddingCache,
}

impl AncestryRetriever {
    pub fn new(engine: Arc<EmbeddingEngine>, store: Arc<BoxAncestryStore>) -> Self {
        let cache = EmbeddingCache::new(engine, Arc::clone(&store));
        Self { store, cache }
    }

    /// Retrieve ranked ancestry matches for a decision.
    ///
    /// Never fails: expected operational conditions (empty input, store or
    /// provider unavailability) degrade to an emptier or lexically-scored
    /// result instead.
    #[tracing::instrument(name = "retrieve_ancestry", skip(self, request), fields(decision_id = %request.decision_id))]
    pub async fn retrieve(&self, request: &RetrievalRequest) -> AncestryRetrieval {
        let top_k = request.top_k.clamp(TOP_K_MIN, TOP_K_MAX);
        let candidate_limit = request
            .candidate_limit
            .clamp(CANDIDATE_LIMIT_MIN, CANDIDATE_LIMIT_MAX);

        let query_text = request.query_text();
        if request.decision_id.trim().is_empty() || query_text.is_empty() {
            tracing::debug!("empty decision id or query text, nothing to retrieve");
            return AncestryRetrieval::empty();
        }

        let candidates = match self
            .store
            .list_candidates(&request.decision_id, candidate_limit)
            .await
        {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::warn!(error = %err, "candidate listing failed, returning empty result");
                return AncestryRetrieval::empty();
            }
        };
        if candidates.is_empty() {
            tracing::debug!("no historical candidates to rank");
            return AncestryRetrieval::empty();
        }

        match self
            .vector_matches(&request.decision_id, &query_text, &candidates, top_k)
            .await
        {
            Ok(matches) if !matches.is_empty() => {
                return AncestryRetrieval {
                    similar_decisions: matches,
                    retrieval_method: RetrievalMethod::VectorDb,
                };
            }
            Ok(_) => {
                tracing::debug!("vector path returned no matches, scoring lexically");
            }
            Err(err) => {
                tracing::warn!(error = %err, "vector path failed, scoring lexically");
            }
        }

        AncestryRetrieval {
            similar_decisions: score_lexical(&query_text, &candidates, top_k),
            retrieval_method: RetrievalMethod::LexicalFallback,
        }
    }

    /// The vector path: ensure the query embedding, fan out candidate
    /// embedding ensures, score by cosine similarity against the query.
    async fn vector_matches(
        &self,
        decision_id: &str,
        query_text: &str,
        candidates: &[DecisionCandidate],
        top_k: usize,
    ) -> Result<Vec<AncestryMatch>, CacheError> {
        let Some(query) = self.cache.ensure_embedding(decision_id, query_text).await? else {
            return Ok(Vec::new());
        };

        let records = self.cache.ensure_candidate_embeddings(candidates).await?;

        let mut scored: Vec<(f64, &DecisionCandidate)> = candidates
            .iter()
            .filter_map(|candidate| {
                let record = records.get(&candidate.id)?;
                let similarity = f64::from(cosine_similarity(&query.vector, &record.vector));
                (similarity > 0.0).then_some((similarity, candidate))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(similarity, candidate)| build_match(candidate, similarity))
            .collect())
    }
}
