use thiserror::Error;

/// Errors from embedding computation.
///
/// These never escape the retrieval orchestrator: a failed remote call is
/// recomputed locally when fallback is allowed, and any residual failure
/// degrades the whole retrieval to the lexical path.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("no remote embedding client configured")]
    NoRemoteClient,
}

/// Errors from store operations (used by trait definitions in precedent-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("record not found")]
    NotFound,
}

/// Errors from the embedding cache gateway.
///
/// Wraps either side of the ensure operation; the orchestrator treats both
/// identically (abandon the vector path, fall back to lexical scoring).
#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_error_display() {
        let err = EmbeddingError::ProviderUnavailable("timeout".to_string());
        assert_eq!(err.to_string(), "embedding provider unavailable: timeout");
    }

    #[test]
    fn cache_error_preserves_source_message() {
        let err = CacheError::from(StoreError::Query("bad row".to_string()));
        assert_eq!(err.to_string(), "query error: bad row");
    }
}
