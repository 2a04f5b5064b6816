//! Embedding types for the Precedent engine.
//!
//! An embedding is a fixed-length `Vec<f32>` produced either by a remote
//! provider or by the deterministic local hashing fallback. Cached embeddings
//! carry a source hash so staleness can be detected without recomputing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which embedding path produced a vector.
///
/// `LocalFallback` is the offline-safe deterministic hashing path used when
/// the remote provider is unavailable or deliberately not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbeddingProviderKind {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "local-fallback")]
    LocalFallback,
}

impl fmt::Display for EmbeddingProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingProviderKind::Remote => write!(f, "remote"),
            EmbeddingProviderKind::LocalFallback => write!(f, "local-fallback"),
        }
    }
}

impl FromStr for EmbeddingProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote" => Ok(EmbeddingProviderKind::Remote),
            "local-fallback" => Ok(EmbeddingProviderKind::LocalFallback),
            other => Err(format!("invalid embedding provider: '{other}'")),
        }
    }
}

/// The result of one embedding call.
///
/// Persistence is the caller's responsibility; this type only reports what
/// was computed and by which path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResult {
    pub provider: EmbeddingProviderKind,
    /// Model identifier (e.g., "text-embedding-3-small" or "hash-v1").
    pub model: String,
    pub dimensions: usize,
    /// L2-normalized, except all-zero for empty input text.
    pub vector: Vec<f32>,
}

impl EmbeddingResult {
    /// Whether the vector carries any signal at all.
    ///
    /// Empty input text produces an all-zero vector; callers must not cache
    /// or score such a result.
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty() || self.vector.iter().all(|v| *v == 0.0)
    }
}

/// A cached decision embedding, keyed by decision id.
///
/// Owned by the external store and acts as a write-through cache: whenever
/// the hash of the decision's current text differs from `source_hash`, the
/// record is stale and must be recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub decision_id: String,
    /// Content fingerprint of the normalized source text at embed time.
    pub source_hash: String,
    pub provider: EmbeddingProviderKind,
    pub model: String,
    pub dimensions: usize,
    pub vector: Vec<f32>,
    pub updated_at: DateTime<Utc>,
}

impl EmbeddingRecord {
    /// Whether this record can serve a request for text with `current_hash`.
    ///
    /// Fresh means the stored hash matches and the vector is non-empty; a
    /// degenerate all-zero vector is never served from cache.
    pub fn is_fresh(&self, current_hash: &str) -> bool {
        self.source_hash == current_hash && !self.vector.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_round_trips_through_str() {
        for kind in [
            EmbeddingProviderKind::Remote,
            EmbeddingProviderKind::LocalFallback,
        ] {
            let parsed: EmbeddingProviderKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("openai".parse::<EmbeddingProviderKind>().is_err());
    }

    #[test]
    fn zero_vector_result_is_empty() {
        let result = EmbeddingResult {
            provider: EmbeddingProviderKind::LocalFallback,
            model: "hash-v1".to_string(),
            dimensions: 4,
            vector: vec![0.0; 4],
        };
        assert!(result.is_empty());
    }

    #[test]
    fn record_freshness_requires_hash_match_and_vector() {
        let record = EmbeddingRecord {
            decision_id: "dec-1".to_string(),
            source_hash: "abc".to_string(),
            provider: EmbeddingProviderKind::Remote,
            model: "text-embedding-3-small".to_string(),
            dimensions: 2,
            vector: vec![0.6, 0.8],
            updated_at: Utc::now(),
        };
        assert!(record.is_fresh("abc"));
        assert!(!record.is_fresh("def"));

        let empty = EmbeddingRecord {
            vector: Vec::new(),
            ..record
        };
        assert!(!empty.is_fresh("abc"));
    }
}
