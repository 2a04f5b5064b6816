//! The embedding engine: normalization, provider selection, and fallback.
//!
//! One engine instance is constructed per host with an explicit
//! [`EmbeddingConfig`] and an optional injected remote client; nothing here
//! inspects ambient environment variables or lazily constructs clients.

use sha2::{Digest, Sha256};

use precedent_types::config::{EmbeddingConfig, LOCAL_FALLBACK_MODEL};
use precedent_types::embedding::{EmbeddingProviderKind, EmbeddingResult};
use precedent_types::error::EmbeddingError;

use crate::text::{normalize_whitespace, truncate_chars};

use super::box_remote::BoxRemoteEmbedder;
use super::l2_normalize;
use super::local::local_fallback_vector;

/// Hard cap on input length, applied after whitespace normalization.
///
/// Bounds cost and latency on the remote path and hashing work on the local
/// path; decision bodies beyond this contribute little ranking signal anyway.
pub const MAX_EMBED_CHARS: usize = 24_000;

/// Per-call options for [`EmbeddingEngine::embed_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbedOptions {
    /// Override the engine's configured default provider for this call.
    pub provider: Option<EmbeddingProviderKind>,
}

/// Text-to-vector engine with a provider-agnostic remote path and a
/// deterministic local fallback.
pub struct EmbeddingEngine {
    config: EmbeddingConfig,
    remote: Option<BoxRemoteEmbedder>,
}

impl EmbeddingEngine {
    /// Create an engine with no remote client; all calls use the local path.
    pub fn new(config: EmbeddingConfig) -> Self {
        Self {
            config: config.validate(),
            remote: None,
        }
    }

    /// Create an engine with an injected remote embedding client.
    ///
    /// The client's lifecycle is owned by the host; the engine never
    /// constructs one itself.
    pub fn with_remote(config: EmbeddingConfig, remote: BoxRemoteEmbedder) -> Self {
        Self {
            config: config.validate(),
            remote: Some(remote),
        }
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Embed text into a fixed-length vector.
    ///
    /// Input is whitespace-normalized and hard-truncated before any
    /// processing. If the remote path fails and `allow_fallback` is set
    /// (the default), the result is transparently recomputed locally
    /// instead of erroring.
    pub async fn embed_text(
        &self,
        text: &str,
        options: EmbedOptions,
    ) -> Result<EmbeddingResult, EmbeddingError> {
        let normalized = normalize_whitespace(text);
        let normalized = truncate_chars(&normalized, MAX_EMBED_CHARS);

        let provider = options.provider.unwrap_or(self.config.provider);
        match provider {
            EmbeddingProviderKind::LocalFallback => Ok(self.local_result(normalized)),
            EmbeddingProviderKind::Remote => match self.remote_result(normalized).await {
                Ok(result) => Ok(result),
                Err(err) if self.config.allow_fallback => {
                    tracing::warn!(error = %err, "remote embedding failed, recomputing locally");
                    Ok(self.local_result(normalized))
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Content fingerprint of normalized text.
    ///
    /// Purely a change-detector for cached embeddings, not security-sensitive.
    pub fn source_hash(text: &str) -> String {
        let normalized = normalize_whitespace(text);
        let digest = Sha256::digest(normalized.as_bytes());
        format!("{digest:x}")
    }

    fn local_result(&self, normalized: &str) -> EmbeddingResult {
        EmbeddingResult {
            provider: EmbeddingProviderKind::LocalFallback,
            model: LOCAL_FALLBACK_MODEL.to_string(),
            dimensions: self.config.dimensions,
            vector: local_fallback_vector(normalized, self.config.dimensions),
        }
    }

    async fn remote_result(&self, normalized: &str) -> Result<EmbeddingResult, EmbeddingError> {
        let client = self.remote.as_ref().ok_or(EmbeddingError::NoRemoteClient)?;

        if normalized.is_empty() {
            // Same contract as the local path: empty text never hits a provider.
            return Ok(EmbeddingResult {
                provider: EmbeddingProviderKind::Remote,
                model: client.model_name().to_string(),
                dimensions: client.dimension(),
                vector: vec![0.0; client.dimension()],
            });
        }

        let remote = client.embed(normalized).await?;
        let mut vector = remote.vector;
        l2_normalize(&mut vector);
        Ok(EmbeddingResult {
            provider: EmbeddingProviderKind::Remote,
            model: remote.model,
            dimensions: vector.len(),
            vector,
        })
    }
}

/// Cosine similarity over the overlapping prefix of two vectors.
///
/// Returns 0.0 when either side has zero norm, so degenerate all-zero
/// embeddings never divide by zero and never rank above real matches.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }

    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for i in 0..len {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
