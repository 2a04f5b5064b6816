//! Remote embedding provider port.
//!
//! Defines the interface for provider-hosted embedding models. The concrete
//! HTTP client lives in `precedent-infra`; the engine only sees this trait.

use precedent_types::error::EmbeddingError;

/// A vector returned by a remote provider, before normalization.
#[derive(Debug, Clone)]
pub struct RemoteEmbedding {
    pub vector: Vec<f32>,
    /// Model identifier the provider actually served.
    pub model: String,
}

/// Trait for provider-hosted text embedding.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in precedent-infra. One call embeds one input;
/// batching across candidates happens above this seam, in the cache gateway.
pub trait RemoteEmbedder: Send + Sync {
    /// Embed a single text into a vector.
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<RemoteEmbedding, EmbeddingError>> + Send;

    /// The model name requested from the provider.
    fn model_name(&self) -> &str;

    /// The dimensionality of the provider's output vectors.
    fn dimension(&self) -> usize;
}
