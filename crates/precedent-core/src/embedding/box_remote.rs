//! BoxRemoteEmbedder -- object-safe dynamic dispatch wrapper for RemoteEmbedder.
//!
//! 1. Define an object-safe `RemoteEmbedderDyn` trait with boxed futures
//! 2. Blanket-impl `RemoteEmbedderDyn` for all `T: RemoteEmbedder`
//! 3. `BoxRemoteEmbedder` wraps `Box<dyn RemoteEmbedderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use precedent_types::error::EmbeddingError;

use super::remote::{RemoteEmbedder, RemoteEmbedding};

/// Object-safe version of [`RemoteEmbedder`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn RemoteEmbedderDyn`).
/// A blanket implementation is provided for all types implementing `RemoteEmbedder`.
pub trait RemoteEmbedderDyn: Send + Sync {
    fn embed_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteEmbedding, EmbeddingError>> + Send + 'a>>;

    fn model_name_dyn(&self) -> &str;

    fn dimension_dyn(&self) -> usize;
}

/// Blanket implementation: any `RemoteEmbedder` automatically implements `RemoteEmbedderDyn`.
impl<T: RemoteEmbedder> RemoteEmbedderDyn for T {
    fn embed_boxed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<RemoteEmbedding, EmbeddingError>> + Send + 'a>> {
        Box::pin(self.embed(text))
    }

    fn model_name_dyn(&self) -> &str {
        self.model_name()
    }

    fn dimension_dyn(&self) -> usize {
        self.dimension()
    }
}

/// Type-erased remote embedder for runtime selection.
///
/// Since `RemoteEmbedder` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxRemoteEmbedder` provides equivalent methods that delegate to
/// the inner `RemoteEmbedderDyn` trait object, letting the engine hold any
/// provider client behind one field.
pub struct BoxRemoteEmbedder {
    inner: Box<dyn RemoteEmbedderDyn + Send + Sync>,
}

impl BoxRemoteEmbedder {
    /// Wrap a concrete `RemoteEmbedder` in a type-erased box.
    pub fn new<T: RemoteEmbedder + 'static>(embedder: T) -> Self {
        Self {
            inner: Box::new(embedder),
        }
    }

    /// Embed a single text into a vector.
    pub async fn embed(&self, text: &str) -> Result<RemoteEmbedding, EmbeddingError> {
        self.inner.embed_boxed(text).await
    }

    /// The model name requested from the provider.
    pub fn model_name(&self) -> &str {
        self.inner.model_name_dyn()
    }

    /// The dimensionality of the provider's output vectors.
    pub fn dimension(&self) -> usize {
        self.inner.dimension_dyn()
    }
}
