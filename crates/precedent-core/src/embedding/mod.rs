//! Text-to-vector embedding for decision narratives.
//!
//! This module defines the [`RemoteEmbedder`] port that the infrastructure
//! layer implements, the deterministic local hashing fallback, and the
//! [`EmbeddingEngine`] that selects between them.

pub mod box_remote;
pub mod engine;
pub mod local;
pub mod remote;

pub use box_remote::BoxRemoteEmbedder;
pub use engine::{cosine_similarity, EmbedOptions, EmbeddingEngine};

/// Scale a vector to unit L2 length in place; all-zero vectors are left as-is.
pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}
