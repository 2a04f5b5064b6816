//! Embedding configuration.
//!
//! Passed explicitly to the engine at construction. Nothing in the engine
//! reads ambient environment variables; the host resolves configuration once
//! and injects it.

use serde::{Deserialize, Serialize};

use crate::embedding::EmbeddingProviderKind;

/// Minimum embedding dimensionality accepted by the engine.
pub const MIN_DIMENSIONS: usize = 64;

/// Maximum embedding dimensionality accepted by the engine.
pub const MAX_DIMENSIONS: usize = 1536;

/// Model label reported by the deterministic local hashing fallback.
pub const LOCAL_FALLBACK_MODEL: &str = "hash-v1";

/// Process-wide embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Default provider when a call does not select one.
    pub provider: EmbeddingProviderKind,
    /// Model requested from the remote provider (ignored by the local path).
    pub model: String,
    /// Dimensionality of locally produced vectors; clamped to [64, 1536].
    pub dimensions: usize,
    /// Whether a failed remote call is transparently recomputed locally.
    pub allow_fallback: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::LocalFallback,
            model: "text-embedding-3-small".to_string(),
            dimensions: 256,
            allow_fallback: true,
        }
    }
}

impl EmbeddingConfig {
    /// Clamp `dimensions` into the supported range.
    pub fn validate(mut self) -> Self {
        self.dimensions = self.dimensions.clamp(MIN_DIMENSIONS, MAX_DIMENSIONS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_clamps_dimensions() {
        let low = EmbeddingConfig {
            dimensions: 8,
            ..EmbeddingConfig::default()
        };
        assert_eq!(low.validate().dimensions, MIN_DIMENSIONS);

        let high = EmbeddingConfig {
            dimensions: 100_000,
            ..EmbeddingConfig::default()
        };
        assert_eq!(high.validate().dimensions, MAX_DIMENSIONS);

        let ok = EmbeddingConfig {
            dimensions: 384,
            ..EmbeddingConfig::default()
        };
        assert_eq!(ok.validate().dimensions, 384);
    }
}
