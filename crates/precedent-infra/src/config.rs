//! Embedding configuration loader for Precedent.
//!
//! Reads `precedent.toml` from the host's data directory and deserializes its
//! `[embedding]` table into [`EmbeddingConfig`]. Falls back to defaults when
//! the file is missing or malformed -- the engine must come up even when the
//! host's config is broken, since retrieval degrades rather than stalls.

use std::path::Path;

use serde::Deserialize;

use precedent_types::config::EmbeddingConfig;

#[derive(Debug, Default, Deserialize)]
struct PrecedentConfig {
    #[serde(default)]
    embedding: EmbeddingConfig,
}

/// Load embedding configuration from `{data_dir}/precedent.toml`.
///
/// - If the file does not exist, returns [`EmbeddingConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Parsed dimensions are clamped into the supported range.
pub async fn load_embedding_config(data_dir: &Path) -> EmbeddingConfig {
    let config_path = data_dir.join("precedent.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No precedent.toml found at {}, using defaults",
                config_path.display()
            );
            return EmbeddingConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return EmbeddingConfig::default();
        }
    };

    match toml::from_str::<PrecedentConfig>(&content) {
        Ok(config) => config.embedding.validate(),
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            EmbeddingConfig::default()
        }
    }
}
