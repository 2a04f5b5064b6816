//! OpenAI-compatible embedding client.
//!
//! Implements the [`RemoteEmbedder`] port against any provider that speaks
//! the OpenAI `/embeddings` protocol via configurable base URL. One request
//! per input; batching happens above this seam.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use precedent_core::embedding::remote::{RemoteEmbedder, RemoteEmbedding};
use precedent_types::error::EmbeddingError;

/// Request timeout. Embedding calls are small; anything slower than this is
/// better served by the local fallback.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

/// Client for any OpenAI-compatible embeddings endpoint.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key.
pub struct OpenAiEmbeddingClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    dimensions: usize,
}

impl OpenAiEmbeddingClient {
    /// Create a client against the OpenAI API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - provider API key wrapped in SecretString
    /// * `model` - embedding model identifier (e.g., "text-embedding-3-small")
    /// * `dimensions` - dimensionality the model serves
    pub fn new(api_key: SecretString, model: String, dimensions: usize) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model,
            dimensions,
        }
    }

    /// Override the base URL (compatible providers, proxies, tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn parse_response(response: EmbeddingResponse) -> Result<RemoteEmbedding, EmbeddingError> {
        let datum = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::InvalidResponse("empty data array".to_string()))?;
        if datum.embedding.is_empty() {
            return Err(EmbeddingError::InvalidResponse(
                "empty embedding vector".to_string(),
            ));
        }
        Ok(RemoteEmbedding {
            vector: datum.embedding,
            model: response.model,
        })
    }
}

impl RemoteEmbedder for OpenAiEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<RemoteEmbedding, EmbeddingError> {
        let request = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|err| EmbeddingError::ProviderUnavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ProviderUnavailable(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|err| EmbeddingError::InvalidResponse(err.to_string()))?;
        Self::parse_response(parsed)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimensions
    }
}
