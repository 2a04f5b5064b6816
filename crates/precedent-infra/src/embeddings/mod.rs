//! Remote embedding provider clients.

pub mod openai;

pub use openai::OpenAiEmbeddingClient;
