//! Infrastructure layer for Precedent.
//!
//! Contains implementations of the ports defined in `precedent-core`: the
//! OpenAI-compatible remote embedding client, the DashMap-backed in-memory
//! ancestry store, the validation boundary for loosely-typed persisted rows,
//! and the config loader.

pub mod config;
pub mod embeddings;
pub mod memory;
