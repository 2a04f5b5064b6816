//! Embedding engine and ancestry retrieval logic for Precedent.
//!
//! This crate defines the "ports" (async traits) that the infrastructure
//! layer implements -- the remote embedding provider and the ancestry store --
//! and the pure logic built on top of them: text embedding with a
//! deterministic local fallback, cache-aware embedding reuse, lexical
//! term-frequency scoring, and the retrieval orchestrator that ties them
//! together. It depends only on `precedent-types` -- never on
//! `precedent-infra` or any HTTP/database crate.

pub mod ancestry;
pub mod embedding;
pub mod text;
