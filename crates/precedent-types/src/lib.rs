//! Shared domain types for the Precedent decision-ancestry engine.
//!
//! This crate contains the types exchanged between the retrieval core and its
//! collaborators: embedding results and cached records, decision candidates,
//! ranked ancestry matches, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod ancestry;
pub mod config;
pub mod decision;
pub mod embedding;
pub mod error;
