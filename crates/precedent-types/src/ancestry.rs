//! Ranked ancestry match output.
//!
//! These types are constructed per retrieval call and handed to the review
//! pipeline; the serialized field names are the wire contract consumed
//! downstream (`decision_id`, `gate_decision`, `run_at`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::decision::FinalRecommendation;

/// Which scoring path produced a result set.
///
/// Tags the whole set, not individual matches: a single call never mixes
/// vector-scored and lexically-scored entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetrievalMethod {
    #[serde(rename = "vector-db")]
    VectorDb,
    #[serde(rename = "lexical-fallback")]
    LexicalFallback,
}

impl fmt::Display for RetrievalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalMethod::VectorDb => write!(f, "vector-db"),
            RetrievalMethod::LexicalFallback => write!(f, "lexical-fallback"),
        }
    }
}

/// Recorded review outcome attached to a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub gate_decision: String,
    pub final_recommendation: Option<FinalRecommendation>,
    pub dqs: Option<f64>,
    pub run_at: Option<DateTime<Utc>>,
}

/// One ranked historical decision similar to the query decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AncestryMatch {
    pub decision_id: String,
    pub decision_name: String,
    /// Rounded to 4 decimals, strictly positive.
    pub similarity: f64,
    pub outcome: MatchOutcome,
    /// Human-readable outcome digest: outcome line, then up to two blockers
    /// and two required revisions.
    pub lessons: Vec<String>,
    /// Word-bounded excerpt of the candidate's best available summary text.
    pub summary: String,
}

/// The full result of one ancestry retrieval call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AncestryRetrieval {
    pub similar_decisions: Vec<AncestryMatch>,
    pub retrieval_method: RetrievalMethod,
}

impl AncestryRetrieval {
    /// The degraded-but-normal empty result: no matches, lexical provenance.
    pub fn empty() -> Self {
        Self {
            similar_decisions: Vec::new(),
            retrieval_method: RetrievalMethod::LexicalFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_method_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&RetrievalMethod::VectorDb).unwrap(),
            "\"vector-db\""
        );
        assert_eq!(
            serde_json::to_string(&RetrievalMethod::LexicalFallback).unwrap(),
            "\"lexical-fallback\""
        );
    }

    #[test]
    fn empty_retrieval_is_lexical_tagged() {
        let empty = AncestryRetrieval::empty();
        assert!(empty.similar_decisions.is_empty());
        assert_eq!(empty.retrieval_method, RetrievalMethod::LexicalFallback);
    }
}
