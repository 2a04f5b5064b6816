//! Validation boundary for loosely-typed persisted rows.
//!
//! External stores hand back JSON whose shape this subsystem does not
//! control. Rows are decoded into the strongly-typed records here, at the
//! edge; an invalid row is skipped with a warning rather than failing the
//! whole batch, and a malformed optional field degrades to absent.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use precedent_types::decision::{DecisionCandidate, FinalRecommendation};
use precedent_types::embedding::{EmbeddingProviderKind, EmbeddingRecord};

#[derive(Debug, Deserialize)]
struct RawCandidate {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    body_text: String,
    #[serde(default)]
    executive_summary: String,
    #[serde(default)]
    gate_decision: String,
    #[serde(default)]
    dqs: Option<f64>,
    #[serde(default)]
    final_recommendation: Option<String>,
    #[serde(default)]
    blockers: Vec<String>,
    #[serde(default)]
    required_revisions: Vec<String>,
    #[serde(default)]
    last_run_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEmbeddingRow {
    decision_id: String,
    source_hash: String,
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    model: String,
    #[serde(default)]
    dimensions: usize,
    #[serde(default)]
    vector: Vec<f32>,
    #[serde(default)]
    updated_at: Option<String>,
}

/// Decode one candidate row; `None` when the row is structurally invalid or
/// has an empty id.
pub fn decode_candidate(row: &Value) -> Option<DecisionCandidate> {
    let raw: RawCandidate = match serde_json::from_value(row.clone()) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "skipping undecodable candidate row");
            return None;
        }
    };
    if raw.id.trim().is_empty() {
        tracing::warn!("skipping candidate row with empty id");
        return None;
    }

    Some(DecisionCandidate {
        id: raw.id,
        name: raw.name,
        summary: raw.summary,
        body_text: raw.body_text,
        executive_summary: raw.executive_summary,
        gate_decision: raw.gate_decision,
        dqs: raw.dqs,
        final_recommendation: raw
            .final_recommendation
            .as_deref()
            .and_then(|s| s.parse::<FinalRecommendation>().ok()),
        blockers: raw.blockers,
        required_revisions: raw.required_revisions,
        last_run_at: raw.last_run_at.as_deref().and_then(parse_timestamp),
    })
}

/// Decode a batch of candidate rows, skipping invalid entries.
pub fn decode_candidates(rows: &[Value]) -> Vec<DecisionCandidate> {
    rows.iter().filter_map(decode_candidate).collect()
}

/// Decode one persisted embedding row; `None` when invalid.
pub fn decode_embedding_record(row: &Value) -> Option<EmbeddingRecord> {
    let raw: RawEmbeddingRow = match serde_json::from_value(row.clone()) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "skipping undecodable embedding row");
            return None;
        }
    };
    if raw.decision_id.trim().is_empty() || raw.source_hash.is_empty() {
        tracing::warn!("skipping embedding row without id or source hash");
        return None;
    }

    let provider = raw
        .provider
        .as_deref()
        .and_then(|s| s.parse::<EmbeddingProviderKind>().ok())
        .unwrap_or(EmbeddingProviderKind::LocalFallback);
    let dimensions = if raw.dimensions > 0 {
        raw.dimensions
    } else {
        raw.vector.len()
    };

    Some(EmbeddingRecord {
        decision_id: raw.decision_id,
        source_hash: raw.source_hash,
        provider,
        model: raw.model,
        dimensions,
        vector: raw.vector,
        updated_at: raw
            .updated_at
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or_else(Utc::now),
    })
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
