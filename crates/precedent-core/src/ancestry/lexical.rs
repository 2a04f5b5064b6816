//! Lexical fallback scorer.
//!
//! Term-frequency cosine similarity over shared vocabulary. Fully synchronous
//! and I/O-free: this is the path that is guaranteed to be available when the
//! provider or the store is not.

use std::collections::HashMap;

use precedent_types::ancestry::AncestryMatch;
use precedent_types::decision::DecisionCandidate;

use crate::text::tokenize;

use super::matches::build_match;

/// Minimum token length for lexical scoring.
///
/// Slightly stricter than the hashing fallback: two-letter fragments carry
/// almost no discriminative weight in prose comparison.
const MIN_TOKEN_LEN: usize = 3;

/// Score candidates against the query by term-frequency cosine similarity.
///
/// Filters out non-positive similarities, sorts descending, truncates to
/// `top_k`, and assembles full matches with outcome digests.
pub fn score_lexical(
    query_text: &str,
    candidates: &[DecisionCandidate],
    top_k: usize,
) -> Vec<AncestryMatch> {
    let query_terms = term_frequencies(query_text);
    if query_terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &DecisionCandidate)> = candidates
        .iter()
        .filter_map(|candidate| {
            let terms = term_frequencies(&candidate.composed_text());
            let similarity = tf_cosine(&query_terms, &terms);
            (similarity > 0.0).then_some((similarity, candidate))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(top_k)
        .map(|(similarity, candidate)| build_match(candidate, similarity))
        .collect()
}

/// Term-frequency map of a text.
fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut frequencies = HashMap::new();
    for token in tokenize(text, MIN_TOKEN_LEN) {
        *frequencies.entry(token).or_insert(0.0) += 1.0;
    }
    frequencies
}

/// Cosine similarity between two term-frequency maps.
///
/// Zero when there is no shared vocabulary or either side is empty.
fn tf_cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }

    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    dot / (norm_a * norm_b)
}
