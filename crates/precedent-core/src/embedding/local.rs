//! Deterministic local hashing fallback.
//!
//! Produces an offline-safe embedding with no model at all: each token is
//! SHA-256 hashed and accumulated into two buckets of a fixed-length vector.
//! The dual-bucket write reduces collision bias for frequent tokens. Identical
//! text always yields a bit-identical vector, which keeps ranking testable
//! when the remote provider is unavailable.

use sha2::{Digest, Sha256};

use crate::text::tokenize;

use super::l2_normalize;

/// Base weight for a token's primary bucket.
pub const PRIMARY_BASE_WEIGHT: f32 = 1.0;

/// Fixed weight for a token's secondary bucket.
pub const SECONDARY_WEIGHT: f32 = 0.75;

/// Cap on the positional term added to the primary weight.
///
/// The 1.0/0.75/cap-3 triple is carried over from the system this engine
/// replaces. Treat it as a tunable, not a correctness requirement.
pub const POSITION_WEIGHT_CAP: f32 = 3.0;

/// Minimum token length for the hashing fallback.
const MIN_TOKEN_LEN: usize = 2;

/// Embed normalized text into `dimensions` buckets.
///
/// Empty or stopword-only text returns an all-zero vector without hashing
/// anything. Non-zero results are L2-normalized.
pub fn local_fallback_vector(normalized: &str, dimensions: usize) -> Vec<f32> {
    let mut vector = vec![0.0_f32; dimensions];
    if normalized.is_empty() {
        return vector;
    }

    let tokens = tokenize(normalized, MIN_TOKEN_LEN);
    if tokens.is_empty() {
        return vector;
    }

    let total = tokens.len() as f32;
    for (index, token) in tokens.iter().enumerate() {
        let digest = Sha256::digest(token.as_bytes());

        // Two independent buckets per token, derived from disjoint hash bytes.
        let primary = u16::from_be_bytes([digest[0], digest[1]]) as usize % dimensions;
        let secondary = u16::from_be_bytes([digest[3], digest[4]]) as usize % dimensions;

        // Signs come from two distinct bits so the buckets stay decorrelated.
        let primary_sign = if digest[2] & 0x01 == 0 { 1.0 } else { -1.0 };
        let secondary_sign = if digest[2] & 0x02 == 0 { 1.0 } else { -1.0 };

        let weight = PRIMARY_BASE_WEIGHT + (index as f32 / total).min(POSITION_WEIGHT_CAP);
        vector[primary] += primary_sign * weight;
        vector[secondary] += secondary_sign * SECONDARY_WEIGHT;
    }

    l2_normalize(&mut vector);
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: usize = 128;

    #[test]
    fn identical_text_yields_bit_identical_vectors() {
        let text = "expand into adjacent smb segment with cac pressure";
        let first = local_fallback_vector(text, DIMS);
        let second = local_fallback_vector(text, DIMS);
        assert_eq!(first, second);
    }

    #[test]
    fn non_empty_text_yields_unit_vector() {
        let vector = local_fallback_vector("payback period exceeded eighteen months", DIMS);
        let sum_sq: f32 = vector.iter().map(|v| v * v).sum();
        assert!((sum_sq - 1.0).abs() < 1e-6, "sum of squares was {sum_sq}");
    }

    #[test]
    fn empty_text_yields_zero_vector() {
        let vector = local_fallback_vector("", DIMS);
        assert_eq!(vector.len(), DIMS);
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn stopword_only_text_yields_zero_vector() {
        let vector = local_fallback_vector("the and of with", DIMS);
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn different_text_yields_different_vectors() {
        let a = local_fallback_vector("customer acquisition cost increased", DIMS);
        let b = local_fallback_vector("datacenter migration completed", DIMS);
        assert_ne!(a, b);
    }
}
