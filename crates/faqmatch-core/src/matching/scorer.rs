use tracing::{debug, warn};

use crate::faq::{FaqEntry, embedding_bytes_to_f32};

use super::types::MatchOutcome;

/// Default confidence floor applied to the winning similarity.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.30;

/// Cosine similarity between two vectors.
///
/// Returns `0.0` for empty or length-mismatched inputs and for zero-norm
/// vectors (the quantity is undefined there, and callers exclude such
/// candidates before this matters). The result is not clamped; values
/// marginally outside `[-1, 1]` from floating-point error pass through.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (av, bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Ranks a query vector against FAQ candidates and applies the confidence floor.
#[derive(Debug, Clone)]
pub struct FaqMatcher {
    threshold: f32,
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl FaqMatcher {
    /// Creates a matcher with the given confidence floor.
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Returns the configured confidence floor.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Ranks `entries` by cosine similarity to `query` and picks the best.
    ///
    /// Ineligible entries are skipped, never fatal:
    /// - entries without a stored embedding,
    /// - entries whose `model_tag` differs from `model_tag` (vectors from a
    ///   different embedder are not comparable),
    /// - malformed embedding bytes or a dimension mismatch with the query,
    /// - zero-norm vectors and vectors whose similarity comes out NaN.
    ///
    /// Ties are broken by enumeration order (first seen wins): the scan only
    /// replaces the leader on a strictly greater score.
    pub fn rank(&self, query: &[f32], entries: &[FaqEntry], model_tag: &str) -> MatchOutcome {
        let mut best: Option<(usize, f32)> = None;

        for (index, entry) in entries.iter().enumerate() {
            if !entry.has_embedding() {
                debug!(entry_id = entry.id, "Skipping entry without stored embedding");
                continue;
            }

            if entry.model_tag != model_tag {
                warn!(
                    entry_id = entry.id,
                    stored_tag = %entry.model_tag,
                    live_tag = %model_tag,
                    "Skipping entry embedded by a different model"
                );
                continue;
            }

            let vector = match embedding_bytes_to_f32(&entry.embedding, entry.embedding_dim as usize)
            {
                Ok(v) => v,
                Err(e) => {
                    warn!(entry_id = entry.id, error = %e, "Skipping entry with malformed embedding");
                    continue;
                }
            };

            if vector.len() != query.len() {
                warn!(
                    entry_id = entry.id,
                    expected_dim = query.len(),
                    actual_dim = vector.len(),
                    "Skipping entry with mismatched embedding dimension"
                );
                continue;
            }

            if vector.iter().all(|v| *v == 0.0) {
                warn!(entry_id = entry.id, "Skipping entry with zero-norm embedding");
                continue;
            }

            let score = cosine_similarity(query, &vector);

            // A non-finite stored component (inf) yields inf/inf = NaN, and
            // NaN compares false everywhere, so it would sail past both the
            // leader scan and the threshold check.
            if score.is_nan() {
                warn!(entry_id = entry.id, "Skipping entry with undefined similarity");
                continue;
            }

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        match best {
            None => MatchOutcome::NoCandidates,
            Some((_, top_score)) if top_score < self.threshold => {
                debug!(
                    top_score,
                    threshold = self.threshold,
                    "Best candidate below confidence floor"
                );
                MatchOutcome::BelowThreshold { top_score }
            }
            Some((index, score)) => {
                debug!(index, score, threshold = self.threshold, "Match found");
                MatchOutcome::Matched { index, score }
            }
        }
    }
}
