use crate::faq::FaqEntry;

#[derive(Debug, Clone, PartialEq)]
/// Outcome of ranking a query vector against an owner's FAQ candidates.
pub enum MatchOutcome {
    /// Best candidate cleared the confidence floor.
    Matched {
        /// Index into the candidate slice that was ranked.
        index: usize,
        /// Winning cosine similarity.
        score: f32,
    },
    /// Candidates existed but the best score fell below the floor.
    BelowThreshold {
        /// Best cosine similarity observed.
        top_score: f32,
    },
    /// No eligible candidates (no stored embeddings survived filtering).
    NoCandidates,
}

impl MatchOutcome {
    /// Returns `true` if a candidate cleared the floor.
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    /// Returns the best score observed (if any candidate was scored).
    pub fn score(&self) -> Option<f32> {
        match self {
            MatchOutcome::Matched { score, .. } => Some(*score),
            MatchOutcome::BelowThreshold { top_score } => Some(*top_score),
            MatchOutcome::NoCandidates => None,
        }
    }

    /// Returns a short status string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            MatchOutcome::Matched { .. } => "MATCHED",
            MatchOutcome::BelowThreshold { .. } => "BELOW_THRESHOLD",
            MatchOutcome::NoCandidates => "NO_CANDIDATES",
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Matched { index, score } => {
                write!(f, "MATCHED (index: {}, score: {:.4})", index, score)
            }
            MatchOutcome::BelowThreshold { top_score } => {
                write!(f, "BELOW_THRESHOLD (top_score: {:.4})", top_score)
            }
            MatchOutcome::NoCandidates => write!(f, "NO_CANDIDATES"),
        }
    }
}

/// Resolves a [`MatchOutcome::Matched`] index back to its entry.
pub fn matched_entry<'a>(outcome: &MatchOutcome, entries: &'a [FaqEntry]) -> Option<&'a FaqEntry> {
    match outcome {
        MatchOutcome::Matched { index, .. } => entries.get(*index),
        _ => None,
    }
}
