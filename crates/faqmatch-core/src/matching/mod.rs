//! Similarity ranking with a confidence floor.
//!
//! Given a query embedding and an owner's FAQ entries, [`FaqMatcher`] scores
//! each eligible candidate by cosine similarity and selects the maximum. A
//! winning score strictly below the floor is reported as
//! [`MatchOutcome::BelowThreshold`] rather than returned as a low-quality
//! answer; an empty eligible set is [`MatchOutcome::NoCandidates`]. The two
//! are distinct so callers can surface (and test) them separately.

mod scorer;
mod types;


pub use scorer::{DEFAULT_MATCH_THRESHOLD, FaqMatcher, cosine_similarity};
pub use types::{MatchOutcome, matched_entry};
