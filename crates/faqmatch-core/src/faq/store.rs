//! The `FaqStore` trait.

use super::error::StoreResult;
use super::model::FaqEntry;

/// Persistence seam for FAQ entries.
///
/// Implementations must return an owner's entries in a stable order across
/// calls; ranking breaks similarity ties by enumeration order, so an
/// unstable store would make tie results flap.
pub trait FaqStore: Send + Sync {
    /// Persists an entry. An existing record with the same `id` is replaced;
    /// ids are derived from `(owner, question)`, so re-creating a question
    /// updates it in place instead of accumulating duplicates.
    fn insert(&self, entry: FaqEntry) -> StoreResult<()>;

    /// Returns all entries for `owner_id` in stable order.
    fn entries_for_owner(&self, owner_id: u64) -> StoreResult<Vec<FaqEntry>>;

    /// Returns the number of entries stored for `owner_id`.
    fn count_for_owner(&self, owner_id: u64) -> StoreResult<u64>;
}
