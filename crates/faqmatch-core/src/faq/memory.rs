//! In-memory FAQ store (tests and model-less deployments).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::model::FaqEntry;
use super::store::FaqStore;
use super::error::StoreResult;

/// FAQ store backed by a per-owner vector behind an `RwLock`.
///
/// Preserves insertion order, which is what makes first-seen tie-breaking
/// deterministic downstream.
#[derive(Debug, Clone, Default)]
pub struct MemoryFaqStore {
    entries: Arc<RwLock<HashMap<u64, Vec<FaqEntry>>>>,
}

impl MemoryFaqStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FaqStore for MemoryFaqStore {
    fn insert(&self, entry: FaqEntry) -> StoreResult<()> {
        let mut map = self.entries.write();
        let entries = map.entry(entry.owner_id).or_default();

        // same id replaces in place, matching the disk store's overwrite
        if let Some(existing) = entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        } else {
            entries.push(entry);
        }
        Ok(())
    }

    fn entries_for_owner(&self, owner_id: u64) -> StoreResult<Vec<FaqEntry>> {
        Ok(self
            .entries
            .read()
            .get(&owner_id)
            .cloned()
            .unwrap_or_default())
    }

    fn count_for_owner(&self, owner_id: u64) -> StoreResult<u64> {
        Ok(self
            .entries
            .read()
            .get(&owner_id)
            .map(|v| v.len() as u64)
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(owner_id: u64, question: &str) -> FaqEntry {
        FaqEntry {
            id: crate::hashing::faq_entry_id(owner_id, question),
            owner_id,
            question: question.to_string(),
            answer: format!("answer to {question}"),
            category: None,
            embedding: vec![],
            embedding_dim: 0,
            model_tag: "stub".to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn test_entries_scoped_by_owner() {
        let store = MemoryFaqStore::new();
        store.insert(entry(1, "q1")).unwrap();
        store.insert(entry(1, "q2")).unwrap();
        store.insert(entry(2, "q3")).unwrap();

        assert_eq!(store.entries_for_owner(1).unwrap().len(), 2);
        assert_eq!(store.entries_for_owner(2).unwrap().len(), 1);
        assert!(store.entries_for_owner(3).unwrap().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = MemoryFaqStore::new();
        for q in ["a", "b", "c"] {
            store.insert(entry(1, q)).unwrap();
        }

        let questions: Vec<String> = store
            .entries_for_owner(1)
            .unwrap()
            .into_iter()
            .map(|e| e.question)
            .collect();
        assert_eq!(questions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reinsert_same_question_replaces() {
        let store = MemoryFaqStore::new();
        store.insert(entry(1, "q1")).unwrap();

        let mut updated = entry(1, "q1");
        updated.answer = "a better answer".to_string();
        store.insert(updated).unwrap();

        let entries = store.entries_for_owner(1).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].answer, "a better answer");
    }

    #[test]
    fn test_count_for_owner() {
        let store = MemoryFaqStore::new();
        assert_eq!(store.count_for_owner(1).unwrap(), 0);

        store.insert(entry(1, "q1")).unwrap();
        assert_eq!(store.count_for_owner(1).unwrap(), 1);
        assert_eq!(store.count_for_owner(2).unwrap(), 0);
    }
}
