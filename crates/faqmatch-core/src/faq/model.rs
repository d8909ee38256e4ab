//! FAQ record types.

use rkyv::{Archive, Deserialize, Serialize};

/// Owner-curated question/answer pair with its stored embedding.
///
/// Persisted as `rkyv` bytes. The embedding is kept as raw little-endian
/// `f32` bytes; `embedding_dim` and `model_tag` make the record the version
/// envelope for the vector, so embeddings produced by a different model are
/// detectable instead of silently scored.
///
/// Entries are immutable once created; there is no update path.
#[derive(Archive, Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct FaqEntry {
    /// Stable entry identifier (derived from owner + question).
    pub id: u64,
    /// Owning tenant identifier.
    pub owner_id: u64,
    /// Owner-authored question text.
    pub question: String,
    /// Answer text, returned verbatim when matched.
    pub answer: String,
    /// Optional label; not used in matching.
    pub category: Option<String>,
    /// Embedding of `question` as little-endian f32 bytes.
    pub embedding: Vec<u8>,
    /// Number of f32 values in `embedding`.
    pub embedding_dim: u32,
    /// Identity of the embedder that produced `embedding`.
    pub model_tag: String,
    /// Unix timestamp when created.
    pub created_at: i64,
}

impl FaqEntry {
    /// Returns `true` if the entry carries a non-empty stored embedding.
    pub fn has_embedding(&self) -> bool {
        !self.embedding.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::rancor::Error;
    use rkyv::{from_bytes, to_bytes};

    fn create_test_entry() -> FaqEntry {
        FaqEntry {
            id: 42,
            owner_id: 7,
            question: "What are your hours?".to_string(),
            answer: "9-5 Mon-Fri".to_string(),
            category: Some("general".to_string()),
            embedding: vec![0x00, 0x00, 0x80, 0x3f],
            embedding_dim: 1,
            model_tag: "stub".to_string(),
            created_at: 1_702_500_000,
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let original = create_test_entry();

        let bytes = to_bytes::<Error>(&original).expect("serialization should succeed");
        let deserialized: FaqEntry =
            from_bytes::<FaqEntry, Error>(&bytes).expect("deserialization should succeed");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_roundtrip_without_category_or_embedding() {
        let entry = FaqEntry {
            category: None,
            embedding: vec![],
            embedding_dim: 0,
            ..create_test_entry()
        };

        let bytes = to_bytes::<Error>(&entry).expect("serialization should succeed");
        let deserialized: FaqEntry =
            from_bytes::<FaqEntry, Error>(&bytes).expect("deserialization should succeed");

        assert!(deserialized.category.is_none());
        assert!(!deserialized.has_embedding());
    }

    #[test]
    fn test_has_embedding() {
        assert!(create_test_entry().has_embedding());
        let empty = FaqEntry {
            embedding: vec![],
            ..create_test_entry()
        };
        assert!(!empty.has_embedding());
    }
}
