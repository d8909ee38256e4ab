//! Exact-match embedding cache.

use moka::sync::Cache;
use std::sync::Arc;

use super::TextEmbedder;
use super::error::EmbeddingError;
use crate::hashing::hash_text;

const DEFAULT_CAPACITY: u64 = 10_000;

/// Wraps a [`TextEmbedder`] with an in-memory cache keyed by the BLAKE3 hash
/// of the input text.
///
/// Repeated questions (common in FAQ traffic) skip the forward pass entirely.
/// Errors are never cached; a failed call is retried on the next request.
pub struct CachedEmbedder<E> {
    inner: E,
    entries: Cache<[u8; 32], Arc<Vec<f32>>>,
}

impl<E: TextEmbedder> CachedEmbedder<E> {
    /// Wraps `inner` with the default cache capacity.
    pub fn new(inner: E) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    /// Wraps `inner` with a bounded cache of `capacity` embeddings.
    pub fn with_capacity(inner: E, capacity: u64) -> Self {
        Self {
            inner,
            entries: Cache::new(capacity),
        }
    }

    /// Returns the wrapped embedder.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Returns the number of cached embeddings.
    pub fn cached_count(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }
}

impl<E: TextEmbedder> TextEmbedder for CachedEmbedder<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let key = hash_text(text);

        if let Some(cached) = self.entries.get(&key) {
            return Ok(cached.as_ref().clone());
        }

        let embedding = self.inner.embed(text)?;
        self.entries.insert(key, Arc::new(embedding.clone()));
        Ok(embedding)
    }

    fn embedding_dim(&self) -> usize {
        self.inner.embedding_dim()
    }

    fn model_tag(&self) -> &str {
        self.inner.model_tag()
    }
}
