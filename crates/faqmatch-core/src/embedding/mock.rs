//! Mock embedders for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::TextEmbedder;
use super::error::EmbeddingError;

/// Deterministic embedder that counts how many times it was invoked.
///
/// Vectors are hash-seeded and normalized, same recipe as the stub backend.
#[derive(Debug)]
pub struct CountingEmbedder {
    dim: usize,
    calls: AtomicUsize,
}

impl CountingEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `embed` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextEmbedder for CountingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        let mut embedding = Vec::with_capacity(self.dim);
        for _ in 0..self.dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            embedding.push(((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0);
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut embedding {
                *x /= norm;
            }
        }

        Ok(embedding)
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn model_tag(&self) -> &str {
        "counting-mock"
    }
}

/// Embedder whose every call fails, for provider-failure paths.
#[derive(Debug)]
pub struct FailingEmbedder {
    dim: usize,
}

impl FailingEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl TextEmbedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::InferenceFailed {
            reason: "mock embedder always fails".to_string(),
        })
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn model_tag(&self) -> &str {
        "failing-mock"
    }
}
