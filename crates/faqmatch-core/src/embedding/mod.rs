//! Text-to-vector embedding.
//!
//! - [`TextEmbedder`] is the provider seam the rest of the crate works
//!   against.
//! - [`BertEmbedder`] is the candle-backed implementation (with a
//!   deterministic stub mode for tests and model-less deployments).
//! - [`CachedEmbedder`] adds an exact-match cache in front of any embedder.

/// Candle BERT sentence embedder.
pub mod bert;
mod cache;
/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use bert::BertEmbedder;
pub use cache::CachedEmbedder;
pub use config::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, EmbedderConfig};
pub use error::EmbeddingError;

/// Maps a text string to a fixed-dimension vector.
///
/// The dimension is fixed for the lifetime of an instance, and the same text
/// must embed to the same vector (within floating-point tolerance).
/// Implementations surface failure instead of returning a zero vector.
pub trait TextEmbedder: Send + Sync {
    /// Embeds a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Returns the fixed output dimension.
    fn embedding_dim(&self) -> usize;

    /// Identity of the underlying model; recorded on stored embeddings so
    /// vectors from a different model version are detectable at query time.
    fn model_tag(&self) -> &str;
}

impl<E: TextEmbedder + ?Sized> TextEmbedder for std::sync::Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn model_tag(&self) -> &str {
        (**self).model_tag()
    }
}
