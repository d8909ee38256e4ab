//! Embedding failure taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Why a question could not be turned into a vector.
///
/// These abort the whole chat request (and skip the chat log write); a
/// failure is never papered over with a zero vector.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// A required model file is missing from the model directory.
    #[error("embedding model file missing: {path}")]
    ModelNotFound { path: PathBuf },

    /// Model files exist but could not be read or parsed.
    #[error("could not load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    /// The tokenizer rejected the input or produced no tokens for it.
    #[error("could not tokenize question: {reason}")]
    TokenizationFailed { reason: String },

    /// The forward pass, or the tensor plumbing around it, failed.
    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    /// The embedder configuration is unusable before any file is touched.
    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

// Model files are the only thing this module reads from disk.
impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
