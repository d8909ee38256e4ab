//! FAQ store error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage directory unavailable: {path}")]
    StorageUnavailable { path: PathBuf },

    #[error("failed to create owner directory: {path}")]
    OwnerDirCreationFailed { path: PathBuf },

    #[error("stored embedding is malformed: expected {expected} bytes, got {actual}")]
    MalformedEmbedding { expected: usize, actual: usize },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
