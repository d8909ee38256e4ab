//! Chat orchestration error types.

use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::faq::StoreError;

/// Errors writing to the chat log.
#[derive(Debug, Error)]
pub enum ChatLogError {
    #[error("failed to serialize chat exchange: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-aborting failures of the chat pipeline.
///
/// Fallback outcomes (no FAQs, no confident match) are not errors; they are
/// ordinary [`ChatReply`](super::ChatReply) values.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The embedding provider failed; no chat log entry is written.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("faq store error: {0}")]
    Store(#[from] StoreError),

    /// The exchange could not be recorded. The log write is part of the
    /// request contract, so a lost write is surfaced rather than swallowed.
    #[error("chat log error: {0}")]
    ChatLog(#[from] ChatLogError),
}
