//! Faqmatch library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`FaqEntry`], [`FaqStore`] - FAQ storage format and backend seam
//! - [`ChatService`], [`ChatReply`], [`ChatOutcome`] - Request orchestration
//!
//! ## Embedding & Matching
//! - [`TextEmbedder`] - Provider seam the matcher and orchestrator work against
//! - [`BertEmbedder`], [`EmbedderConfig`] - Candle-backed sentence embedder
//! - [`CachedEmbedder`] - Exact-match cache in front of any embedder
//! - [`FaqMatcher`], [`MatchOutcome`] - Cosine ranking with a confidence floor
//!
//! ## Chat Log
//! - [`ChatLog`], [`JsonlChatLog`], [`MemoryChatLog`] - Append-only exchange log
//!
//! ## Utilities
//! - Hashing functions for owner tokens and entry ids
//! - Embedding byte codec helpers
//!
//! ## Test/Mock Support
//! Mock embedders are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod chat;
pub mod config;
pub mod embedding;
pub mod faq;
pub mod hashing;
pub mod matching;

pub use chat::{
    ChatError, ChatExchange, ChatLog, ChatLogError, ChatOutcome, ChatReply, ChatService,
    JsonlChatLog, MemoryChatLog, NO_FAQ_FALLBACK, NOT_UNDERSTOOD_FALLBACK,
};
pub use config::{Config, ConfigError};
pub use embedding::{
    BertEmbedder, CachedEmbedder, DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, EmbedderConfig,
    EmbeddingError, TextEmbedder,
};
#[cfg(any(test, feature = "mock"))]
pub use embedding::mock::{CountingEmbedder, FailingEmbedder};
pub use faq::{
    BYTES_PER_F32, DiskFaqStore, FaqEntry, FaqStore, MemoryFaqStore, StoreError, StoreResult,
    embedding_bytes_to_f32, f32_to_embedding_bytes,
};
pub use hashing::{faq_entry_id, hash_owner_token, hash_text, hash_to_u64};
pub use matching::{
    DEFAULT_MATCH_THRESHOLD, FaqMatcher, MatchOutcome, cosine_similarity, matched_entry,
};
