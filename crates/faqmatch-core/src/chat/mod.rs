//! Chat orchestration.
//!
//! [`ChatService`] is the composition root of the matching pipeline:
//! fetch an owner's entries, embed the incoming question, rank, pick the
//! answer or a fallback, and record the exchange.

pub mod error;
mod log;
mod model;
mod service;


pub use error::{ChatError, ChatLogError};
pub use log::{ChatLog, JsonlChatLog, MemoryChatLog};
pub use model::ChatExchange;
pub use service::{
    ChatOutcome, ChatReply, ChatService, NO_FAQ_FALLBACK, NOT_UNDERSTOOD_FALLBACK,
};
