//! Chat exchange record.

use serde::{Deserialize, Serialize};

/// One logged question/response exchange.
///
/// Written exactly once per completed chat request, whether the response was
/// a matched answer or a fallback. Never mutated or deleted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExchange {
    /// Tenant whose FAQ set was queried.
    pub owner_id: u64,
    /// Opaque conversation grouping key.
    pub session_id: String,
    /// The incoming question, verbatim.
    pub user_message: String,
    /// The response text (matched answer or fallback string).
    pub bot_response: String,
    /// Outcome status (`matched` / `no_faqs` / `no_confident_match`).
    pub outcome: String,
    /// Unix timestamp when the exchange completed.
    pub timestamp: i64,
}
