use chrono::Utc;
use tracing::{debug, info};

use crate::embedding::TextEmbedder;
use crate::faq::{FaqEntry, FaqStore, f32_to_embedding_bytes};
use crate::hashing::faq_entry_id;
use crate::matching::{FaqMatcher, MatchOutcome};

use super::error::ChatError;
use super::log::ChatLog;
use super::model::ChatExchange;

/// Fixed response when an owner has no eligible FAQ entries.
pub const NO_FAQ_FALLBACK: &str = "Sorry, there are no FAQs available yet.";

/// Fixed response when no stored question is similar enough.
pub const NOT_UNDERSTOOD_FALLBACK: &str = "Sorry, I don't understand your question yet.";

#[derive(Debug, Clone, PartialEq)]
/// How a chat reply was produced.
pub enum ChatOutcome {
    /// A stored answer cleared the confidence floor.
    Matched {
        /// Winning cosine similarity.
        score: f32,
    },
    /// The owner had no eligible FAQ entries.
    NoFaqs,
    /// Entries existed but none was similar enough.
    NoConfidentMatch,
}

impl ChatOutcome {
    /// Returns `true` for a matched (non-fallback) reply.
    pub fn is_matched(&self) -> bool {
        matches!(self, ChatOutcome::Matched { .. })
    }

    /// Short stable status string (also used as the HTTP status header value).
    pub fn as_status(&self) -> &'static str {
        match self {
            ChatOutcome::Matched { .. } => "matched",
            ChatOutcome::NoFaqs => "no_faqs",
            ChatOutcome::NoConfidentMatch => "no_confident_match",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A completed chat response.
pub struct ChatReply {
    /// The text returned to the end user.
    pub text: String,
    /// How the text was produced; the two fallbacks stay distinguishable
    /// even though both surface as fixed strings.
    pub outcome: ChatOutcome,
}

/// Composes the embedder, FAQ store, ranker, and chat log into the
/// end-to-end "answer this question for this owner" operation.
///
/// The only observable side effect is the chat log write: exactly one
/// [`ChatExchange`] per completed request, none when the embedder fails.
#[derive(Debug)]
pub struct ChatService<E, F, L> {
    embedder: E,
    store: F,
    chat_log: L,
    matcher: FaqMatcher,
}

impl<E, F, L> ChatService<E, F, L>
where
    E: TextEmbedder,
    F: FaqStore,
    L: ChatLog,
{
    /// Creates a service from its collaborators.
    pub fn new(embedder: E, store: F, chat_log: L, matcher: FaqMatcher) -> Self {
        Self {
            embedder,
            store,
            chat_log,
            matcher,
        }
    }

    /// Returns the FAQ store.
    pub fn store(&self) -> &F {
        &self.store
    }

    /// Returns the chat log.
    pub fn chat_log(&self) -> &L {
        &self.chat_log
    }

    /// Returns the embedder.
    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Returns the matcher.
    pub fn matcher(&self) -> &FaqMatcher {
        &self.matcher
    }

    /// Answers `question` against `owner_id`'s FAQ set.
    ///
    /// An owner without entries gets the no-FAQ fallback without an
    /// embedding call. Every completed request (matched or fallback) is
    /// recorded in the chat log; an embedding failure aborts the request
    /// and records nothing.
    pub fn answer(
        &self,
        owner_id: u64,
        session_id: &str,
        question: &str,
    ) -> Result<ChatReply, ChatError> {
        let entries = self.store.entries_for_owner(owner_id)?;

        if entries.is_empty() {
            debug!(owner_id, "Owner has no FAQ entries, skipping embedding");
            let reply = ChatReply {
                text: NO_FAQ_FALLBACK.to_string(),
                outcome: ChatOutcome::NoFaqs,
            };
            self.record(owner_id, session_id, question, &reply)?;
            return Ok(reply);
        }

        let query = self.embedder.embed(question)?;

        let outcome = self
            .matcher
            .rank(&query, &entries, self.embedder.model_tag());

        let reply = match outcome {
            MatchOutcome::Matched { index, score } => {
                info!(owner_id, score, "FAQ match found");
                ChatReply {
                    text: entries[index].answer.clone(),
                    outcome: ChatOutcome::Matched { score },
                }
            }
            MatchOutcome::BelowThreshold { top_score } => {
                debug!(
                    owner_id,
                    top_score,
                    threshold = self.matcher.threshold(),
                    "No candidate cleared the confidence floor"
                );
                ChatReply {
                    text: NOT_UNDERSTOOD_FALLBACK.to_string(),
                    outcome: ChatOutcome::NoConfidentMatch,
                }
            }
            MatchOutcome::NoCandidates => {
                debug!(owner_id, "No eligible candidates after filtering");
                ChatReply {
                    text: NO_FAQ_FALLBACK.to_string(),
                    outcome: ChatOutcome::NoFaqs,
                }
            }
        };

        self.record(owner_id, session_id, question, &reply)?;
        Ok(reply)
    }

    /// Creates a FAQ entry, embedding `question` synchronously.
    pub fn create_faq(
        &self,
        owner_id: u64,
        question: String,
        answer: String,
        category: Option<String>,
    ) -> Result<FaqEntry, ChatError> {
        let vector = self.embedder.embed(&question)?;

        let entry = FaqEntry {
            id: faq_entry_id(owner_id, &question),
            owner_id,
            embedding: f32_to_embedding_bytes(&vector),
            embedding_dim: vector.len() as u32,
            model_tag: self.embedder.model_tag().to_string(),
            question,
            answer,
            category,
            created_at: Utc::now().timestamp(),
        };

        self.store.insert(entry.clone())?;
        Ok(entry)
    }

    fn record(
        &self,
        owner_id: u64,
        session_id: &str,
        question: &str,
        reply: &ChatReply,
    ) -> Result<(), ChatError> {
        self.chat_log.record(ChatExchange {
            owner_id,
            session_id: session_id.to_string(),
            user_message: question.to_string(),
            bot_response: reply.text.clone(),
            outcome: reply.outcome.as_status().to_string(),
            timestamp: Utc::now().timestamp(),
        })?;
        Ok(())
    }
}
