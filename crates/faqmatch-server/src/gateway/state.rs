use std::path::PathBuf;
use std::sync::Arc;

use faqmatch::chat::{ChatLog, ChatService};
use faqmatch::embedding::TextEmbedder;
use faqmatch::faq::FaqStore;

/// Embedder mode reported by the readiness probe.
pub const EMBEDDER_MODE_REAL: &str = "real";
pub const EMBEDDER_MODE_STUB: &str = "stub";

pub struct HandlerState<
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
> {
    pub chat: Arc<ChatService<E, F, L>>,

    pub storage_path: PathBuf,

    pub embedder_mode: &'static str,
}

impl<E, F, L> HandlerState<E, F, L>
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    pub fn new(
        chat: Arc<ChatService<E, F, L>>,
        storage_path: PathBuf,
        embedder_mode: &'static str,
    ) -> Self {
        Self {
            chat,
            storage_path,
            embedder_mode,
        }
    }
}

// Manual impl: the service itself is not Clone, only the Arc around it is.
impl<E, F, L> Clone for HandlerState<E, F, L>
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    fn clone(&self) -> Self {
        Self {
            chat: Arc::clone(&self.chat),
            storage_path: self.storage_path.clone(),
            embedder_mode: self.embedder_mode,
        }
    }
}
