use faqmatch::faq::FaqEntry;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct FaqCreateRequest {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FaqResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub created_at: i64,
}

impl From<&FaqEntry> for FaqResponse {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            category: entry.category.clone(),
            created_at: entry.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FaqListResponse {
    pub faqs: Vec<FaqResponse>,
    pub total: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatResponse {
    pub response: String,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    pub session_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyticsResponse {
    pub total_faqs: u64,
    pub total_chats: u64,
}
