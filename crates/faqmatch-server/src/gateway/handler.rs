use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};

use faqmatch::chat::{ChatLog, ChatOutcome};
use faqmatch::embedding::TextEmbedder;
use faqmatch::faq::FaqStore;
use faqmatch::hashing::hash_owner_token;

use crate::gateway::FAQMATCH_STATUS_HEADER;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    AnalyticsResponse, ChatRequest, ChatResponse, FaqCreateRequest, FaqListResponse, FaqResponse,
};
use crate::gateway::state::HandlerState;

/// Resolves the calling tenant from the `Authorization: Bearer` header.
/// The raw token never leaves this function; only its hash is used downstream.
fn owner_from_headers(headers: &HeaderMap) -> Result<u64, GatewayError> {
    let token = headers
        .get("Authorization")
        .and_then(|val| val.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(GatewayError::MissingAuth)?;

    Ok(hash_owner_token(token))
}

#[instrument(skip(state, headers, request))]
pub async fn create_faq_handler<E, F, L>(
    State(state): State<HandlerState<E, F, L>>,
    headers: HeaderMap,
    Json(request): Json<FaqCreateRequest>,
) -> Result<Response, GatewayError>
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    let owner_id = owner_from_headers(&headers)?;

    let question = request.question.trim().to_string();
    let answer = request.answer.trim().to_string();
    if question.is_empty() {
        return Err(GatewayError::InvalidRequest("question is empty".into()));
    }
    if answer.is_empty() {
        return Err(GatewayError::InvalidRequest("answer is empty".into()));
    }

    let chat = state.chat.clone();
    let category = request.category;
    let entry = tokio::task::spawn_blocking(move || {
        chat.create_faq(owner_id, question, answer, category)
    })
    .await
    .map_err(|e| GatewayError::InternalError(e.to_string()))??;

    info!(owner_id, entry_id = entry.id, "FAQ entry created");

    Ok((StatusCode::CREATED, Json(FaqResponse::from(&entry))).into_response())
}

#[instrument(skip(state, headers))]
pub async fn list_faqs_handler<E, F, L>(
    State(state): State<HandlerState<E, F, L>>,
    headers: HeaderMap,
) -> Result<Response, GatewayError>
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    let owner_id = owner_from_headers(&headers)?;

    let chat = state.chat.clone();
    let entries = tokio::task::spawn_blocking(move || chat.store().entries_for_owner(owner_id))
        .await
        .map_err(|e| GatewayError::InternalError(e.to_string()))?
        .map_err(|e| GatewayError::StorageError(e.to_string()))?;

    let faqs: Vec<FaqResponse> = entries.iter().map(FaqResponse::from).collect();
    let total = faqs.len();

    Ok(Json(FaqListResponse { faqs, total }).into_response())
}

#[instrument(skip(state, headers, request))]
pub async fn chat_handler<E, F, L>(
    State(state): State<HandlerState<E, F, L>>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Response, GatewayError>
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    let owner_id = owner_from_headers(&headers)?;

    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(GatewayError::InvalidRequest("message is empty".into()));
    }

    let session_id = request
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    debug!(owner_id, session_id = %session_id, "Processing chat message");

    let chat = state.chat.clone();
    let reply = {
        let session_id = session_id.clone();
        tokio::task::spawn_blocking(move || chat.answer(owner_id, &session_id, &message))
            .await
            .map_err(|e| GatewayError::InternalError(e.to_string()))??
    };

    let score = match reply.outcome {
        ChatOutcome::Matched { score } => Some(score),
        _ => None,
    };

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        FAQMATCH_STATUS_HEADER,
        HeaderValue::from_static(reply.outcome.as_status()),
    );

    Ok((
        StatusCode::OK,
        response_headers,
        Json(ChatResponse {
            response: reply.text,
            outcome: reply.outcome.as_status().to_string(),
            score,
            session_id,
        }),
    )
        .into_response())
}

#[instrument(skip(state, headers))]
pub async fn analytics_handler<E, F, L>(
    State(state): State<HandlerState<E, F, L>>,
    headers: HeaderMap,
) -> Result<Response, GatewayError>
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    let owner_id = owner_from_headers(&headers)?;

    let chat = state.chat.clone();
    let (total_faqs, total_chats) = tokio::task::spawn_blocking(move || {
        let faqs = chat.store().count_for_owner(owner_id)?;
        let chats = chat.chat_log().count_for_owner(owner_id)?;
        Ok::<_, faqmatch::chat::ChatError>((faqs, chats))
    })
    .await
    .map_err(|e| GatewayError::InternalError(e.to_string()))??;

    Ok(Json(AnalyticsResponse {
        total_faqs,
        total_chats,
    })
    .into_response())
}
