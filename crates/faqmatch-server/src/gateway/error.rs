use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use faqmatch::chat::ChatError;

use crate::gateway::FAQMATCH_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing or malformed Authorization header")]
    MissingAuth,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("embedding failed: {0}")]
    EmbeddingFailed(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("chat log error: {0}")]
    ChatLogFailed(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<ChatError> for GatewayError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Embedding(e) => GatewayError::EmbeddingFailed(e.to_string()),
            ChatError::Store(e) => GatewayError::StorageError(e.to_string()),
            ChatError::ChatLog(e) => GatewayError::ChatLogFailed(e.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, faqmatch_status) = match &self {
            GatewayError::MissingAuth => (StatusCode::UNAUTHORIZED, "unauthorized"),
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::EmbeddingFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "embedding_error")
            }
            GatewayError::StorageError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            GatewayError::ChatLogFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "chat_log_error")
            }
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            FAQMATCH_STATUS_HEADER,
            HeaderValue::from_str(faqmatch_status).unwrap_or(HeaderValue::from_static("error")),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
