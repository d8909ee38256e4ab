//! HTTP gateway (Axum) for FAQ management and chat.
//!
//! This module is primarily used by the `faqmatch` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use faqmatch::chat::ChatLog;
use faqmatch::embedding::TextEmbedder;
use faqmatch::faq::FaqStore;

pub use handler::{analytics_handler, chat_handler, create_faq_handler, list_faqs_handler};
pub use state::{EMBEDDER_MODE_REAL, EMBEDDER_MODE_STUB, HandlerState};

/// Response header carrying the request disposition (match status, error
/// class) so callers and probes can branch without parsing the body.
pub const FAQMATCH_STATUS_HEADER: &str = "x-faqmatch-status";
pub const FAQMATCH_STATUS_HEALTHY: &str = "healthy";
pub const FAQMATCH_STATUS_READY: &str = "ready";
pub const FAQMATCH_STATUS_ERROR: &str = "error";

pub fn create_router_with_state<E, F, L>(state: HandlerState<E, F, L>) -> Router
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route(
            "/v1/faqs",
            post(create_faq_handler).get(list_faqs_handler),
        )
        .route("/v1/chat", post(chat_handler))
        .route("/v1/analytics", get(analytics_handler))
        .route("/ready", get(ready_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub storage: &'static str,
    pub embedding: &'static str,
    pub embedder_mode: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        FAQMATCH_STATUS_HEADER,
        HeaderValue::from_static(FAQMATCH_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<E, F, L>(State(state): State<HandlerState<E, F, L>>) -> Response
where
    E: TextEmbedder + 'static,
    F: FaqStore + 'static,
    L: ChatLog + 'static,
{
    let storage_status = if state.storage_path.exists() && state.storage_path.is_dir() {
        FAQMATCH_STATUS_READY
    } else {
        FAQMATCH_STATUS_ERROR
    };

    let components = ComponentStatus {
        http: FAQMATCH_STATUS_READY,
        storage: storage_status,
        embedding: FAQMATCH_STATUS_READY,
        embedder_mode: state.embedder_mode,
    };

    let is_ready =
        components.storage == FAQMATCH_STATUS_READY && components.embedding == FAQMATCH_STATUS_READY;

    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready { "ok" } else { "pending" };

    let mut headers = HeaderMap::new();
    headers.insert(
        FAQMATCH_STATUS_HEADER,
        HeaderValue::from_str(status_msg).unwrap_or(HeaderValue::from_static("error")),
    );

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
