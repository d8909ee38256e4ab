//! Gateway handler tests.
//!
//! These exercise the full Axum router with the stub embedder and in-memory
//! storage, covering auth, FAQ management, chat dispositions, and analytics.

use axum::{Router, body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use faqmatch::chat::{ChatService, MemoryChatLog, NO_FAQ_FALLBACK, NOT_UNDERSTOOD_FALLBACK};
use faqmatch::embedding::{BertEmbedder, EmbedderConfig};
use faqmatch::faq::MemoryFaqStore;
use faqmatch::matching::FaqMatcher;

use crate::gateway::state::HandlerState;
use crate::gateway::{FAQMATCH_STATUS_HEADER, create_router_with_state};

/// Builds a router backed by the stub embedder and in-memory stores.
/// The returned `TempDir` keeps the storage path alive for `/ready`.
fn test_router() -> (Router, TempDir) {
    let tmp = TempDir::new().expect("tempdir");

    let embedder = BertEmbedder::load(EmbedderConfig::stub()).expect("stub embedder");
    let chat = Arc::new(ChatService::new(
        embedder,
        MemoryFaqStore::new(),
        MemoryChatLog::new(),
        FaqMatcher::new(0.30),
    ));

    let state = HandlerState::new(chat, tmp.path().to_path_buf(), crate::gateway::EMBEDDER_MODE_STUB);
    (create_router_with_state(state), tmp)
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn status_header(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(FAQMATCH_STATUS_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_healthz_reports_healthy() {
    let (router, _tmp) = test_router();

    let response = router.oneshot(get_request("/healthz", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), "healthy");

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_reports_stub_embedder_mode() {
    let (router, _tmp) = test_router();

    let response = router.oneshot(get_request("/ready", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"]["storage"], "ready");
    assert_eq!(body["components"]["embedder_mode"], "stub");
}

#[tokio::test]
async fn test_missing_auth_is_rejected() {
    let (router, _tmp) = test_router();

    let response = router
        .clone()
        .oneshot(get_request("/v1/faqs", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(status_header(&response), "unauthorized");

    let response = router
        .clone()
        .oneshot(post_json(
            "/v1/chat",
            None,
            serde_json::json!({"message": "hello"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = router
        .oneshot(get_request("/v1/analytics", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_faqs() {
    let (router, _tmp) = test_router();

    let response = router
        .clone()
        .oneshot(post_json(
            "/v1/faqs",
            Some("tenant-a"),
            serde_json::json!({
                "question": "What are your hours?",
                "answer": "9-5 Mon-Fri",
                "category": "general"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["question"], "What are your hours?");
    assert_eq!(created["answer"], "9-5 Mon-Fri");
    assert_eq!(created["category"], "general");
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));

    let response = router
        .oneshot(get_request("/v1/faqs", Some("tenant-a")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["faqs"][0]["question"], "What are your hours?");
}

#[tokio::test]
async fn test_create_faq_rejects_blank_fields() {
    let (router, _tmp) = test_router();

    let response = router
        .clone()
        .oneshot(post_json(
            "/v1/faqs",
            Some("tenant-a"),
            serde_json::json!({"question": "   ", "answer": "something"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = router
        .oneshot(post_json(
            "/v1/faqs",
            Some("tenant-a"),
            serde_json::json!({"question": "valid?", "answer": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_without_faqs_falls_back() {
    let (router, _tmp) = test_router();

    let response = router
        .oneshot(post_json(
            "/v1/chat",
            Some("tenant-a"),
            serde_json::json!({"message": "anyone there?"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), "no_faqs");

    let body = body_json(response).await;
    assert_eq!(body["response"], NO_FAQ_FALLBACK);
    assert_eq!(body["outcome"], "no_faqs");
    assert!(body["score"].is_null());
    assert!(body["session_id"].as_str().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
async fn test_chat_matches_identical_question() {
    let (router, _tmp) = test_router();

    router
        .clone()
        .oneshot(post_json(
            "/v1/faqs",
            Some("tenant-a"),
            serde_json::json!({"question": "What are your hours?", "answer": "9-5 Mon-Fri"}),
        ))
        .await
        .unwrap();

    // the stub embedder is deterministic, so the same text scores 1.0
    let response = router
        .oneshot(post_json(
            "/v1/chat",
            Some("tenant-a"),
            serde_json::json!({"message": "What are your hours?", "session_id": "sess-1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), "matched");

    let body = body_json(response).await;
    assert_eq!(body["response"], "9-5 Mon-Fri");
    assert_eq!(body["outcome"], "matched");
    assert!(body["score"].as_f64().is_some_and(|s| s > 0.99));
    assert_eq!(body["session_id"], "sess-1");
}

#[tokio::test]
async fn test_chat_unrelated_question_falls_back() {
    let (router, _tmp) = test_router();

    router
        .clone()
        .oneshot(post_json(
            "/v1/faqs",
            Some("tenant-a"),
            serde_json::json!({"question": "What are your hours?", "answer": "9-5 Mon-Fri"}),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(post_json(
            "/v1/chat",
            Some("tenant-a"),
            serde_json::json!({"message": "Tell me about quantum entanglement in frogs"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), "no_confident_match");

    let body = body_json(response).await;
    assert_eq!(body["response"], NOT_UNDERSTOOD_FALLBACK);
    assert!(body["score"].is_null());
}

#[tokio::test]
async fn test_chat_rejects_blank_message() {
    let (router, _tmp) = test_router();

    let response = router
        .oneshot(post_json(
            "/v1/chat",
            Some("tenant-a"),
            serde_json::json!({"message": "  "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(status_header(&response), "invalid_request");
}

#[tokio::test]
async fn test_tenants_are_isolated() {
    let (router, _tmp) = test_router();

    router
        .clone()
        .oneshot(post_json(
            "/v1/faqs",
            Some("tenant-a"),
            serde_json::json!({"question": "What are your hours?", "answer": "9-5 Mon-Fri"}),
        ))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(get_request("/v1/faqs", Some("tenant-b")))
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed["total"], 0);

    // tenant-b asking tenant-a's question sees the no-FAQ fallback
    let response = router
        .oneshot(post_json(
            "/v1/chat",
            Some("tenant-b"),
            serde_json::json!({"message": "What are your hours?"}),
        ))
        .await
        .unwrap();
    assert_eq!(status_header(&response), "no_faqs");
}

#[tokio::test]
async fn test_analytics_counts_faqs_and_chats() {
    let (router, _tmp) = test_router();

    router
        .clone()
        .oneshot(post_json(
            "/v1/faqs",
            Some("tenant-a"),
            serde_json::json!({"question": "What are your hours?", "answer": "9-5 Mon-Fri"}),
        ))
        .await
        .unwrap();

    for message in ["What are your hours?", "off topic question"] {
        router
            .clone()
            .oneshot(post_json(
                "/v1/chat",
                Some("tenant-a"),
                serde_json::json!({"message": message}),
            ))
            .await
            .unwrap();
    }

    let response = router
        .oneshot(get_request("/v1/analytics", Some("tenant-a")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_faqs"], 1);
    assert_eq!(body["total_chats"], 2);
}
