use std::sync::Arc;

use axum::{extract::Extension, Json};
use tracing::error;

use crate::models::chat::{ChatRequest, ChatResponse, ClearRequest, StatusResponse};
use crate::services::ChatService;

/// POST /chat
///
/// Failures are reported inside an HTTP 200 envelope with an `error` key
/// rather than an error status code; the frontend checks for that key.
pub async fn chat_handler(
    Extension(chat_service): Extension<Arc<ChatService>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    match chat_service
        .handle_chat(&request.user_id, request.messages)
        .await
    {
        Ok(reply) => Json(ChatResponse::Reply { reply }),
        Err(e) => {
            error!("Chat request failed: {}", e);
            Json(ChatResponse::Error {
                error: e.to_string(),
            })
        }
    }
}

/// POST /clear - idempotent, succeeds even for unknown user ids.
pub async fn clear_handler(
    Extension(chat_service): Extension<Arc<ChatService>>,
    Json(request): Json<ClearRequest>,
) -> Json<StatusResponse> {
    chat_service.clear(&request.user_id);
    Json(StatusResponse {
        status: "cleared".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        routing::post,
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{AffiliateConfig, ConversationConfig, PromptsConfig};
    use crate::services::affiliate::{AffiliateLinkBuilder, ReplyPostProcessor};
    use crate::services::conversation::ConversationStore;
    use crate::services::llm_service::MockLlmProvider;
    use crate::utils::error::ApiError;

    fn test_router(mock: MockLlmProvider) -> Router {
        let links = AffiliateLinkBuilder::new(AffiliateConfig {
            marketplace_base_url: "https://www.amazon.in".to_string(),
            tag: "advisor-21".to_string(),
        });
        let chat_service = Arc::new(ChatService::new(
            Arc::new(ConversationStore::new()),
            Arc::new(mock),
            ReplyPostProcessor::with_default_extractors(links),
            ConversationConfig { history_limit: 20 },
            PromptsConfig {
                system_prompt: "You are an AI Product Expert.".to_string(),
            },
        ));

        Router::new()
            .route("/chat", post(chat_handler))
            .route("/clear", post(clear_handler))
            .layer(Extension(chat_service))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_reply_with_affiliate_links() {
        let mut mock = MockLlmProvider::new();
        mock.expect_generate()
            .returning(|_| Ok("1. Galaxy S21 (₹45000)\n2. Pixel 6 (₹40000)".to_string()));

        let request = post_json(
            "/chat",
            json!({
                "user_id": "u1",
                "messages": [{"role": "user", "content": "best phone under 50k?"}]
            }),
        );
        let response = test_router(mock).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let reply = body["reply"].as_str().unwrap();
        assert!(reply.contains("Best Pick"));
        assert!(reply.contains("tag=advisor-21"));
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_provider_failure_yields_error_envelope_with_200() {
        let mut mock = MockLlmProvider::new();
        mock.expect_generate()
            .returning(|_| Err(ApiError::LlmError("provider unavailable".to_string())));

        let request = post_json(
            "/chat",
            json!({
                "user_id": "u1",
                "messages": [{"role": "user", "content": "hello"}]
            }),
        );
        let response = test_router(mock).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("provider unavailable"));
        assert!(body.get("reply").is_none());
    }

    #[tokio::test]
    async fn test_clear_unknown_user_reports_cleared() {
        let request = post_json("/clear", json!({"user_id": "never-seen"}));
        let response = test_router(MockLlmProvider::new())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "cleared");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_before_business_logic() {
        let request = post_json("/chat", json!({"messages": []}));
        let response = test_router(MockLlmProvider::new())
            .oneshot(request)
            .await
            .unwrap();

        // Missing user_id never reaches the chat service.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
