// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! The relay's single API route — `POST /api/chat`.
//!
//! # Wire contract
//!
//! Request:  `{ "conversation": [ {"role": "user"|"model", "text": "..."} ] }`
//! Success:  `200 { "result": "<generated text>" }`
//! Failure:  `500 { "message": "<description>" }`
//!
//! Every failure (malformed body, wrong shape, provider error) takes the
//! same 500 path.  The JSON extractor's own rejection is captured in the
//! handler signature so it is folded into that path too instead of axum's
//! default 4xx.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info};

use parla_model::{ChatTurn, CompletionRequest, ModelProvider};

use crate::error::RelayError;

/// Shared per-request context.  Nothing here is mutable, so concurrent
/// requests need no locking; each one independently awaits its own
/// provider call.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ModelProvider>,
    /// Instruction pinning the reply language, sent with every completion.
    pub system_instruction: String,
    /// Sampling temperature for chat completions.
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub result: String,
}

/// `POST /api/chat` — forward the transcript, return the generated reply.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    let Json(body) = payload.map_err(|e| RelayError::BadRequest(e.body_text()))?;

    let conversation = match body.get("conversation") {
        Some(v) if v.is_array() => v.clone(),
        _ => return Err(RelayError::BadRequest("conversation must be an array".into())),
    };
    let messages: Vec<ChatTurn> = serde_json::from_value(conversation)
        .map_err(|e| RelayError::BadRequest(format!("invalid conversation entry: {e}")))?;

    debug!(turns = messages.len(), "forwarding transcript to provider");

    let result = state
        .provider
        .complete(CompletionRequest {
            messages,
            system_instruction: Some(state.system_instruction.clone()),
            temperature: Some(state.temperature),
        })
        .await?;

    info!(model = state.provider.model_name(), chars = result.len(), "reply generated");
    Ok(Json(ChatResponse { result }))
}

/// Assemble the relay router: the chat route, permissive CORS, and static
/// serving of the client bundle for every other path.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use parla_model::{MockProvider, ScriptedMockProvider};
    use tower::ServiceExt;

    fn state_with(provider: Arc<dyn ModelProvider>) -> AppState {
        AppState {
            provider,
            system_instruction: "Jawab hanya menggunakan bahasa Indonesia".into(),
            temperature: 0.9,
        }
    }

    fn router_with(provider: Arc<dyn ModelProvider>) -> Router {
        build_router(state_with(provider), "public")
    }

    async fn post_chat(router: Router, body: &str) -> (StatusCode, Value) {
        let resp = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn valid_transcript_returns_result() {
        let router = router_with(Arc::new(MockProvider));
        let (status, body) = post_chat(
            router,
            r#"{"conversation":[{"role":"user","text":"halo"}]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "MOCK: halo");
        assert!(body.get("message").is_none(), "200 carries result only");
    }

    #[tokio::test]
    async fn non_array_conversation_names_the_constraint() {
        let router = router_with(Arc::new(MockProvider));
        let (status, body) =
            post_chat(router, r#"{"conversation":"not an array"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().unwrap().contains("array"));
    }

    #[tokio::test]
    async fn missing_conversation_is_rejected() {
        let router = router_with(Arc::new(MockProvider));
        let (status, body) = post_chat(router, r#"{"history":[]}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().unwrap().contains("array"));
    }

    #[tokio::test]
    async fn malformed_body_takes_the_500_path() {
        let router = router_with(Arc::new(MockProvider));
        let (status, body) = post_chat(router, "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].is_string());
        assert!(body.get("result").is_none(), "500 carries message only");
    }

    #[tokio::test]
    async fn unknown_role_is_rejected() {
        let router = router_with(Arc::new(MockProvider));
        let (status, body) = post_chat(
            router,
            r#"{"conversation":[{"role":"system","text":"x"}]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().unwrap().contains("conversation entry"));
    }

    #[tokio::test]
    async fn provider_failure_becomes_500_message() {
        let provider = ScriptedMockProvider::new(vec![Err(anyhow::anyhow!("upstream down"))]);
        let router = router_with(Arc::new(provider));
        let (status, body) = post_chat(
            router,
            r#"{"conversation":[{"role":"user","text":"hi"}]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "upstream down");
    }

    #[tokio::test]
    async fn handler_passes_instruction_and_temperature() {
        let provider = Arc::new(ScriptedMockProvider::new(vec![Ok("ok".into())]));
        let router = router_with(provider.clone());
        post_chat(
            router,
            r#"{"conversation":[{"role":"user","text":"hi"},{"role":"model","text":"yo"}]}"#,
        )
        .await;

        let seen = provider.last_request.lock().unwrap();
        let req = seen.as_ref().expect("provider saw the request");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(
            req.system_instruction.as_deref(),
            Some("Jawab hanya menggunakan bahasa Indonesia")
        );
        assert_eq!(req.temperature, Some(0.9));
    }
}
