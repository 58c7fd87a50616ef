// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! Transport to the relay — one `POST /api/chat` per exchange.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use parla_model::ChatTurn;

use crate::error::ClientError;

/// How the controller reaches the relay.  A trait so tests can script
/// replies and failures without a network.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Submit the full transcript; return the generated reply text.
    async fn generate(&self, transcript: &[ChatTurn]) -> Result<String, ClientError>;
}

/// HTTP transport talking to a running relay.
pub struct HttpRelay {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRelay {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    async fn generate(&self, transcript: &[ChatTurn]) -> Result<String, ClientError> {
        let url = format!("{}/api/chat", self.base_url.trim_end_matches('/'));
        debug!(%url, turns = transcript.len(), "submitting transcript");

        let resp = self
            .client
            .post(&url)
            .json(&json!({ "conversation": transcript }))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // The relay's failure body is `{message}`; fall back to the
            // status line when the body is not parseable.
            let message = resp
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v["message"].as_str().map(String::from))
                .unwrap_or_else(|| status.to_string());
            return Err(ClientError::Server { status: status.as_u16(), message });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        match body["result"].as_str() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(ClientError::EmptyReply),
        }
    }
}
