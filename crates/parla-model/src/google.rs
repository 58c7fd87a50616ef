//! Google Gemini driver — native Generative Language API.
//!
//! Uses the non-streaming `generateContent` endpoint; this system has no
//! token-by-token rendering, so one request maps to one JSON response.
//!
//! # Auth
//! API key via `x-goog-api-key` header.
//!
//! # Endpoint pattern
//! `POST https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent`

use anyhow::{bail, Context};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::{ChatTurn, CompletionRequest, Role};

pub struct GoogleProvider {
    model: String,
    api_key: Option<String>,
    base_url: String,
    temperature: f32,
    client: reqwest::Client,
}

impl GoogleProvider {
    pub fn new(
        model: String,
        api_key: Option<String>,
        base_url: Option<String>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            model,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://generativelanguage.googleapis.com".into()),
            temperature: temperature.unwrap_or(0.9),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl crate::ModelProvider for GoogleProvider {
    fn name(&self) -> &str { "google" }
    fn model_name(&self) -> &str { &self.model }

    async fn complete(&self, req: CompletionRequest) -> anyhow::Result<String> {
        let key = self.api_key.as_deref().context("GEMINI_API_KEY not set")?;

        let temperature = req.temperature.unwrap_or(self.temperature);
        let body = build_request_body(&req.messages, req.system_instruction.as_deref(), temperature);

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model,
        );

        debug!(model = %self.model, turns = req.messages.len(), "sending Google Gemini request");

        let resp = self.client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await
            .context("Google Gemini request failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("Google Gemini error {status}: {text}");
        }

        let v: Value = resp.json().await.context("Google Gemini response was not JSON")?;
        extract_text(&v)
    }
}

/// Build the `generateContent` request body.
///
/// `Role::User` maps to `"user"` and `Role::Model` to `"model"`, each turn
/// carrying a single text part.  `systemInstruction` is attached only when
/// an instruction is present.
fn build_request_body(messages: &[ChatTurn], system: Option<&str>, temperature: f32) -> Value {
    let contents: Vec<Value> = messages
        .iter()
        .map(|t| {
            let role = match t.role {
                Role::User => "user",
                Role::Model => "model",
            };
            json!({ "role": role, "parts": [{ "text": t.text }] })
        })
        .collect();

    let mut body = json!({
        "contents": contents,
        "generationConfig": {
            "temperature": temperature,
        }
    });
    if let Some(instruction) = system {
        body["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
    }
    body
}

/// Pull the generated text out of a `generateContent` response.
///
/// Joins all text parts of the first candidate.  A response without any
/// candidate text is an error so the relay reports it as a failure rather
/// than returning an empty reply.
fn extract_text(v: &Value) -> anyhow::Result<String> {
    let parts = v["candidates"][0]["content"]["parts"]
        .as_array()
        .context("Google Gemini response has no candidate parts")?;

    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        bail!("Google Gemini returned an empty candidate");
    }
    Ok(text)
}
