// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{CompletionRequest, Role};

/// Deterministic mock provider for tests.  Echoes the last user message
/// back as the model response.
#[derive(Default)]
pub struct MockProvider;

#[async_trait]
impl crate::ModelProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }
    fn model_name(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, req: CompletionRequest) -> anyhow::Result<String> {
        let reply = req
            .messages
            .iter()
            .rev()
            .find(|m| matches!(m.role, Role::User))
            .map(|m| m.text.as_str())
            .unwrap_or("[no input]");
        Ok(format!("MOCK: {reply}"))
    }
}

/// A pre-scripted mock provider.  Each call to `complete` pops the next
/// response from the front of the queue.  This lets tests specify exact
/// replies – including failures – without network access.
pub struct ScriptedMockProvider {
    scripts: Arc<Mutex<Vec<anyhow::Result<String>>>>,
    /// The last `CompletionRequest` seen by this provider.
    /// Written on each `complete()` call so tests can inspect what was sent.
    pub last_request: Arc<Mutex<Option<CompletionRequest>>>,
}

impl ScriptedMockProvider {
    /// Build a provider from an ordered list of per-call results.
    pub fn new(scripts: Vec<anyhow::Result<String>>) -> Self {
        Self {
            scripts: Arc::new(Mutex::new(scripts)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl crate::ModelProvider for ScriptedMockProvider {
    fn name(&self) -> &str {
        "scripted-mock"
    }
    fn model_name(&self) -> &str {
        "scripted-mock"
    }

    async fn complete(&self, req: CompletionRequest) -> anyhow::Result<String> {
        *self.last_request.lock().unwrap() = Some(req);
        let mut scripts = self.scripts.lock().unwrap();
        if scripts.is_empty() {
            anyhow::bail!("scripted mock exhausted");
        }
        scripts.remove(0)
    }
}
