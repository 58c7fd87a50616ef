use async_trait::async_trait;

use crate::CompletionRequest;

#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Human-readable provider name for status display.
    fn name(&self) -> &str;

    /// Model identifier as reported to users.
    fn model_name(&self) -> &str;

    /// Send a completion request and return the generated text.
    ///
    /// One call per request; failures are returned as errors, never as
    /// partial output.
    async fn complete(&self, req: CompletionRequest) -> anyhow::Result<String>;
}
