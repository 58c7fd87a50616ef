mod types;
mod provider;
mod google;
mod mock;

pub use types::*;
pub use provider::ModelProvider;
pub use google::GoogleProvider;
pub use mock::{MockProvider, ScriptedMockProvider};

use anyhow::bail;
use parla_config::ModelConfig;

/// Construct a boxed [`ModelProvider`] from configuration.
///
/// Provider selection:
/// - `"google"` → [`GoogleProvider`]
/// - `"mock"` → [`MockProvider`] (echo-back)
pub fn from_config(cfg: &ModelConfig) -> anyhow::Result<Box<dyn ModelProvider>> {
    let key = resolve_api_key(cfg);
    match cfg.provider.as_str() {
        "google" => Ok(Box::new(GoogleProvider::new(
            cfg.name.clone(),
            key,
            cfg.base_url.clone(),
            cfg.temperature,
        ))),
        "mock" => Ok(Box::new(MockProvider)),
        other => bail!("unknown model provider: {other}"),
    }
}

fn resolve_api_key(cfg: &ModelConfig) -> Option<String> {
    if let Some(k) = &cfg.api_key {
        return Some(k.clone());
    }
    if let Some(env) = &cfg.api_key_env {
        if let Ok(k) = std::env::var(env) {
            return Some(k);
        }
    }
    std::env::var("GEMINI_API_KEY").ok()
}
