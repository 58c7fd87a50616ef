// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Provider identifier.  Common values: "google" | "mock"
    pub provider: String,
    /// Model name forwarded to the provider API
    pub name: String,
    /// Environment variable that holds the API key (read at runtime)
    pub api_key_env: Option<String>,
    /// Explicit API key; prefer api_key_env in config files to avoid secrets
    /// in version-controlled files
    pub api_key: Option<String>,
    /// Base URL override.  Useful for local proxies or mock endpoints.
    /// For hosted providers the correct default is auto-selected.
    pub base_url: Option<String>,
    /// Sampling temperature (0.0–2.0)
    pub temperature: Option<f32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: "google".into(),
            name: "gemini-2.5-flash".into(),
            api_key_env: None,
            api_key: None,
            base_url: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// TCP port the relay listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served as the static client bundle.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// System instruction sent with every completion.  Pins the reply
    /// language regardless of the language the user writes in.
    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
    /// Sampling temperature used for chat completions.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            system_instruction: default_system_instruction(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the relay the terminal client talks to.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { relay_url: default_relay_url() }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "public".into()
}

fn default_system_instruction() -> String {
    "Jawab hanya menggunakan bahasa Indonesia".into()
}

fn default_temperature() -> f32 {
    0.9
}

fn default_relay_url() -> String {
    "http://localhost:5000".into()
}
